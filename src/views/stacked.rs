// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy traversal over a stack of child iterators.
//!
//! This keeps one live child iterator per depth instead of resume cursors,
//! so a step continues where the previous one stopped without replaying the
//! branch from the root. It needs a [`ChildrenSource`] whose iterators own
//! their data, and in exchange never asks for the same children twice.
//!
//! The iterators are kept apart from the current nodes so the branch stays
//! a contiguous slice.

use std::iter::FusedIterator;

use crate::engine::ChildrenSource;

type ChildIter<C, T, S> = <<S as ChildrenSource<C, T>>::Children as IntoIterator>::IntoIter;

pub struct StackedDfs<C, T, S>
where
    S: ChildrenSource<C, T>,
{
    context: C,
    children_source: S,
    max_depth: Option<usize>,
    iters: Vec<ChildIter<C, T, S>>,
    items: Vec<T>,
    started: bool,
}

impl<C, T, S> StackedDfs<C, T, S>
where
    S: ChildrenSource<C, T>,
{
    pub fn new(context: C, children_source: S, max_depth: Option<usize>) -> Self {
        Self {
            context,
            children_source,
            max_depth: max_depth.filter(|&limit| limit > 0),
            iters: Vec::new(),
            items: Vec::new(),
            started: false,
        }
    }

    /// Step to the next branch and borrow it.
    pub fn next_branch(&mut self) -> Option<&[T]> {
        let positioned = if self.started {
            self.next_sibling()
        } else {
            self.started = true;
            self.push_children()
        };
        if !positioned {
            return None;
        }

        while !self.at_limit() && self.push_children() {}
        Some(&self.items)
    }

    pub fn reset(&mut self) {
        self.iters.clear();
        self.items.clear();
        self.started = false;
    }

    #[inline]
    fn at_limit(&self) -> bool {
        self.max_depth
            .is_some_and(|limit| self.items.len() >= limit)
    }

    /// Descend to the first child of the current branch, if it has one.
    fn push_children(&mut self) -> bool {
        let Some(children) = self.children_source.children(&self.context, &self.items) else {
            return false;
        };
        let mut iter = children.into_iter();
        match iter.next() {
            Some(item) => {
                self.iters.push(iter);
                self.items.push(item);
                true
            }
            None => false,
        }
    }

    /// Replace the deepest node with its next sibling, popping exhausted
    /// levels on the way up.
    fn next_sibling(&mut self) -> bool {
        while let Some(iter) = self.iters.last_mut() {
            if let Some(item) = iter.next() {
                if let Some(last) = self.items.last_mut() {
                    *last = item;
                }
                return true;
            }
            self.iters.pop();
            self.items.pop();
        }
        false
    }
}

impl<C, T, S> Iterator for StackedDfs<C, T, S>
where
    S: ChildrenSource<C, T>,
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        self.next_branch().map(<[T]>::to_vec)
    }
}

impl<C, T, S> FusedIterator for StackedDfs<C, T, S>
where
    S: ChildrenSource<C, T>,
    T: Clone,
{
}
