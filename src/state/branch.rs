// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Branch and resume cursors.
//!
//! This is the explicit form of a recursive traversal's call stack. The
//! branch holds the node chosen at every depth, and `cursors[d]` holds the
//! index of the next untried child at depth `d`. Both grow by at most one
//! entry per level, so memory is bounded by tree depth.
//!
//! Cursor entries deeper than the current branch are the resume points of
//! the previous step. They are kept until the engine backtracks past them.

/// Branch nodes plus per-depth resume cursors.
#[derive(Clone, Debug)]
pub struct BranchState<T> {
    items: Vec<T>,
    cursors: Vec<usize>,
}

impl<T> Default for BranchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BranchState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursors: Vec::new(),
        }
    }

    /// Current branch, root first.
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Resume cursors, one per depth reached and not yet backtracked past.
    #[inline]
    pub fn cursors(&self) -> &[usize] {
        &self.cursors
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    /// Empty the branch for a replay, keeping the cursors.
    #[inline]
    pub fn rewind(&mut self) {
        self.items.clear();
    }

    /// Forget everything, cursors included.
    pub fn reset(&mut self) {
        self.items.clear();
        self.cursors.clear();
    }

    /// Cursor at the current depth, entering the level if it is new.
    #[inline]
    pub fn cursor(&mut self) -> usize {
        let depth = self.items.len();
        while self.cursors.len() <= depth {
            self.cursors.push(0);
        }
        self.cursors[depth]
    }

    /// Append a node, moving one level deeper.
    #[inline]
    pub fn descend(&mut self, item: T) {
        self.items.push(item);
    }

    /// Step back up one level after the current level ran out of children.
    ///
    /// Removes the last node, moves its parent's cursor to the next sibling
    /// and drops the cursors below it. Returns `false` at the root.
    pub fn backtrack(&mut self) -> bool {
        if self.items.pop().is_none() {
            return false;
        }
        let parent = self.items.len();
        self.cursors[parent] += 1;
        self.cursors.truncate(parent + 1);
        true
    }

    /// Record that the current branch was reported as a leaf.
    ///
    /// The leaf level's cursor moves past zero so the replay on the next
    /// step finds no untried child there and backtracks.
    pub fn mark_leaf(&mut self) {
        let depth = self.items.len();
        self.cursors[depth] += 1;
    }

    /// Record that the current branch was reported at the depth limit.
    ///
    /// No lookup happens at the limit, so the node itself is marked as tried
    /// by moving its parent's cursor on. Without this the next replay would
    /// descend to the same node and report it again.
    pub fn mark_depth_limited(&mut self) {
        let depth = self.items.len();
        if depth == 0 {
            return;
        }
        self.cursors[depth - 1] += 1;
        self.cursors.truncate(depth);
    }
}
