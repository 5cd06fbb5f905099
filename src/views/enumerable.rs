// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy-sequence view over the resumable engine.
//!
//! Each item is produced by exactly one successful
//! [`IterativeDfs::advance`] call, so nothing is buffered beyond the branch
//! being yielded.

use std::convert::Infallible;
use std::iter::FusedIterator;

use crate::engine::{ChildSource, IterativeDfs, NoopSink, StepError};

/// Forward-only, restartable sequence of branches.
///
/// [`next_branch`](Self::next_branch) lends the engine's own buffer. The
/// [`Iterator`] implementation copies it into a fresh `Vec` per item. Both
/// need a child source that cannot fail; a fallible one is driven with
/// [`try_next_branch`](Self::try_next_branch).
///
/// # Example
///
/// ```
/// use lazy_dfs::engine::child_fn;
/// use lazy_dfs::views::EnumerableDfs;
///
/// let source = child_fn(|_: &(), branch: &[char], index| {
///     (branch.len() < 2).then(|| ['x', 'y'].get(index).copied()).flatten()
/// });
/// let words: Vec<String> = EnumerableDfs::new((), source, None)
///     .map(|branch| branch.into_iter().collect())
///     .collect();
/// assert_eq!(words, ["xx", "xy", "yx", "yy"]);
/// ```
pub struct EnumerableDfs<C, T, S> {
    dfs: IterativeDfs<C, T, S, NoopSink>,
}

impl<C, T, S> EnumerableDfs<C, T, S>
where
    S: ChildSource<C, T>,
{
    pub fn new(context: C, child_source: S, max_depth: Option<usize>) -> Self {
        Self {
            dfs: IterativeDfs::new(context, child_source, NoopSink, max_depth),
        }
    }

    /// Step to the next branch and borrow it, or return the child source's
    /// error. After an error the same step is retried by the next call.
    pub fn try_next_branch(&mut self) -> Result<Option<&[T]>, S::Error> {
        match self.dfs.advance() {
            Ok(true) => Ok(Some(self.dfs.branch())),
            Ok(false) => Ok(None),
            Err(StepError::Lookup(err)) => Err(err),
            Err(StepError::Sink(never)) => match never {},
        }
    }

    /// Restart the sequence from the first branch.
    pub fn reset(&mut self) {
        self.dfs.reset();
    }

    /// Restart the sequence over a new context.
    pub fn set_context(&mut self, context: C) {
        self.dfs.set_context(context);
    }

    /// The underlying engine, e.g. for its statistics.
    pub fn engine(&self) -> &IterativeDfs<C, T, S, NoopSink> {
        &self.dfs
    }
}

impl<C, T, S> EnumerableDfs<C, T, S>
where
    S: ChildSource<C, T, Error = Infallible>,
{
    /// Step to the next branch and borrow it. The slice is overwritten by
    /// the following call.
    pub fn next_branch(&mut self) -> Option<&[T]> {
        match self.try_next_branch() {
            Ok(branch) => branch,
            Err(never) => match never {},
        }
    }
}

impl<C, T, S> Iterator for EnumerableDfs<C, T, S>
where
    S: ChildSource<C, T, Error = Infallible>,
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        self.next_branch().map(<[T]>::to_vec)
    }
}

impl<C, T, S> FusedIterator for EnumerableDfs<C, T, S>
where
    S: ChildSource<C, T, Error = Infallible>,
    T: Clone,
{
}
