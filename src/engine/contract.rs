// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Contracts between the traversal engine and its collaborators.
//!
//! The engine never sees a concrete tree. It discovers structure through a
//! [`ChildSource`] (index addressed, used by the resumable engine) or a
//! [`ChildrenSource`] (all children at once, used by the recursive and
//! stacked views), and it hands every completed branch to a [`ResultSink`].
//!
//! Both lookup forms must agree exactly: for a fixed branch, `child_at` with
//! indices `0, 1, 2, ...` must yield the same nodes, in the same order, as
//! iterating `children`, stopping at the first `None`.
//!
//! A child source may fail. Its error, like the sink's, is returned from
//! [`IterativeDfs::advance`](super::IterativeDfs::advance) as a
//! [`StepError`](super::StepError).
//!
//! # Example
//!
//! ```
//! use lazy_dfs::engine::{child_fn, sink_fn, IterativeDfs};
//!
//! // Two levels, two choices each.
//! let mut found = Vec::new();
//! let mut dfs = IterativeDfs::new(
//!     (),
//!     child_fn(|_: &(), branch: &[u8], index| {
//!         (branch.len() < 2 && index < 2).then_some(index as u8)
//!     }),
//!     sink_fn(|_: &(), branch: &[u8]| found.push(branch.to_vec())),
//!     None,
//! );
//! dfs.run_to_completion().unwrap();
//! drop(dfs);
//! assert_eq!(found, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
//! ```

use std::convert::Infallible;
use std::marker::PhantomData;

/// Index-addressable child lookup.
///
/// Returns the child of `branch` at `index`, or `None` once `index` is past
/// the last child. Must be referentially consistent across calls and must
/// not have gaps; the engine stops probing at the first `None`.
///
/// When `branch` is empty the source is asked for the roots, which it will
/// usually locate through `context`.
///
/// An `Err` aborts the current step. The same lookup is made again on the
/// next step.
pub trait ChildSource<C: ?Sized, T> {
    type Error;

    fn child_at(
        &mut self,
        context: &C,
        branch: &[T],
        index: usize,
    ) -> Result<Option<T>, Self::Error>;
}

/// Whole-collection child lookup.
///
/// `None` and an empty collection both mean "no children".
pub trait ChildrenSource<C: ?Sized, T> {
    type Children: IntoIterator<Item = T>;

    fn children(&mut self, context: &C, branch: &[T]) -> Option<Self::Children>;
}

/// Receives every completed branch, synchronously and exactly once.
///
/// The slice is only valid for the duration of the call. The engine reuses
/// its backing storage, so a sink that keeps results must copy them.
pub trait ResultSink<C: ?Sized, T> {
    type Error;

    fn on_result(&mut self, context: &C, branch: &[T]) -> Result<(), Self::Error>;
}

/// Infallible [`ChildSource`] backed by a closure. See [`child_fn`].
pub struct ChildFn<F>(F);

/// Wrap a closure that cannot fail as a [`ChildSource`].
pub fn child_fn<C: ?Sized, T, F>(f: F) -> ChildFn<F>
where
    F: FnMut(&C, &[T], usize) -> Option<T>,
{
    ChildFn(f)
}

impl<C: ?Sized, T, F> ChildSource<C, T> for ChildFn<F>
where
    F: FnMut(&C, &[T], usize) -> Option<T>,
{
    type Error = Infallible;

    #[inline]
    fn child_at(
        &mut self,
        context: &C,
        branch: &[T],
        index: usize,
    ) -> Result<Option<T>, Infallible> {
        Ok((self.0)(context, branch, index))
    }
}

/// Fallible [`ChildSource`] backed by a closure. See [`try_child_fn`].
pub struct TryChildFn<F>(F);

/// Wrap a closure returning `Result` as a [`ChildSource`], for lookups
/// backed by I/O or parsing.
pub fn try_child_fn<C: ?Sized, T, E, F>(f: F) -> TryChildFn<F>
where
    F: FnMut(&C, &[T], usize) -> Result<Option<T>, E>,
{
    TryChildFn(f)
}

impl<C: ?Sized, T, E, F> ChildSource<C, T> for TryChildFn<F>
where
    F: FnMut(&C, &[T], usize) -> Result<Option<T>, E>,
{
    type Error = E;

    #[inline]
    fn child_at(&mut self, context: &C, branch: &[T], index: usize) -> Result<Option<T>, E> {
        (self.0)(context, branch, index)
    }
}

/// [`ChildrenSource`] backed by a closure. See [`children_fn`].
pub struct ChildrenFn<F, I> {
    f: F,
    _children: PhantomData<fn() -> I>,
}

/// Wrap a closure as a [`ChildrenSource`].
pub fn children_fn<C: ?Sized, T, I, F>(f: F) -> ChildrenFn<F, I>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&C, &[T]) -> Option<I>,
{
    ChildrenFn {
        f,
        _children: PhantomData,
    }
}

impl<C: ?Sized, T, I, F> ChildrenSource<C, T> for ChildrenFn<F, I>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&C, &[T]) -> Option<I>,
{
    type Children = I;

    #[inline]
    fn children(&mut self, context: &C, branch: &[T]) -> Option<I> {
        (self.f)(context, branch)
    }
}

/// Infallible [`ResultSink`] backed by a closure. See [`sink_fn`].
pub struct SinkFn<F>(F);

/// Wrap a closure that cannot fail as a [`ResultSink`].
pub fn sink_fn<C: ?Sized, T, F>(f: F) -> SinkFn<F>
where
    F: FnMut(&C, &[T]),
{
    SinkFn(f)
}

impl<C: ?Sized, T, F> ResultSink<C, T> for SinkFn<F>
where
    F: FnMut(&C, &[T]),
{
    type Error = Infallible;

    #[inline]
    fn on_result(&mut self, context: &C, branch: &[T]) -> Result<(), Infallible> {
        (self.0)(context, branch);
        Ok(())
    }
}

/// Fallible [`ResultSink`] backed by a closure. See [`try_sink_fn`].
pub struct TrySinkFn<F>(F);

/// Wrap a closure returning `Result` as a [`ResultSink`]. Its errors
/// propagate out of [`IterativeDfs::advance`](super::IterativeDfs::advance).
pub fn try_sink_fn<C: ?Sized, T, E, F>(f: F) -> TrySinkFn<F>
where
    F: FnMut(&C, &[T]) -> Result<(), E>,
{
    TrySinkFn(f)
}

impl<C: ?Sized, T, E, F> ResultSink<C, T> for TrySinkFn<F>
where
    F: FnMut(&C, &[T]) -> Result<(), E>,
{
    type Error = E;

    #[inline]
    fn on_result(&mut self, context: &C, branch: &[T]) -> Result<(), E> {
        (self.0)(context, branch)
    }
}

/// Sink that discards every result.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl<C: ?Sized, T> ResultSink<C, T> for NoopSink {
    type Error = Infallible;

    #[inline]
    fn on_result(&mut self, _context: &C, _branch: &[T]) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Sink that copies every branch into a list.
#[derive(Debug, Clone)]
pub struct Collect<T> {
    pub branches: Vec<Vec<T>>,
}

impl<T> Default for Collect<T> {
    fn default() -> Self {
        Self {
            branches: Vec::new(),
        }
    }
}

impl<T> Collect<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Vec<Vec<T>> {
        self.branches
    }
}

impl<C: ?Sized, T: Clone> ResultSink<C, T> for Collect<T> {
    type Error = Infallible;

    fn on_result(&mut self, _context: &C, branch: &[T]) -> Result<(), Infallible> {
        self.branches.push(branch.to_vec());
        Ok(())
    }
}

impl<C: ?Sized, T, S: ChildSource<C, T> + ?Sized> ChildSource<C, T> for &mut S {
    type Error = S::Error;

    #[inline]
    fn child_at(
        &mut self,
        context: &C,
        branch: &[T],
        index: usize,
    ) -> Result<Option<T>, Self::Error> {
        (**self).child_at(context, branch, index)
    }
}

impl<C: ?Sized, T, R: ResultSink<C, T> + ?Sized> ResultSink<C, T> for &mut R {
    type Error = R::Error;

    #[inline]
    fn on_result(&mut self, context: &C, branch: &[T]) -> Result<(), Self::Error> {
        (**self).on_result(context, branch)
    }
}
