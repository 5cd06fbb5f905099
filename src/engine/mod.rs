// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Resumable depth-first traversal engine.
//!
//! The engine walks an implicit tree whose structure is discovered through a
//! [`ChildSource`]. It can be driven one result at a time: each call to
//! [`IterativeDfs::advance`] finds the next branch in depth-first,
//! left-to-right order, hands it to the [`ResultSink`], and returns.
//!
//! # Architecture
//!
//! Instead of a call stack, the engine keeps a [`BranchState`]: the current
//! branch plus one resume cursor per depth. Every step:
//!
//! 1. Empties the branch and replays it from the root by asking the child
//!    source for the child at each level's cursor.
//! 2. If the branch has reached the depth limit, reports it.
//! 3. If a level's first lookup (cursor 0) yields nothing and the branch is
//!    not empty, the last node is a leaf: reports it.
//! 4. If a level is out of children, backtracks: drops the last node, moves
//!    the parent's cursor to the next sibling and forgets deeper cursors.
//! 5. Backtracking past the root means the traversal is exhausted.
//!
//! Each report also moves the relevant cursor past the reported node, so the
//! next step resumes with the next untried sibling. Branches come out in the
//! same order a plain recursive traversal would produce them, each exactly
//! once.
//!
//! Memory is bounded by depth: one node and one cursor per level.
//!
//! # Example
//!
//! ```
//! use lazy_dfs::engine::{child_fn, Collect, IterativeDfs};
//!
//! // Binary strings of length 3.
//! let source = child_fn(|_: &(), branch: &[u8], index| {
//!     (branch.len() < 3 && index < 2).then_some(index as u8)
//! });
//! let mut dfs = IterativeDfs::new((), source, Collect::new(), None);
//!
//! // Drive it one step at a time.
//! assert!(dfs.advance().unwrap());
//! assert_eq!(dfs.branch(), &[0, 0, 0]);
//!
//! dfs.run_to_completion().unwrap();
//! assert!(!dfs.advance().unwrap());
//! assert_eq!(dfs.into_result_sink().into_inner().len(), 8);
//! ```

pub mod contract;
pub mod errors;

pub use contract::{
    child_fn, children_fn, sink_fn, try_child_fn, try_sink_fn, ChildFn, ChildSource,
    ChildrenFn, ChildrenSource, Collect, NoopSink, ResultSink, SinkFn, TryChildFn, TrySinkFn,
};
pub use errors::{DfsError, StepError};

use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::state::{BranchState, Counters, Statistics};

/// Normalize a raw depth limit: anything `<= 0` means unlimited.
pub fn depth_limit(limit: i64) -> Option<usize> {
    if limit > 0 {
        usize::try_from(limit).ok()
    } else {
        None
    }
}

/// Error returned by [`IterativeDfs::advance`] for a given source and sink.
pub type StepFailure<C, T, S, R> =
    StepError<<S as ChildSource<C, T>>::Error, <R as ResultSink<C, T>>::Error>;

/// Step-by-step depth-first traversal.
///
/// `C` is the caller's context, threaded unchanged through every callback.
/// `T` is the node type produced by the child source `S`. Completed branches
/// go to the sink `R`.
///
/// Not synchronized: confine an engine to one owner at a time.
pub struct IterativeDfs<C, T, S, R> {
    context: C,
    child_source: S,
    result_sink: R,
    max_depth: Option<usize>,
    state: BranchState<T>,
    statistics: Statistics,
    exhausted: bool,
}

impl<C, T, S, R> IterativeDfs<C, T, S, R>
where
    S: ChildSource<C, T>,
    R: ResultSink<C, T>,
{
    /// Create an engine positioned before the first branch.
    ///
    /// `max_depth` of `None` or `Some(0)` means unlimited. With a limit `k`,
    /// every reported branch has exactly `k` nodes unless it ends in a leaf
    /// first, and nodes below depth `k` are never looked up.
    pub fn new(context: C, child_source: S, result_sink: R, max_depth: Option<usize>) -> Self {
        Self {
            context,
            child_source,
            result_sink,
            max_depth: max_depth.filter(|&limit| limit > 0),
            state: BranchState::new(),
            statistics: Statistics::new(),
            exhausted: false,
        }
    }

    /// Find the next branch and report it to the sink.
    ///
    /// Returns `Ok(true)` if a branch was reported, `Ok(false)` once the tree
    /// is exhausted. After exhaustion every call returns `Ok(false)` until
    /// [`reset`](Self::reset).
    ///
    /// A child source or sink error is returned as a [`StepError`]. The
    /// cursors are left where they were, so the next call repeats the failed
    /// lookup, or offers the branch that failed to be reported again.
    pub fn advance(&mut self) -> Result<bool, StepFailure<C, T, S, R>> {
        if self.exhausted {
            return Ok(false);
        }

        self.state.rewind();
        loop {
            let depth = self.state.depth();

            if self.max_depth.is_some_and(|limit| depth >= limit) {
                self.result_sink
                    .on_result(&self.context, self.state.items())
                    .map_err(StepError::Sink)?;
                self.state.mark_depth_limited();
                self.statistics.increment(Counters::DepthLimited);
                trace!(depth, "reported depth-limited branch");
                return Ok(true);
            }

            let cursor = self.state.cursor();
            self.statistics.increment(Counters::Lookups);
            let child = self
                .child_source
                .child_at(&self.context, self.state.items(), cursor)
                .map_err(StepError::Lookup)?;
            match child {
                Some(child) => self.state.descend(child),
                None if cursor == 0 && depth > 0 => {
                    self.result_sink
                        .on_result(&self.context, self.state.items())
                        .map_err(StepError::Sink)?;
                    self.state.mark_leaf();
                    self.statistics.increment(Counters::Leaves);
                    trace!(depth, "reported leaf");
                    return Ok(true);
                }
                None => {
                    if !self.state.backtrack() {
                        self.exhausted = true;
                        debug!(
                            results = self.statistics.results(),
                            lookups = self.statistics.get(Counters::Lookups),
                            "traversal exhausted"
                        );
                        return Ok(false);
                    }
                    self.statistics.increment(Counters::Backtracks);
                }
            }
        }
    }

    /// Call [`advance`](Self::advance) until the traversal is exhausted.
    ///
    /// Returns the number of branches reported by this call.
    pub fn run_to_completion(&mut self) -> Result<usize, StepFailure<C, T, S, R>> {
        let mut count = 0;
        while self.advance()? {
            count += 1;
        }
        Ok(count)
    }
}

impl<C, T, S, R> IterativeDfs<C, T, S, R> {
    /// Return to the state before the first branch. Callbacks, context and
    /// depth limit are kept.
    pub fn reset(&mut self) {
        self.state.reset();
        self.statistics.clear();
        self.exhausted = false;
        debug!("traversal reset");
    }

    /// Replace the context and reset.
    pub fn set_context(&mut self, context: C) {
        self.context = context;
        self.reset();
    }

    /// The branch most recently reported, valid until the next step.
    #[inline]
    pub fn branch(&self) -> &[T] {
        self.state.items()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    #[inline]
    pub fn context(&self) -> &C {
        &self.context
    }

    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn result_sink(&self) -> &R {
        &self.result_sink
    }

    pub fn result_sink_mut(&mut self) -> &mut R {
        &mut self.result_sink
    }

    pub fn into_result_sink(self) -> R {
        self.result_sink
    }
}

/// Builder for [`IterativeDfs`] that checks its configuration at runtime.
///
/// # Example
///
/// ```
/// use lazy_dfs::engine::{child_fn, DfsBuilder, NoopSink};
///
/// let mut dfs = DfsBuilder::new(3usize)
///     .child_source(child_fn(|ctx: &usize, _: &[usize], index| (index < *ctx).then_some(index)))
///     .result_sink(NoopSink)
///     .max_depth(2)
///     .build()
///     .unwrap();
/// assert_eq!(dfs.run_to_completion().unwrap(), 9);
/// ```
pub struct DfsBuilder<C, T, S, R> {
    context: C,
    child_source: Option<S>,
    result_sink: Option<R>,
    max_depth: Option<usize>,
    _node: PhantomData<fn() -> T>,
}

impl<C, T, S, R> DfsBuilder<C, T, S, R>
where
    S: ChildSource<C, T>,
    R: ResultSink<C, T>,
{
    pub fn new(context: C) -> Self {
        Self {
            context,
            child_source: None,
            result_sink: None,
            max_depth: None,
            _node: PhantomData,
        }
    }

    pub fn child_source(mut self, child_source: S) -> Self {
        self.child_source = Some(child_source);
        self
    }

    pub fn result_sink(mut self, result_sink: R) -> Self {
        self.result_sink = Some(result_sink);
        self
    }

    /// Depth limit; values `<= 0` mean unlimited.
    pub fn max_depth(mut self, limit: i64) -> Self {
        self.max_depth = depth_limit(limit);
        self
    }

    /// Finish the engine, failing if a callback was never supplied.
    pub fn build(self) -> Result<IterativeDfs<C, T, S, R>, DfsError> {
        let child_source = self.child_source.ok_or(DfsError::MissingChildSource)?;
        let result_sink = self.result_sink.ok_or(DfsError::MissingResultSink)?;
        Ok(IterativeDfs::new(
            self.context,
            child_source,
            result_sink,
            self.max_depth,
        ))
    }
}
