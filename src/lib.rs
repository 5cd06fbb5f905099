// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Resumable depth-first traversal of implicit trees.
//!
//! The tree is never materialized. A caller-supplied child lookup answers
//! "what is child `i` of this branch?" on demand, which lets the same engine
//! walk a literal tree, a combinatorial space of permutations, or the letter
//! combinations of a keypad.
//!
//! # Architecture
//!
//! - [`engine`]: [`IterativeDfs`], driven one branch per
//!   [`advance`](IterativeDfs::advance) call, plus the child-source and
//!   result-sink contracts.
//! - [`state`]: the explicit branch / resume-cursor state that replaces a
//!   recursive call stack, and step counters.
//! - [`views`]: lazy-sequence and one-shot views that preserve the engine's
//!   ordering, including the recursive reference traversal.
//! - [`samples`]: sample child sources.
//!
//! # Ordering
//!
//! Every view reports branches in the order a recursive pre-order traversal
//! reaches them: children in increasing index order, a branch reported when
//! its last node has no children or when it reaches the depth limit.
//!
//! # Resources
//!
//! The resumable engine holds one node and one cursor per level, so memory
//! is bounded by depth, not by breadth or node count. Cancellation is the
//! caller's business, checked between steps.

pub mod engine;
pub mod samples;
pub mod state;
pub mod views;

// Re-export commonly used types
pub use engine::{
    ChildSource, ChildrenSource, DfsBuilder, DfsError, IterativeDfs, ResultSink, StepError,
};
pub use state::{Counters, Statistics};
pub use views::{EnumerableDfs, RecursiveDfs, StackedDfs};
