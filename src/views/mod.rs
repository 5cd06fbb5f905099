// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Derived views over the traversal.
//!
//! - [`EnumerableDfs`]: lazy sequence driven by the resumable engine
//! - [`StackedDfs`]: lazy sequence over a stack of child iterators
//! - [`RecursiveDfs`]: one-shot recursive reference traversal
//!
//! The "run everything" view is
//! [`IterativeDfs::run_to_completion`](crate::engine::IterativeDfs::run_to_completion).
//! All views report the same branches in the same order.

pub mod enumerable;
pub mod recursive;
pub mod stacked;

pub use enumerable::EnumerableDfs;
pub use recursive::RecursiveDfs;
pub use stacked::StackedDfs;
