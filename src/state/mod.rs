// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable traversal state, owned and mutated only by the engine.
//!
//! - [`BranchState`]: current branch and per-depth resume cursors
//! - [`Statistics`]: step counters

pub mod branch;
pub mod statistics;

pub use branch::BranchState;
pub use statistics::{Counters, Statistics};
