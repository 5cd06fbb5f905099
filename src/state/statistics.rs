// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are owned by each engine and incremented as it steps. They are
//! cleared by `reset()` together with the rest of the traversal state.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Calls made to the child source.
    Lookups,
    /// Times a level ran out of children and the engine stepped back up.
    Backtracks,
    /// Results reported because the last node had no children.
    Leaves,
    /// Results reported because the branch reached the depth limit.
    DepthLimited,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Total number of reported branches.
    pub fn results(&self) -> u64 {
        self.get(Counters::Leaves) + self.get(Counters::DepthLimited)
    }

    pub(crate) fn clear(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}
