// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sample child sources.
//!
//! - `tree`: a literal tree of named nodes and a balanced tree generator
//! - `dictionary`: word list loading shared by the dictionary samples
//! - `t9`: predictive text over keypad letter combinations
//! - `rpg`: attribute name permutations spelling dictionary words

pub mod dictionary;
pub mod rpg;
pub mod t9;
pub mod tree;

pub use dictionary::load_dictionary;
pub use tree::{balanced_tree, branch_to_string, BranchNames, TreeChildren, TreeNode};
