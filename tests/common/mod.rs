// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use lazy_dfs::samples::{BranchNames, TreeChildren, TreeNode};
use lazy_dfs::{EnumerableDfs, IterativeDfs, RecursiveDfs, StackedDfs};

//      A
//    / | \
//   B  C  D
//  / \     \
// E   F     G
//            \
//             H
pub fn sample_tree() -> TreeNode {
    TreeNode::new(
        "A",
        vec![
            TreeNode::new("B", vec![TreeNode::leaf("E"), TreeNode::leaf("F")]),
            TreeNode::leaf("C"),
            TreeNode::new(
                "D",
                vec![TreeNode::new("G", vec![TreeNode::leaf("H")])],
            ),
        ],
    )
}

pub const PATHS: [&str; 4] = ["ABE", "ABF", "AC", "ADGH"];
pub const PATHS_DEPTH_2: [&str; 3] = ["AB", "AC", "AD"];

pub fn iterative_names(root: Option<&TreeNode>, max_depth: Option<usize>) -> Vec<String> {
    let mut dfs = IterativeDfs::new(root, TreeChildren, BranchNames::default(), max_depth);
    dfs.run_to_completion().unwrap();
    dfs.into_result_sink().names
}

pub fn recursive_names(root: Option<&TreeNode>, max_depth: Option<usize>) -> Vec<String> {
    let mut dfs = RecursiveDfs::new(root, TreeChildren, BranchNames::default(), max_depth);
    dfs.run().unwrap();
    dfs.into_result_sink().names
}

pub fn enumerable_names(root: Option<&TreeNode>, max_depth: Option<usize>) -> Vec<String> {
    EnumerableDfs::new(root, TreeChildren, max_depth)
        .map(|branch| lazy_dfs::samples::branch_to_string(&branch))
        .collect()
}

pub fn stacked_names(root: Option<&TreeNode>, max_depth: Option<usize>) -> Vec<String> {
    StackedDfs::new(root, TreeChildren, max_depth)
        .map(|branch| lazy_dfs::samples::branch_to_string(&branch))
        .collect()
}

/// Deterministic tree of uneven shape: between 0 and `max_children`
/// children per node, at most `height` levels. Names are single letters so
/// branch strings stay readable in assertion failures.
pub fn irregular_tree(seed: u64, max_children: u64, height: usize) -> TreeNode {
    let mut state = seed.max(1);
    let mut next = move || {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let mut counter = 0u32;
    build(&mut next, &mut counter, max_children, height)
}

fn build(
    next: &mut impl FnMut() -> u64,
    counter: &mut u32,
    max_children: u64,
    height: usize,
) -> TreeNode {
    let name = char::from_u32('a' as u32 + *counter % 26).unwrap_or('?');
    *counter += 1;
    let count = if height <= 1 {
        0
    } else {
        next() % (max_children + 1)
    };
    let children = (0..count)
        .map(|_| build(next, counter, max_children, height - 1))
        .collect();
    TreeNode::new(name.to_string(), children)
}
