// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The derived views must agree with the recursive reference traversal on
//! every tree and every depth limit, leaves shorter than the limit included.

mod common;

use pretty_assertions::assert_eq;

use common::{
    enumerable_names, irregular_tree, iterative_names, recursive_names, sample_tree,
    stacked_names, PATHS, PATHS_DEPTH_2,
};
use lazy_dfs::samples::{balanced_tree, TreeChildren, TreeNode};
use lazy_dfs::{EnumerableDfs, StackedDfs};

fn assert_views_agree(tree: Option<&TreeNode>, max_depth: Option<usize>) {
    let expected = recursive_names(tree, max_depth);
    assert_eq!(iterative_names(tree, max_depth), expected, "iterative, limit {max_depth:?}");
    assert_eq!(enumerable_names(tree, max_depth), expected, "enumerable, limit {max_depth:?}");
    assert_eq!(stacked_names(tree, max_depth), expected, "stacked, limit {max_depth:?}");
}

#[test]
fn test_recursive_reference_on_sample_tree() {
    let tree = sample_tree();
    assert_eq!(recursive_names(Some(&tree), None), PATHS);
    assert_eq!(recursive_names(Some(&tree), Some(2)), PATHS_DEPTH_2);
    assert!(recursive_names(None, None).is_empty());
}

#[test]
fn test_lazy_views_on_sample_tree() {
    let tree = sample_tree();
    assert_eq!(enumerable_names(Some(&tree), None), PATHS);
    assert_eq!(stacked_names(Some(&tree), None), PATHS);
    assert_eq!(enumerable_names(Some(&tree), Some(2)), PATHS_DEPTH_2);
    assert_eq!(stacked_names(Some(&tree), Some(2)), PATHS_DEPTH_2);
    assert!(enumerable_names(None, None).is_empty());
    assert!(stacked_names(None, None).is_empty());
}

#[test]
fn test_all_views_agree_on_sample_tree_for_every_limit() {
    let tree = sample_tree();
    assert_views_agree(Some(&tree), None);
    for limit in 1..=6 {
        assert_views_agree(Some(&tree), Some(limit));
    }
}

#[test]
fn test_all_views_agree_on_irregular_trees() {
    for seed in 1..=40 {
        let tree = irregular_tree(seed, 3, 6);
        assert_views_agree(Some(&tree), None);
        for limit in 1..=7 {
            assert_views_agree(Some(&tree), Some(limit));
        }
    }
}

#[test]
fn test_balanced_tree_leaf_count() {
    let tree = balanced_tree(3, 6);
    let names = iterative_names(Some(&tree), None);
    assert_eq!(names.len(), 3usize.pow(5));
    // root "0", then "01", "011", ... down the leftmost path
    let leftmost: String = (0..6).map(|depth| format!("0{}", "1".repeat(depth))).collect();
    assert_eq!(names.first(), Some(&leftmost));
    assert_eq!(names, recursive_names(Some(&tree), None));
}

#[test]
fn test_enumerable_lends_without_copy_and_restarts() {
    let tree = sample_tree();
    let mut view = EnumerableDfs::new(Some(&tree), TreeChildren, None);
    let first: Vec<String> = view
        .next_branch()
        .map(|branch| branch.iter().map(|n| n.name.clone()).collect())
        .unwrap_or_default();
    assert_eq!(first, ["A", "B", "E"]);

    assert_eq!(view.by_ref().count(), 3);
    assert!(view.next_branch().is_none());

    view.reset();
    assert_eq!(view.count(), 4);
}

#[test]
fn test_enumerable_steps_match_engine_steps() {
    let tree = balanced_tree(2, 4);
    let mut view = EnumerableDfs::new(Some(&tree), TreeChildren, None);
    let mut produced = 0;
    while view.next_branch().is_some() {
        produced += 1;
        assert_eq!(view.engine().statistics().results(), produced);
    }
}

#[test]
fn test_stacked_reset() {
    let tree = sample_tree();
    let mut view = StackedDfs::new(Some(&tree), TreeChildren, Some(2));
    assert_eq!(view.by_ref().count(), 3);
    assert!(view.next().is_none());
    view.reset();
    assert_eq!(view.next_branch().map(|b| b.len()), Some(2));
}
