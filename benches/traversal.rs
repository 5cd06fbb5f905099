// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use lazy_dfs::engine::{Collect, IterativeDfs};
use lazy_dfs::samples::{balanced_tree, TreeChildren, TreeNode};
use lazy_dfs::views::{EnumerableDfs, RecursiveDfs, StackedDfs};

const SHAPES: &[(usize, usize)] = &[(2, 12), (3, 8), (10, 4)];

fn iterative(tree: &TreeNode) -> usize {
    let mut dfs = IterativeDfs::new(Some(tree), TreeChildren, Collect::new(), None);
    match dfs.run_to_completion() {
        Ok(found) => found,
        Err(err) => match err.into_infallible() {},
    }
}

fn recursive(tree: &TreeNode) -> usize {
    let mut dfs = RecursiveDfs::new(Some(tree), TreeChildren, Collect::new(), None);
    match dfs.run() {
        Ok(()) => {}
        Err(never) => match never {},
    }
    dfs.into_result_sink().into_inner().len()
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for &(children, depth) in SHAPES {
        let tree = balanced_tree(children, depth);
        let shape = format!("{children}x{depth}");

        group.bench_with_input(BenchmarkId::new("iterative", &shape), &tree, |b, tree| {
            b.iter(|| black_box(iterative(tree)))
        });
        group.bench_with_input(BenchmarkId::new("enumerable", &shape), &tree, |b, tree| {
            b.iter(|| black_box(EnumerableDfs::new(Some(tree), TreeChildren, None).count()))
        });
        group.bench_with_input(BenchmarkId::new("recursive", &shape), &tree, |b, tree| {
            b.iter(|| black_box(recursive(tree)))
        });
        group.bench_with_input(BenchmarkId::new("stacked", &shape), &tree, |b, tree| {
            b.iter(|| black_box(StackedDfs::new(Some(tree), TreeChildren, None).count()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
