// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use panzoom_geometry::{
    ElementArena, ElementId, cumulative_offset, cumulative_offset_iterative, is_descendant_of,
};

fn chain(depth: usize) -> (ElementArena, ElementId, ElementId) {
    let mut tree = ElementArena::new();
    let root = tree.push_root(Vec2::ZERO, Size::new(100.0, 100.0));
    let mut leaf = root;
    for i in 0..depth {
        leaf = tree.push_child(leaf, Vec2::new(i as f64 * 0.25, 1.0), Size::new(10.0, 10.0));
    }
    (tree, root, leaf)
}

fn bench_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("panzoom_offsets");

    for &depth in &[4_usize, 32, 256] {
        let (tree, root, leaf) = chain(depth);

        group.bench_function(format!("recursive(depth={depth})"), |b| {
            b.iter(|| black_box(cumulative_offset(&tree, black_box(Some(leaf)))));
        });
        group.bench_function(format!("iterative(depth={depth})"), |b| {
            b.iter(|| black_box(cumulative_offset_iterative(&tree, black_box(Some(leaf)))));
        });
        group.bench_function(format!("is_descendant_of(depth={depth})"), |b| {
            b.iter(|| black_box(is_descendant_of(&tree, black_box(Some(leaf)), root)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_offsets);
criterion_main!(benches);
