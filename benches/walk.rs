// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use stemma::query::{ancestors, preorder_ancestors};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `walk.bfs`, `walk.preorder`
// - Case IDs (`abc_stubs`, `deep_diamonds`, `wide_diamonds`) must remain
//   stable across refactors so results stay comparable over time.
fn benches_walk(c: &mut Criterion) {
    let cases = [
        ("abc_stubs", {
            let hierarchy = fixtures::abc_stubs();
            let root = stemma::model::TypeName::new("MutableSequence").expect("root");
            (hierarchy, root)
        }),
        (
            "deep_diamonds",
            fixtures::dag(fixtures::DagParams::new(64, 4, 2)),
        ),
        (
            "wide_diamonds",
            fixtures::dag(fixtures::DagParams::new(8, 64, 3)),
        ),
    ];

    {
        let mut group = c.benchmark_group("walk.bfs");

        for (case_id, (hierarchy, root)) in &cases {
            group.throughput(Throughput::Elements(hierarchy.len() as u64));
            group.bench_function(*case_id, |b| {
                b.iter(|| {
                    let count = ancestors(black_box(hierarchy), black_box(root)).count();
                    black_box(count)
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("walk.preorder");

        for (case_id, (hierarchy, root)) in &cases {
            let starts = [root.clone()];
            group.throughput(Throughput::Elements(hierarchy.len() as u64));
            group.bench_function(*case_id, |b| {
                b.iter(|| {
                    let traversal = preorder_ancestors(black_box(hierarchy), black_box(&starts));
                    black_box(traversal.nodes.len().wrapping_add(traversal.edges.len()))
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_walk
}
criterion_main!(benches);
