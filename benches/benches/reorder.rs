// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use trellis_reorder::ReorderList;

fn bench_staircase_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/staircase_drag");

    // Hypothesis: dragging an item across the whole list is linear in the
    // number of adjacent transpositions, whether the travel arrives as one
    // coalesced update or as one update per extent.
    for len in [16usize, 256, 4_096] {
        let model: Vec<u32> = (0..(len as u32)).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("one_update", len), &model, |b, model| {
            b.iter_batched(
                || ReorderList::new(model.clone()),
                |mut list| {
                    list.begin_drag(0, 0.0, 10.0);
                    list.update_drag(10.0 * (len as f64));
                    list.end_drag();
                    black_box(list);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("one_update_per_extent", len),
            &model,
            |b, model| {
                b.iter_batched(
                    || ReorderList::new(model.clone()),
                    |mut list| {
                        list.begin_drag(0, 0.0, 10.0);
                        for step in 1..len {
                            list.update_drag(10.0 * (step as f64));
                        }
                        list.end_drag();
                        black_box(list);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_sub_extent_flood(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/sub_extent_flood");

    // A pointer resting inside one extent still fires move callbacks at
    // display rate; those must stay no-ops.
    let model: Vec<u32> = (0..1_024).collect();
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("10k_noop_updates", |b| {
        b.iter_batched(
            || {
                let mut list = ReorderList::new(model.clone());
                list.begin_drag(512, 0.0, 20.0);
                list
            },
            |mut list| {
                for i in 0..10_000u32 {
                    list.update_drag(f64::from(i % 20));
                }
                black_box(list);
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_staircase_drag, bench_sub_extent_flood);
criterion_main!(benches);
