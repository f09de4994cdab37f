// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast queue.
//!
//! Measures the performance of:
//! - Adding toasts below capacity
//! - Adding toasts with capacity eviction
//! - Removal by id

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use pitlane::notifications::{Notification, Options, Queue};
use std::hint::black_box;
use std::time::Duration;

fn keep() -> Options {
    Options::default().with_duration(Duration::ZERO)
}

/// Benchmark adding a burst of toasts, including the eviction path.
fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");

    group.bench_function("add_below_capacity", |b| {
        b.iter(|| {
            let mut queue = Queue::with_capacity(64);
            for i in 0..32 {
                queue.add(format!("toast {i}"), keep());
            }
            black_box(&queue);
        });
    });

    group.bench_function("add_with_eviction", |b| {
        b.iter(|| {
            let mut queue = Queue::new();
            for i in 0..32 {
                queue.add(format!("toast {i}"), keep());
            }
            black_box(&queue);
        });
    });

    group.finish();
}

/// Benchmark removal by id from a full queue.
fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");

    group.bench_function("remove_middle", |b| {
        b.iter_batched(
            || {
                let mut queue = Queue::new();
                for i in 0..3 {
                    queue.add(format!("toast {i}"), keep());
                }
                let target = queue.iter().nth(1).map(Notification::id).unwrap();
                (queue, target)
            },
            |(mut queue, target)| {
                queue.remove(black_box(target));
                black_box(&queue);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_add, bench_remove);
criterion_main!(benches);
