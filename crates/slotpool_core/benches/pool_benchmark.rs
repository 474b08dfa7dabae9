//! # Slot Pool Benchmark
//!
//! Run with: `cargo bench --package slotpool_core`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slotpool_core::{PoolConfig, SlotPool};

const POOL_SIZE: usize = 100_000;

fn tracked(capacity: usize) -> SlotPool<[f32; 4]> {
    SlotPool::with_config(PoolConfig::new(capacity).with_free_cursor().with_high_water())
        .unwrap()
}

/// Benchmark: fill an empty pool with `alloc`.
fn bench_sequential_alloc(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_alloc");

    for count in [1_000, 10_000, POOL_SIZE] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut pool = tracked(count);
                for _ in 0..count {
                    black_box(pool.alloc().unwrap());
                }
                pool.occupied_count()
            });
        });
    }

    group.finish();
}

/// Benchmark: free a low slot and take it back, on a nearly full pool.
fn bench_churn(c: &mut Criterion) {
    let mut pool = tracked(POOL_SIZE);
    while pool.alloc().is_ok() {}

    let mut i = 0usize;
    c.bench_function("churn_free_low_realloc", |b| {
        b.iter(|| {
            pool.free_at(i % POOL_SIZE);
            black_box(pool.alloc().unwrap());
            i = i.wrapping_add(7919);
        });
    });
}

/// Benchmark: explicit placement without tracking features.
fn bench_alloc_at(c: &mut Criterion) {
    let mut pool: SlotPool<[f32; 4]> = SlotPool::new(POOL_SIZE);

    c.bench_function("alloc_at_free_at_100k", |b| {
        b.iter(|| {
            for i in 0..POOL_SIZE {
                black_box(pool.alloc_at(i, false).unwrap());
            }
            for i in 0..POOL_SIZE {
                pool.free_at(i);
            }
        });
    });
}

criterion_group!(benches, bench_sequential_alloc, bench_churn, bench_alloc_at);
criterion_main!(benches);
