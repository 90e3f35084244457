//! Performance benchmarks for memo-kit
//!
//! This benchmark suite measures:
//! - MemoCache lookups (hit, miss, not-found, no producer)
//! - SharedMemoCache lookups under its lock
//! - Whitelist filtering across list sizes
//!
//! Run with: cargo bench
//! View results: open target/criterion/report/index.html

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use memo_kit::filter::{Criteria, WhiteList};
use memo_kit::{MemoCache, SharedMemoCache};
use std::hint::black_box;

// ============================================================================
// Group 1: MemoCache Lookups
// ============================================================================

fn memo_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo_cache");

    for size in [100usize, 1_000, 10_000].iter() {
        // Lookups of keys that are all cached
        group
            .throughput(Throughput::Elements(*size as u64))
            .bench_with_input(BenchmarkId::new("hit", size), size, |b, &size| {
                let mut cache = MemoCache::from_fn(|key: &u64| key.wrapping_mul(31));
                for key in 0..size as u64 {
                    cache.get(&key).expect("Failed to get");
                }

                b.iter(|| {
                    for key in 0..size as u64 {
                        black_box(cache.get(black_box(&key)).expect("Failed to get"));
                    }
                });
            });

        // Fresh cache per iteration, every lookup runs the producer
        group
            .throughput(Throughput::Elements(*size as u64))
            .bench_with_input(BenchmarkId::new("miss", size), size, |b, &size| {
                b.iter(|| {
                    let mut cache = MemoCache::from_fn(|key: &u64| key.wrapping_mul(31));
                    for key in 0..size as u64 {
                        black_box(cache.get(black_box(&key)).expect("Failed to get"));
                    }
                });
            });
    }

    group.bench_function("not_found", |b| {
        let mut cache: MemoCache<u64, u64> = MemoCache::new(|_key: &u64| Ok(None));

        b.iter(|| black_box(cache.lookup(black_box(&7)).expect("Failed to lookup")));
    });

    group.bench_function("no_producer", |b| {
        let mut cache: MemoCache<u64, u64> = MemoCache::without_producer();

        b.iter(|| black_box(cache.get(black_box(&7)).expect("Failed to get")));
    });

    group.bench_function("null_key", |b| {
        let mut cache = MemoCache::from_fn(|key: &Option<u64>| key.unwrap_or_default());

        b.iter(|| black_box(cache.get(black_box(&None)).is_err()));
    });

    group.finish();
}

// ============================================================================
// Group 2: SharedMemoCache Lookups
// ============================================================================

fn shared_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_memo_cache");

    group.bench_function("hit", |b| {
        let cache = SharedMemoCache::new(MemoCache::from_fn(|key: &String| key.len()));
        let key = "benchmark_key".to_string();
        cache.get(&key).expect("Failed to get");

        b.iter(|| black_box(cache.get(black_box(&key)).expect("Failed to get")));
    });

    group.bench_function("keys_snapshot", |b| {
        let cache = SharedMemoCache::new(MemoCache::from_fn(|key: &u32| *key));
        for key in 0..1_000u32 {
            cache.get(&key).expect("Failed to get");
        }

        b.iter(|| black_box(cache.keys()));
    });

    group.finish();
}

// ============================================================================
// Group 3: Whitelist Filtering
// ============================================================================

fn filter_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("whitelist");
    let candidates: Vec<u32> = (0..1_000).collect();

    for size in [0usize, 10, 100].iter() {
        group
            .throughput(Throughput::Elements(candidates.len() as u64))
            .bench_with_input(BenchmarkId::new("filter", size), size, |b, &size| {
                let list: WhiteList<u32> = (0..size as u32).map(|n| n * 7).collect();

                b.iter(|| black_box(list.filter(black_box(candidates.clone()))));
            });
    }

    group.finish();
}

criterion_group!(
    benches,
    memo_benchmarks,
    shared_benchmarks,
    filter_benchmarks
);
criterion_main!(benches);
