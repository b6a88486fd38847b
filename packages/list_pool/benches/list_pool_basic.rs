//! Basic benchmarks for the `list_pool` package.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use list_pool::ListPool;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

const ITEM_COUNT: u64 = 32;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("lp_scratch");

    group.bench_function("fresh_vec", |b| {
        b.iter(|| {
            let mut items = Vec::with_capacity(32);
            items.extend(0..ITEM_COUNT);
            black_box(&items);
        });
    });

    group.bench_function("pooled_lease", |b| {
        let pool = ListPool::<u64>::new();

        b.iter(|| {
            let mut items = pool.rent();
            items.extend(0..ITEM_COUNT);
            black_box(&items);
        });
    });

    group.bench_function("pooled_rent_with", |b| {
        let pool = ListPool::<u64>::new();

        b.iter(|| {
            pool.rent_with(0, |items| {
                items.extend(0..ITEM_COUNT);
                black_box(&items);
            });
        });
    });

    group.bench_function("oversized_return", |b| {
        let pool = ListPool::<u64>::with_capacities(8, 16).unwrap();

        b.iter(|| {
            let mut items = pool.rent();
            items.extend(0..ITEM_COUNT);
            black_box(&items);
        });
    });

    group.finish();
}
