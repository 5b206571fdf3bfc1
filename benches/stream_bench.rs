//! Benchmark for lazy Stream pipelines.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use stackless::persistent::Stream;
use std::hint::black_box;

fn benchmark_take_to_list(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("take_to_list");

    for size in [100_usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("counting_from", size), &size, |bencher, &size| {
            bencher.iter(|| Stream::counting_from(0).take(black_box(size)).to_list());
        });

        group.bench_with_input(BenchmarkId::new("map_filter", size), &size, |bencher, &size| {
            bencher.iter(|| {
                Stream::counting_from(0)
                    .map(|n| n * 3)
                    .filter(|n| n % 2 == 0)
                    .take(black_box(size))
                    .to_list()
            });
        });
    }

    group.finish();
}

fn benchmark_drop(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("drop");

    for size in [1_000_usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("counting_from", size), &size, |bencher, &size| {
            bencher.iter(|| Stream::counting_from(0).drop(black_box(size)).head_option());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_take_to_list, benchmark_drop);
criterion_main!(benches);
