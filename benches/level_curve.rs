//! Criterion benchmarks for level lookups.
//!
//! Run with: cargo bench --bench level_curve

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use levelup::progression::{calculate_level_data, LevelCurve};

fn bench_level_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_data");

    group.bench_function("zero_xp", |b| {
        b.iter(|| black_box(calculate_level_data(black_box(0.0))));
    });

    group.bench_function("ten_million_xp", |b| {
        b.iter(|| black_box(calculate_level_data(black_box(10_000_000.0))));
    });

    group.bench_function("max_xp", |b| {
        b.iter(|| black_box(calculate_level_data(black_box(f64::MAX))));
    });

    group.finish();
}

fn bench_thresholds(c: &mut Criterion) {
    let curve = LevelCurve::default();

    c.bench_function("threshold_level_50", |b| {
        b.iter(|| black_box(curve.threshold(black_box(50))));
    });
}

criterion_group!(benches, bench_level_data, bench_thresholds);
criterion_main!(benches);
