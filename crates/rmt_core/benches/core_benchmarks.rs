//! Criterion benchmarks for rmt_core spectrum utilities.
//!
//! Measures density evaluation, histogramming and the bulk fit across
//! different sample sizes to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rmt_core::distributions::{normal, wigner};
use rmt_core::spectrum::{get_bulk_edge_values, SemicircleFit};
use rmt_core::stats::Histogram;

/// Deterministic sample spread over [-2.5, 2.5].
fn generate_sample(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| ((i as f64 * 0.618_033_988_75).fract() * 5.0 - 2.5) as f32)
        .collect()
}

/// Benchmark elementwise density evaluation.
fn bench_densities(c: &mut Criterion) {
    let mut group = c.benchmark_group("densities");

    for size in [100, 1000, 10000] {
        let grid: Vec<f64> = (0..size)
            .map(|i| -2.0 + 4.0 * i as f64 / (size - 1) as f64)
            .collect();

        group.bench_with_input(BenchmarkId::new("wigner", size), &grid, |b, grid| {
            b.iter(|| wigner(black_box(grid)));
        });
        group.bench_with_input(BenchmarkId::new("normal", size), &grid, |b, grid| {
            b.iter(|| normal(black_box(grid), 1.0));
        });
    }

    group.finish();
}

/// Benchmark histogram construction, partition and fit.
fn bench_histogram_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram_fit");

    for size in [1_000, 10_000, 100_000] {
        let sample = generate_sample(size);

        group.bench_with_input(BenchmarkId::new("histogram", size), &sample, |b, s| {
            b.iter(|| Histogram::new(black_box(s), 50, Some((-2.5, 2.5)), true).unwrap());
        });

        let hist = Histogram::new(&sample, 50, Some((-2.5, 2.5)), true).unwrap();
        group.bench_with_input(BenchmarkId::new("partition", size), &hist, |b, h| {
            b.iter(|| get_bulk_edge_values(black_box(h.counts()), black_box(h.edges())).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("fit", size), &hist, |b, h| {
            b.iter(|| SemicircleFit::from_histogram(black_box(h)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_densities, bench_histogram_fit);
criterion_main!(benches);
