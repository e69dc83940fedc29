//! Criterion benchmarks for GOE eigenvalue sampling.
//!
//! Cost per draw is dominated by the O(N³) symmetric eigendecomposition,
//! so the matrix size is the main axis.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rmt_sampling::{rm_sampling, sample_matrix, SpectrumRng};

/// Benchmark single matrix generation and symmetrisation.
fn bench_sample_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_matrix");

    for n in [16, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = SpectrumRng::from_seed(42);
            b.iter(|| sample_matrix(black_box(n), &mut rng).unwrap());
        });
    }

    group.finish();
}

/// Benchmark full sampling runs (draw + eigendecomposition + collection).
fn bench_rm_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("rm_sampling");
    group.sample_size(20);

    for n in [16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("n_samples_10", n), &n, |b, &n| {
            let mut rng = SpectrumRng::from_seed(42);
            b.iter(|| rm_sampling(10, black_box(n), &mut rng).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sample_matrix, bench_rm_sampling);
criterion_main!(benches);
