extern crate matbench;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matbench::data;
use matbench::math::{matmul, naive};

const BENCH_DIM: usize = 256;

fn criterion_benchmark(c: &mut Criterion) {
    let matrix_a = data::random_matrix(BENCH_DIM).expect("Failed to generate matrix");
    let matrix_b = data::random_matrix(BENCH_DIM).expect("Failed to generate matrix");

    c.bench_function("matmul_blas", |bencher| {
        bencher.iter(|| matmul(black_box(&matrix_a), black_box(&matrix_b)))
    });

    c.bench_function("matmul_naive", |bencher| {
        bencher.iter(|| naive::naive(black_box(&matrix_a), black_box(&matrix_b)))
    });

    c.bench_function("matmul_transposed", |bencher| {
        bencher.iter(|| naive::transposed(black_box(&matrix_a), black_box(&matrix_b)))
    });

    c.bench_function("matmul_parallel", |bencher| {
        bencher.iter(|| naive::parallel(black_box(&matrix_a), black_box(&matrix_b)))
    });
}

fn custom_criterion() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(2))
        .measurement_time(std::time::Duration::from_secs(5))
}

criterion_group! {
    name = benches;
    config = custom_criterion();
    targets = criterion_benchmark
}
criterion_main!(benches);
