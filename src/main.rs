use env_logger::Builder;
use log::info;
use log::LevelFilter;
use matbench::bench;
use matbench::config;
use matbench::constants::{MATRIX_DIM, NUM_ITERATIONS, NUM_THREADS};
use matbench::data;
use matbench::math;
use std::io::Write;

fn main() {
    let mut builder = Builder::new();
    builder
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .filter(None, LevelFilter::Info)
        .init();

    // Must land before the first BLAS call; the backend reads it only once.
    config::apply_thread_hint(NUM_THREADS);

    #[cfg(feature = "blas")]
    info!("matmul backend: OpenBLAS dgemm");
    #[cfg(not(feature = "blas"))]
    info!("matmul backend: matrixmultiply (pure Rust)");

    info!("Generating two {}x{} random matrices", MATRIX_DIM, MATRIX_DIM);
    let data1 = data::random_matrix(MATRIX_DIM).expect("Failed to generate matrix");
    let data2 = data::random_matrix(MATRIX_DIM).expect("Failed to generate matrix");

    let stats = bench::run("dot", NUM_ITERATIONS, || math::matmul(&data1, &data2));

    bench::report(&stats);
}
