/// Square matrix dimension used by the benchmark run.
pub const MATRIX_DIM: usize = 2000;

/// Number of timed multiply iterations.
pub const NUM_ITERATIONS: usize = 20;

/// Worker-pool size hint handed to the BLAS backend.
pub const NUM_THREADS: usize = 16;
