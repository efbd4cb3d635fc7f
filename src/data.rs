use crate::errors::BenchError;
use ndarray::Array2;
use rand::Rng;
use rayon::prelude::*;

/// Produces an n×n matrix of values uniformly distributed in [0, 1),
/// filled in parallel with one RNG per worker thread.
pub fn random_matrix(n: usize) -> Result<Array2<f64>, BenchError> {
    let values: Vec<f64> = (0..n * n)
        .into_par_iter()
        .map_init(rand::thread_rng, |rng, _| rng.gen::<f64>())
        .collect();
    Array2::from_shape_vec((n, n), values)
        .map_err(|e| BenchError::new(&format!("Failed to shape {}x{} matrix: {}", n, n, e)))
}
