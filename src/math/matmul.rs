use ndarray::Array2;

/// Dense multiply of two equal-dimension matrices through `Array2::dot`.
/// With the `blas` feature this lowers to an OpenBLAS `dgemm` call;
/// without it ndarray falls back to its pure-Rust matrixmultiply path.
pub fn matmul(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
    a.dot(b)
}
