use ndarray::Array2;
use rayon::prelude::*;

/// Textbook triple-loop multiply.
pub fn naive(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
    let m = a.nrows();
    let n = b.ncols();
    let depth = a.ncols();
    let mut result = Array2::<f64>::zeros((m, n));
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0_f64;
            for k in 0..depth {
                sum += a[[i, k]] * b[[k, j]];
            }
            result[[i, j]] = sum;
        }
    }
    result
}

/// Triple loop with `b` transposed first, so the inner product walks two
/// contiguous rows.
pub fn transposed(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
    let bt = b.t().to_owned();
    let m = a.nrows();
    let n = b.ncols();
    let mut result = Array2::<f64>::zeros((m, n));
    for i in 0..m {
        let lhs = a.row(i);
        for j in 0..n {
            let sum: f64 = lhs.iter().zip(bt.row(j).iter()).map(|(x, y)| x * y).sum();
            result[[i, j]] = sum;
        }
    }
    result
}

/// The transposed kernel with output cells computed in parallel.
pub fn parallel(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
    let bt = b.t().to_owned();
    let m = a.nrows();
    let n = b.ncols();
    let values: Vec<f64> = (0..m * n)
        .into_par_iter()
        .map(|cell| {
            let (i, j) = (cell / n, cell % n);
            a.row(i).iter().zip(bt.row(j).iter()).map(|(x, y)| x * y).sum()
        })
        .collect();
    Array2::from_shape_vec((m, n), values).expect("Failed to assemble result matrix")
}
