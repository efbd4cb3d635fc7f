use std::hint::black_box;
use std::time::Instant;

/// Samples collected by a timer loop, milliseconds per iteration.
pub struct BenchStats {
    pub samples_ms: Vec<f64>,
    pub best_ms: f64,
}

/// Runs `op` exactly `iterations` times, printing each elapsed time as
/// `Time (<label>): <ms>ms` and folding it into the running minimum.
pub fn run<F, R>(label: &str, iterations: usize, mut op: F) -> BenchStats
where
    F: FnMut() -> R,
{
    let mut samples_ms = Vec::with_capacity(iterations);
    let mut best_ms = f64::INFINITY;
    for _ in 0..iterations {
        let start = Instant::now();
        black_box(op());
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        println!("Time ({}): {}ms", label, elapsed_ms);
        if elapsed_ms < best_ms {
            best_ms = elapsed_ms;
        }
        samples_ms.push(elapsed_ms);
    }
    BenchStats {
        samples_ms,
        best_ms,
    }
}

/// Prints the closing summary line for a finished run.
pub fn report(stats: &BenchStats) {
    println!();
    println!("Best time: {}ms", stats.best_ms);
}
