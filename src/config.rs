use log::info;

// OpenMP builds of OpenBLAS read the first variable, pthreads builds the
// second; OPENBLAS_NUM_THREADS wins when both are set.
const THREAD_ENV_VARS: [&str; 2] = ["OMP_NUM_THREADS", "OPENBLAS_NUM_THREADS"];

/// Sets the BLAS worker-pool size. OpenBLAS sizes its pool once, at first
/// use, so this must run before any other call touches the backend.
pub fn apply_thread_hint(threads: usize) {
    for name in THREAD_ENV_VARS {
        std::env::set_var(name, threads.to_string());
    }
    info!("BLAS thread hint set to {}", threads);
}
