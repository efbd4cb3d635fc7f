// Linking the BLAS backend requires blas-src to be referenced from the
// crate root, even though no item of it is used directly.
#[cfg(feature = "blas")]
extern crate blas_src;

pub mod bench;
pub mod config;
pub mod constants;
pub mod data;
pub mod errors;
pub mod math;
