#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod aligner;
pub use aligner::*;

mod ops;

// Re-export the decomposition capability for custom backends.
pub use align3d_linalg::svd::{FaerSvd3, Svd3, SvdFactors};
