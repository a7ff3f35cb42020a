#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Module to compute the full SVD of a 3x3 matrix.
pub mod svd;
