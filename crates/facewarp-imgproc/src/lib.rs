#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// error types for the warping kernels.
pub mod error;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// anchor-driven geometric warps.
pub mod warp;

pub use error::WarpError;
