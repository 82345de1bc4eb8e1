#![deny(missing_docs)]
//! Image types for landmark-driven warping

/// image representation for the warping kernels.
pub mod image;

/// Error types for the image module.
pub mod error;

/// points and vectors in pixel coordinates.
pub mod point;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize, PixelBuffer};
pub use crate::point::Point;
