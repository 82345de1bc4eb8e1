//! Pixel interpolation for inverse-mapped warps.
//!
//! The warps compute, for every output pixel, a continuous source coordinate
//! and resample the input there with [`bilinear_interpolation`].

mod bilinear;

pub use bilinear::{bilinear_interpolation, sample_pixel};
