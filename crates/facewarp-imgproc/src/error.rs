use facewarp_image::ImageError;

use crate::warp::MAX_STRENGTH;

/// Errors returned by the warping kernels.
///
/// These are structural: they reject the whole call. A source coordinate
/// falling outside the image is not an error, the pixel is copied instead.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WarpError {
    /// The influence radius is not a finite positive number.
    #[error("influence radius must be finite and > 0, got {0}")]
    InvalidRadius(f32),

    /// The strength is outside the accepted range.
    #[error("strength must be within [0, {max}], got {0}", max = MAX_STRENGTH)]
    InvalidStrength(f32),

    /// An anchor or displacement has a non-finite coordinate.
    #[error("{0} must have finite coordinates, got ({1}, {2})")]
    InvalidCoordinate(&'static str, f32, f32),

    /// The warp mode name is not one of `pull`, `push`, `expand` or `shrink`.
    #[error("unknown warp mode: {0:?}")]
    UnknownMode(String),

    /// Error from the image container.
    #[error(transparent)]
    Image(#[from] ImageError),
}
