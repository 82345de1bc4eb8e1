//! Anchor-driven geometric warps.
//!
//! Every warp is an inverse mapping: for each output pixel it computes the
//! source coordinate to sample from. Pixels farther than the influence radius
//! from the anchor, and pixels whose source falls outside the image interior,
//! are copied unchanged. The input image is never modified; a new image of
//! the same size is returned.
//!
//! - [`warp_directional`], [`warp_pull`], [`warp_push`]: displacement along a drag vector
//! - [`warp_radial`]: expand or shrink around a center
//! - [`apply_warp`]: dispatch on a [`WarpMode`]
//!
//! # Examples
//!
//! Pulling the area around `(8, 8)` two pixels to the right:
//!
//! ```
//! use facewarp_image::{Image, Point};
//! use facewarp_imgproc::warp::warp_pull;
//!
//! let src = Image::<u8, 4>::from_size_fn([16, 16].into(), |x, _| [x as u8 * 16, 0, 0, 255]);
//! let dst = warp_pull(&src, Point::new(8.0, 8.0), Point::new(10.0, 8.0), 6.0, 1.0).unwrap();
//!
//! assert_eq!(dst.size(), src.size());
//! ```

mod directional;
mod mode;
mod operation;
mod radial;

pub use directional::{warp_directional, warp_pull, warp_push};
pub use mode::{apply_warp, WarpMode};
pub use operation::{WarpKind, WarpOperation};
pub use radial::{warp_radial, RadialMode, MIN_RADIAL_SCALE, RADIAL_STRENGTH_DAMPING};

use facewarp_image::Point;

use crate::error::WarpError;

/// Largest accepted warp strength.
pub const MAX_STRENGTH: f32 = 3.0;

/// Check the parameters shared by every warp.
pub(crate) fn validate_params(influence_radius: f32, strength: f32) -> Result<(), WarpError> {
    if !influence_radius.is_finite() || influence_radius <= 0.0 {
        return Err(WarpError::InvalidRadius(influence_radius));
    }

    if !strength.is_finite() || !(0.0..=MAX_STRENGTH).contains(&strength) {
        return Err(WarpError::InvalidStrength(strength));
    }

    Ok(())
}

pub(crate) fn validate_point(name: &'static str, p: Point) -> Result<(), WarpError> {
    if !p.is_finite() {
        return Err(WarpError::InvalidCoordinate(name, p.x, p.y));
    }
    Ok(())
}

/// Whether a source coordinate can be sampled by a warp.
///
/// Warps only sample strictly inside `[0, cols - 1) x [0, rows - 1)`.
#[inline]
pub(crate) fn is_interior(x: f32, y: f32, cols: usize, rows: usize) -> bool {
    x >= 0.0 && y >= 0.0 && x < (cols as f32 - 1.0) && y < (rows as f32 - 1.0)
}
