use facewarp_image::{Image, Point};

use super::{is_interior, validate_params, validate_point};
use crate::error::WarpError;
use crate::interpolation::bilinear_interpolation;
use crate::parallel;

/// Factor applied to the strength of a radial warp.
pub const RADIAL_STRENGTH_DAMPING: f32 = 0.3;

/// Lower bound of the radial scale, keeps the source from collapsing onto the center.
pub const MIN_RADIAL_SCALE: f32 = 0.1;

/// Direction of a radial warp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialMode {
    /// Sample closer to the center: magnifies the content around it.
    Expand,
    /// Sample farther from the center: shrinks the content around it.
    Shrink,
}

impl RadialMode {
    /// Scale of the offset from the center for a pixel at `ratio = dist / radius`.
    fn scale(self, factor: f32, ratio: f32) -> f32 {
        let scale = match self {
            RadialMode::Expand => 1.0 - factor * (1.0 - ratio),
            RadialMode::Shrink => 1.0 + factor * (1.0 - ratio),
        };
        scale.max(MIN_RADIAL_SCALE)
    }
}

/// Scales the area around a center in or out.
///
/// For each output pixel with `0 < d < influence_radius` the source coordinate
/// is `center + (pixel - center) * scale`, where the scale moves away from one
/// by `strength * RADIAL_STRENGTH_DAMPING * (1 - d / influence_radius)`. The
/// pixel exactly at the center is copied.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `center` - The center of the influence area.
/// * `influence_radius` - Distance beyond which pixels are copied unchanged.
/// * `strength` - Scale of the effect, within `[0, MAX_STRENGTH]`.
/// * `mode` - Whether to expand or shrink.
///
/// # Returns
///
/// A new image with the same size as `src`.
///
/// # Errors
///
/// If the radius or the strength is out of range, or the center is not finite.
pub fn warp_radial<const C: usize>(
    src: &Image<u8, C>,
    center: Point,
    influence_radius: f32,
    strength: f32,
    mode: RadialMode,
) -> Result<Image<u8, C>, WarpError> {
    validate_params(influence_radius, strength)?;
    validate_point("center", center)?;

    log::trace!(
        "radial warp: center=({}, {}) radius={} strength={} mode={:?}",
        center.x,
        center.y,
        influence_radius,
        strength,
        mode
    );

    let factor = strength * RADIAL_STRENGTH_DAMPING;
    let (cols, rows) = (src.cols(), src.rows());
    let mut dst = src.clone();

    parallel::par_iter_rows_indexed(&mut dst, |x, y, dst_pixel| {
        let pixel = Point::new(x as f32, y as f32);
        let dist = pixel.distance(&center);
        if dist <= 0.0 || dist >= influence_radius {
            return;
        }

        let scale = mode.scale(factor, dist / influence_radius);
        let source = center + (pixel - center) * scale;
        if is_interior(source.x, source.y, cols, rows) {
            dst_pixel.copy_from_slice(&bilinear_interpolation(src, source.x, source.y));
        }
    });

    Ok(dst)
}
