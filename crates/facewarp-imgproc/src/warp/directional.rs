use facewarp_image::{Image, Point};

use super::{is_interior, validate_params, validate_point};
use crate::error::WarpError;
use crate::interpolation::bilinear_interpolation;
use crate::parallel;

/// Displaces the pixels around an anchor along a drag vector.
///
/// For each output pixel at distance `d < influence_radius` from the anchor the
/// source coordinate is `pixel - drag * w` with the quadratic falloff
/// `w = (1 - d / influence_radius)^2 * strength`, so the displacement is
/// maximal at the anchor and vanishes at the boundary of the radius.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `anchor` - The center of the influence area.
/// * `drag` - The displacement vector applied at the anchor.
/// * `influence_radius` - Distance beyond which pixels are copied unchanged.
/// * `strength` - Scale of the displacement, within `[0, MAX_STRENGTH]`.
///
/// # Returns
///
/// A new image with the same size as `src`.
///
/// # Errors
///
/// If the radius or the strength is out of range, or a coordinate is not finite.
pub fn warp_directional<const C: usize>(
    src: &Image<u8, C>,
    anchor: Point,
    drag: Point,
    influence_radius: f32,
    strength: f32,
) -> Result<Image<u8, C>, WarpError> {
    validate_params(influence_radius, strength)?;
    validate_point("anchor", anchor)?;
    validate_point("drag vector", drag)?;

    log::trace!(
        "directional warp: anchor=({}, {}) drag=({}, {}) radius={} strength={}",
        anchor.x,
        anchor.y,
        drag.x,
        drag.y,
        influence_radius,
        strength
    );

    let (cols, rows) = (src.cols(), src.rows());
    let mut dst = src.clone();

    parallel::par_iter_rows_indexed(&mut dst, |x, y, dst_pixel| {
        let pixel = Point::new(x as f32, y as f32);
        let dist = pixel.distance(&anchor);
        if dist >= influence_radius {
            return;
        }

        let ratio = dist / influence_radius;
        let weight = (1.0 - ratio) * (1.0 - ratio) * strength;

        let source = pixel - drag * weight;
        if is_interior(source.x, source.y, cols, rows) {
            dst_pixel.copy_from_slice(&bilinear_interpolation(src, source.x, source.y));
        }
    });

    Ok(dst)
}

/// Pulls the pixels around `start` towards `end`.
///
/// Directional warp anchored at `start` with drag vector `end - start`.
pub fn warp_pull<const C: usize>(
    src: &Image<u8, C>,
    start: Point,
    end: Point,
    influence_radius: f32,
    strength: f32,
) -> Result<Image<u8, C>, WarpError> {
    warp_directional(src, start, end - start, influence_radius, strength)
}

/// Pushes the pixels around `start` away from `end`.
///
/// Directional warp anchored at `start` with drag vector `start - end`.
pub fn warp_push<const C: usize>(
    src: &Image<u8, C>,
    start: Point,
    end: Point,
    influence_radius: f32,
    strength: f32,
) -> Result<Image<u8, C>, WarpError> {
    warp_directional(src, start, start - end, influence_radius, strength)
}
