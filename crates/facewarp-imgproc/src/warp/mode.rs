use std::fmt;
use std::str::FromStr;

use facewarp_image::{Image, Point};

use super::{validate_params, validate_point, WarpOperation};
use crate::error::WarpError;

/// The interactive warp modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarpMode {
    /// Pull the pixels at the drag start towards the drag end.
    Pull,
    /// Push the pixels at the drag start away from the drag end.
    Push,
    /// Magnify around the drag start.
    Expand,
    /// Shrink around the drag start.
    Shrink,
}

impl WarpMode {
    /// All the modes, in declaration order.
    pub const ALL: [WarpMode; 4] = [
        WarpMode::Pull,
        WarpMode::Push,
        WarpMode::Expand,
        WarpMode::Shrink,
    ];

    /// The lower-case name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarpMode::Pull => "pull",
            WarpMode::Push => "push",
            WarpMode::Expand => "expand",
            WarpMode::Shrink => "shrink",
        }
    }
}

impl fmt::Display for WarpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WarpMode {
    type Err = WarpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WarpMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| WarpError::UnknownMode(s.to_string()))
    }
}

/// Applies a single drag-driven warp.
///
/// `start` and `end` are first clamped into the image, then the drag is
/// turned into a [`WarpOperation`] with [`WarpOperation::from_drag`].
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `start` - Where the drag starts; the anchor of the warp.
/// * `end` - Where the drag ends; ignored by the radial modes.
/// * `influence_radius` - Distance beyond which pixels are copied unchanged.
/// * `strength` - Scale of the effect, within `[0, MAX_STRENGTH]`.
/// * `mode` - The warp to run.
///
/// # Example
///
/// ```
/// use facewarp_image::{Image, Point};
/// use facewarp_imgproc::warp::{apply_warp, WarpMode};
///
/// let src = Image::<u8, 4>::from_size_fn([8, 8].into(), |x, y| [x as u8, y as u8, 0, 255]);
/// let mode: WarpMode = "expand".parse().unwrap();
///
/// let dst = apply_warp(&src, Point::new(4.0, 4.0), Point::new(4.0, 4.0), 3.0, 1.0, mode).unwrap();
/// assert_eq!(dst.size(), src.size());
/// ```
pub fn apply_warp<const C: usize>(
    src: &Image<u8, C>,
    start: Point,
    end: Point,
    influence_radius: f32,
    strength: f32,
    mode: WarpMode,
) -> Result<Image<u8, C>, WarpError> {
    validate_point("start", start)?;
    validate_point("end", end)?;
    if src.cols() == 0 || src.rows() == 0 {
        validate_params(influence_radius, strength)?;
        return Ok(src.clone());
    }

    let (max_x, max_y) = ((src.cols() - 1) as f32, (src.rows() - 1) as f32);
    let start = start.clamp(max_x, max_y);
    let end = end.clamp(max_x, max_y);

    log::debug!(
        "{mode} warp from ({}, {}) to ({}, {})",
        start.x,
        start.y,
        end.x,
        end.y
    );

    WarpOperation::from_drag(start, end, influence_radius, strength, mode).apply(src)
}
