use facewarp_image::{Image, Point};

use super::{warp_directional, warp_radial, RadialMode, WarpMode};
use crate::error::WarpError;

/// The remapping applied by a [`WarpOperation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarpKind {
    /// Displacement along the operation's vector.
    Directional,
    /// Scaling around the anchor; the displacement is ignored.
    Radial(RadialMode),
}

/// One pixel-remapping pass, fully determined by its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpOperation {
    /// Center of the influence area.
    pub anchor: Point,
    /// Drag vector of a directional warp.
    pub displacement: Point,
    /// Distance beyond which the operation has no effect.
    pub influence_radius: f32,
    /// Magnitude of the effect at the anchor.
    pub strength: f32,
    /// Which warp to run.
    pub kind: WarpKind,
}

impl WarpOperation {
    /// A directional warp with an explicit drag vector.
    pub fn directional(
        anchor: Point,
        displacement: Point,
        influence_radius: f32,
        strength: f32,
    ) -> Self {
        Self {
            anchor,
            displacement,
            influence_radius,
            strength,
            kind: WarpKind::Directional,
        }
    }

    /// A pull from `start` towards `end`.
    pub fn pull(start: Point, end: Point, influence_radius: f32, strength: f32) -> Self {
        Self::directional(start, end - start, influence_radius, strength)
    }

    /// A push at `start` away from `end`.
    pub fn push(start: Point, end: Point, influence_radius: f32, strength: f32) -> Self {
        Self::directional(start, start - end, influence_radius, strength)
    }

    /// A radial warp around `center`.
    pub fn radial(center: Point, influence_radius: f32, strength: f32, mode: RadialMode) -> Self {
        Self {
            anchor: center,
            displacement: Point::zero(),
            influence_radius,
            strength,
            kind: WarpKind::Radial(mode),
        }
    }

    /// The operation a drag from `start` to `end` performs in the given mode.
    ///
    /// Radial modes are centered at `start` and ignore `end`.
    pub fn from_drag(
        start: Point,
        end: Point,
        influence_radius: f32,
        strength: f32,
        mode: WarpMode,
    ) -> Self {
        match mode {
            WarpMode::Pull => Self::pull(start, end, influence_radius, strength),
            WarpMode::Push => Self::push(start, end, influence_radius, strength),
            WarpMode::Expand => {
                Self::radial(start, influence_radius, strength, RadialMode::Expand)
            }
            WarpMode::Shrink => {
                Self::radial(start, influence_radius, strength, RadialMode::Shrink)
            }
        }
    }

    /// Run the operation on `src`, returning a new image of the same size.
    pub fn apply<const C: usize>(&self, src: &Image<u8, C>) -> Result<Image<u8, C>, WarpError> {
        match self.kind {
            WarpKind::Directional => warp_directional(
                src,
                self.anchor,
                self.displacement,
                self.influence_radius,
                self.strength,
            ),
            WarpKind::Radial(mode) => {
                warp_radial(src, self.anchor, self.influence_radius, self.strength, mode)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use facewarp_image::{Image, Point};

    use super::{WarpKind, WarpOperation};
    use crate::error::WarpError;
    use crate::warp::{warp_pull, warp_radial, RadialMode, WarpMode};

    #[test]
    fn operation_from_drag() {
        let start = Point::new(4.0, 4.0);
        let end = Point::new(6.0, 3.0);

        let op = WarpOperation::from_drag(start, end, 5.0, 1.0, WarpMode::Pull);
        assert_eq!(op.displacement, Point::new(2.0, -1.0));
        assert_eq!(op.kind, WarpKind::Directional);

        let op = WarpOperation::from_drag(start, end, 5.0, 1.0, WarpMode::Push);
        assert_eq!(op.displacement, Point::new(-2.0, 1.0));

        let op = WarpOperation::from_drag(start, end, 5.0, 1.0, WarpMode::Shrink);
        assert_eq!(op.anchor, start);
        assert_eq!(op.kind, WarpKind::Radial(RadialMode::Shrink));
    }

    #[test]
    fn operation_apply_matches_functions() -> Result<(), WarpError> {
        let src = Image::<u8, 4>::from_size_fn([10, 10].into(), |x, y| {
            [(x * 25) as u8, (y * 25) as u8, 0, 255]
        });
        let start = Point::new(5.0, 5.0);
        let end = Point::new(7.0, 6.0);

        let op = WarpOperation::pull(start, end, 4.0, 0.8);
        assert_eq!(op.apply(&src)?, warp_pull(&src, start, end, 4.0, 0.8)?);

        let op = WarpOperation::radial(start, 4.0, 0.8, RadialMode::Expand);
        assert_eq!(
            op.apply(&src)?,
            warp_radial(&src, start, 4.0, 0.8, RadialMode::Expand)?
        );

        Ok(())
    }
}
