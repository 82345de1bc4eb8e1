use std::sync::atomic::{AtomicBool, Ordering};

use facewarp_image::PixelBuffer;
use facewarp_imgproc::warp::WarpOperation;

use super::registry::{PresetKind, PresetRegistry};
use crate::detector::LandmarkDetector;
use crate::error::FaceError;
use crate::landmarks::LandmarkSet;

/// Applies warps one after the other, each on the output of the previous one.
///
/// The input is left untouched; with no operations a copy is returned.
pub fn apply_operations(
    src: &PixelBuffer,
    operations: &[WarpOperation],
) -> Result<PixelBuffer, FaceError> {
    run(src, operations, None)
}

fn run(
    src: &PixelBuffer,
    operations: &[WarpOperation],
    cancel: Option<&AtomicBool>,
) -> Result<PixelBuffer, FaceError> {
    let mut current: Option<PixelBuffer> = None;

    for (step, op) in operations.iter().enumerate() {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            log::warn!("cancelled before step {}/{}", step + 1, operations.len());
            return Err(FaceError::Cancelled);
        }

        log::debug!(
            "step {}/{}: pull at ({}, {}) by ({}, {})",
            step + 1,
            operations.len(),
            op.anchor.x,
            op.anchor.y,
            op.displacement.x,
            op.displacement.y
        );

        let input = current.as_ref().unwrap_or(src);
        current = Some(op.apply(input)?);
    }

    Ok(current.unwrap_or_else(|| src.clone()))
}

/// Resolves presets against a face and applies them.
#[derive(Debug, Clone)]
pub struct PresetPipeline {
    registry: PresetRegistry,
}

impl PresetPipeline {
    /// A pipeline over the given presets.
    pub fn new(registry: PresetRegistry) -> Self {
        Self { registry }
    }

    /// A pipeline over the built-in presets.
    pub fn builtin() -> Result<Self, FaceError> {
        Ok(Self::new(PresetRegistry::builtin()?))
    }

    /// The presets this pipeline knows.
    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    /// The warps a preset performs on a face, in application order.
    pub fn plan(
        &self,
        landmarks: &LandmarkSet,
        kind: PresetKind,
    ) -> Result<Vec<WarpOperation>, FaceError> {
        let definition = self.registry.resolve(kind)?;
        let operations = definition.plan(landmarks)?;

        if let Some(op) = operations.first() {
            log::debug!(
                "preset {kind}: {} steps, radius {}, strength {}",
                operations.len(),
                op.influence_radius,
                op.strength
            );
        }

        Ok(operations)
    }

    /// Apply a preset to an image.
    ///
    /// # Arguments
    ///
    /// * `src` - The input image.
    /// * `landmarks` - The landmarks of the face in `src`.
    /// * `kind` - The preset to apply.
    ///
    /// # Returns
    ///
    /// A new image with the same size as `src`.
    ///
    /// # Errors
    ///
    /// If the preset is not in the registry, or the face width is zero.
    pub fn apply(
        &self,
        src: &PixelBuffer,
        landmarks: &LandmarkSet,
        kind: PresetKind,
    ) -> Result<PixelBuffer, FaceError> {
        run(src, &self.plan(landmarks, kind)?, None)
    }

    /// Apply a preset given by its string id.
    pub fn apply_named(
        &self,
        src: &PixelBuffer,
        landmarks: &LandmarkSet,
        name: &str,
    ) -> Result<PixelBuffer, FaceError> {
        self.apply(src, landmarks, name.parse()?)
    }

    /// Apply a preset, checking `cancel` before every warp step.
    ///
    /// # Errors
    ///
    /// [`FaceError::Cancelled`] once the flag is set, besides the errors of [`Self::apply`].
    pub fn apply_cancellable(
        &self,
        src: &PixelBuffer,
        landmarks: &LandmarkSet,
        kind: PresetKind,
        cancel: &AtomicBool,
    ) -> Result<PixelBuffer, FaceError> {
        run(src, &self.plan(landmarks, kind)?, Some(cancel))
    }

    /// Detect the face in `src` and apply a preset to it.
    ///
    /// Only the most confident face is warped when the detector found several.
    pub fn apply_detected<D: LandmarkDetector>(
        &self,
        src: &PixelBuffer,
        detector: &D,
        kind: PresetKind,
    ) -> Result<PixelBuffer, FaceError> {
        let detection = detector.detect(src)?;
        if detection.multiple_faces {
            log::warn!("multiple faces detected, warping the most confident one");
        }
        self.apply(src, &detection.landmarks, kind)
    }
}

/// Apply one of the built-in presets, given by its string id.
pub fn apply_preset(
    src: &PixelBuffer,
    landmarks: &LandmarkSet,
    name: &str,
) -> Result<PixelBuffer, FaceError> {
    PresetPipeline::builtin()?.apply_named(src, landmarks, name)
}
