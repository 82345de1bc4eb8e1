use facewarp_imgproc::WarpError;

use crate::detector::DetectionError;
use crate::preset::PresetKind;

/// An error type for the face module.
#[derive(thiserror::Error, Debug)]
pub enum FaceError {
    /// The preset name is not in the registry.
    #[error("unknown preset: {0:?}")]
    UnknownPreset(String),

    /// A landmark set must hold exactly [`crate::NUM_LANDMARKS`] points.
    #[error("expected {expected} landmarks, got {0}", expected = crate::NUM_LANDMARKS)]
    InvalidLandmarkCount(usize),

    /// A landmark index is past the end of the landmark set.
    #[error("landmark index {0} is out of range [0, {max}]", max = crate::NUM_LANDMARKS - 1)]
    LandmarkIndexOutOfRange(usize),

    /// A preset definition failed validation.
    #[error("invalid preset {kind}: {reason}")]
    InvalidPreset {
        /// The offending preset.
        kind: PresetKind,
        /// What is wrong with it.
        reason: String,
    },

    /// Two definitions were given for the same preset.
    #[error("preset {0} is defined more than once")]
    DuplicatePreset(PresetKind),

    /// The pipeline was cancelled between two warp steps.
    #[error("preset pipeline cancelled")]
    Cancelled,

    /// Malformed JSON input.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The landmark detector found no usable face.
    #[error(transparent)]
    Detection(#[from] DetectionError),

    /// Error from a warp step.
    #[error(transparent)]
    Warp(#[from] WarpError),
}
