#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// interface of the external landmark detector.
pub mod detector;

/// Error types for the face module.
pub mod error;

/// facial landmark sets.
pub mod landmarks;

/// named warp presets anchored to landmarks.
pub mod preset;

pub use error::FaceError;
pub use landmarks::{LandmarkSet, NUM_LANDMARKS};
pub use preset::{apply_preset, PresetKind, PresetPipeline, PresetRegistry};
