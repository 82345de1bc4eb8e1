//! Named cosmetic presets.
//!
//! A preset is a small, pre-tuned sequence of pull warps anchored to specific
//! landmarks. The [`PresetRegistry`] holds the definitions and validates them
//! when it is built; the [`PresetPipeline`] resolves a definition against the
//! landmarks of one face and applies the warps one after the other.
//!
//! # Example
//!
//! ```
//! use facewarp_face::{apply_preset, LandmarkSet, NUM_LANDMARKS};
//! use facewarp_image::{Image, Point};
//!
//! let image = Image::<u8, 4>::from_size_fn([64, 64].into(), |x, y| [x as u8, y as u8, 0, 255]);
//! let mut points = vec![Point::new(32.0, 32.0); NUM_LANDMARKS];
//! points[234] = Point::new(8.0, 32.0);
//! points[447] = Point::new(56.0, 32.0);
//! let landmarks = LandmarkSet::new(points).unwrap();
//!
//! let warped = apply_preset(&image, &landmarks, "cheek").unwrap();
//! assert_eq!(warped.size(), image.size());
//!
//! assert!(apply_preset(&image, &landmarks, "nose_job").is_err());
//! ```

mod pipeline;
mod registry;

pub use pipeline::{apply_operations, apply_preset, PresetPipeline};
pub use registry::{LandmarkRef, PresetDefinition, PresetKind, PresetRegistry, PullTarget};
