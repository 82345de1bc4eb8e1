//! The landmark detector is an external collaborator: it turns an image into
//! the landmarks of its most confident face. The warps only consume the
//! [`LandmarkSet`] a detector produced, see
//! [`crate::PresetPipeline::apply_detected`].

use facewarp_image::PixelBuffer;

use crate::landmarks::LandmarkSet;

/// Failures reported by a landmark detector.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DetectionError {
    /// No face was found in the image.
    #[error("no face found")]
    NoFaceFound,

    /// The detector backend failed.
    #[error("landmark detector failed: {0}")]
    Backend(String),
}

/// The landmarks of the most confident face.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Landmarks of the selected face.
    pub landmarks: LandmarkSet,
    /// Whether other faces were found and ignored.
    pub multiple_faces: bool,
}

/// A facial landmark detector.
pub trait LandmarkDetector {
    /// Detect the landmarks of the most confident face in `image`.
    fn detect(&self, image: &PixelBuffer) -> Result<Detection, DetectionError>;
}

/// A detector returning landmarks known in advance, e.g. loaded from a file.
#[derive(Debug, Clone)]
pub struct StaticLandmarks {
    landmarks: LandmarkSet,
}

impl StaticLandmarks {
    /// Wrap a landmark set.
    pub fn new(landmarks: LandmarkSet) -> Self {
        Self { landmarks }
    }
}

impl LandmarkDetector for StaticLandmarks {
    fn detect(&self, image: &PixelBuffer) -> Result<Detection, DetectionError> {
        if image.cols() == 0 || image.rows() == 0 {
            return Err(DetectionError::NoFaceFound);
        }

        Ok(Detection {
            landmarks: self.landmarks.clone(),
            multiple_faces: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use facewarp_image::{Image, Point};

    use super::{DetectionError, LandmarkDetector, StaticLandmarks};
    use crate::error::FaceError;
    use crate::landmarks::{LandmarkSet, NUM_LANDMARKS};

    #[test]
    fn static_detector() -> Result<(), FaceError> {
        let landmarks = LandmarkSet::new(vec![Point::new(1.0, 1.0); NUM_LANDMARKS])?;
        let detector = StaticLandmarks::new(landmarks.clone());

        let image = Image::<u8, 4>::from_size_fn([4, 4].into(), |_, _| [0; 4]);
        let detection = detector.detect(&image);
        assert_eq!(detection.map(|d| d.landmarks), Ok(landmarks));

        let empty = Image::<u8, 4>::from_size_fn([0, 0].into(), |_, _| [0; 4]);
        assert_eq!(
            detector.detect(&empty).map(|d| d.multiple_faces),
            Err(DetectionError::NoFaceFound)
        );

        Ok(())
    }
}
