use facewarp_image::Point;
use serde::{Deserialize, Serialize};

use crate::error::FaceError;

/// Number of points in a face mesh landmark set.
pub const NUM_LANDMARKS: usize = 468;

/// The ordered landmarks of one detected face.
///
/// Points are in the pixel coordinates of the image they were detected on.
/// The set is produced once per image and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: Vec<Point>,
}

/// A landmark as found in JSON files: `[x, y]` or `{"x": .., "y": ..}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLandmark {
    Pair([f32; 2]),
    Object(Point),
}

impl From<RawLandmark> for Point {
    fn from(raw: RawLandmark) -> Self {
        match raw {
            RawLandmark::Pair(p) => p.into(),
            RawLandmark::Object(p) => p,
        }
    }
}

impl LandmarkSet {
    /// Create a landmark set.
    ///
    /// # Errors
    ///
    /// If `points` does not hold exactly [`NUM_LANDMARKS`] points.
    pub fn new(points: Vec<Point>) -> Result<Self, FaceError> {
        if points.len() != NUM_LANDMARKS {
            return Err(FaceError::InvalidLandmarkCount(points.len()));
        }
        Ok(Self { points })
    }

    /// Parse a landmark set from a JSON array of `[x, y]` pairs or `{"x", "y"}` objects.
    ///
    /// # Example
    ///
    /// ```
    /// use facewarp_face::LandmarkSet;
    ///
    /// let json = serde_json::to_string(&vec![[10.0f32, 20.0]; 468]).unwrap();
    /// let landmarks = LandmarkSet::from_json(&json).unwrap();
    ///
    /// assert_eq!(landmarks.get(467).unwrap().y, 20.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FaceError> {
        let raw: Vec<RawLandmark> = serde_json::from_str(json)?;
        Self::new(raw.into_iter().map(Point::from).collect())
    }

    /// The landmark at `idx`.
    pub fn get(&self, idx: usize) -> Result<Point, FaceError> {
        self.points
            .get(idx)
            .copied()
            .ok_or(FaceError::LandmarkIndexOutOfRange(idx))
    }

    /// All the landmarks, in order.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl std::ops::Index<usize> for LandmarkSet {
    type Output = Point;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.points[idx]
    }
}
