use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use facewarp_image::Point;
use facewarp_imgproc::warp::{WarpOperation, MAX_STRENGTH};
use serde::{Deserialize, Serialize};

use crate::error::FaceError;
use crate::landmarks::{LandmarkSet, NUM_LANDMARKS};

/// The available presets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PresetKind {
    /// Slims the lower jaw line.
    LowerJaw,
    /// Slims the jaw at the angle of the mandible.
    MiddleJaw,
    /// Narrows the cheeks.
    Cheek,
    /// Pulls the inner eye corners towards the nose bridge.
    FrontProtusion,
    /// Pulls the outer eye corners towards the temples.
    BackSlit,
}

impl PresetKind {
    /// All the presets, in declaration order.
    pub const ALL: [PresetKind; 5] = [
        PresetKind::LowerJaw,
        PresetKind::MiddleJaw,
        PresetKind::Cheek,
        PresetKind::FrontProtusion,
        PresetKind::BackSlit,
    ];

    /// The stable string id of the preset.
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetKind::LowerJaw => "lower_jaw",
            PresetKind::MiddleJaw => "middle_jaw",
            PresetKind::Cheek => "cheek",
            PresetKind::FrontProtusion => "front_protusion",
            PresetKind::BackSlit => "back_slit",
        }
    }
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetKind {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FaceError::UnknownPreset(s.to_string()))
    }
}

/// A point of the face, given by landmark indices.
///
/// In JSON a single index is written as a number and a midpoint as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LandmarkRef {
    /// A single landmark.
    Index(usize),
    /// The point halfway between two landmarks.
    Midpoint(usize, usize),
}

impl LandmarkRef {
    /// The coordinates of the referenced point.
    pub fn resolve(&self, landmarks: &LandmarkSet) -> Result<Point, FaceError> {
        match *self {
            LandmarkRef::Index(idx) => landmarks.get(idx),
            LandmarkRef::Midpoint(a, b) => Ok(landmarks.get(a)?.midpoint(&landmarks.get(b)?)),
        }
    }

    fn indices(&self) -> impl Iterator<Item = usize> {
        let (first, second) = match *self {
            LandmarkRef::Index(idx) => (idx, None),
            LandmarkRef::Midpoint(a, b) => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }
}

/// One pull of a preset, from `anchor` towards `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullTarget {
    /// Where the pull is anchored.
    pub anchor: LandmarkRef,
    /// Where the pixels are pulled to.
    pub target: LandmarkRef,
}

impl PullTarget {
    /// Pull `anchor` towards `target`.
    pub const fn new(anchor: LandmarkRef, target: LandmarkRef) -> Self {
        Self { anchor, target }
    }
}

/// The parameters of a preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetDefinition {
    /// Which preset this defines.
    pub kind: PresetKind,
    /// Strength of every pull.
    pub strength: f32,
    /// Influence radius as a fraction of the face width.
    pub influence_ratio: f32,
    /// The landmarks whose horizontal distance measures the face width.
    pub face_size_landmarks: (usize, usize),
    /// The pulls, applied in order.
    pub targets: Vec<PullTarget>,
}

impl PresetDefinition {
    /// A preset pulling two anchors towards the same landmark.
    pub fn symmetric_pull(
        kind: PresetKind,
        strength: f32,
        influence_ratio: f32,
        (left, right): (usize, usize),
        target: usize,
    ) -> Self {
        let target = LandmarkRef::Index(target);
        Self {
            kind,
            strength,
            influence_ratio,
            face_size_landmarks: FACE_WIDTH_LANDMARKS,
            targets: vec![
                PullTarget::new(LandmarkRef::Index(left), target),
                PullTarget::new(LandmarkRef::Index(right), target),
            ],
        }
    }

    /// A preset pulling two anchors towards their own landmark midpoint.
    pub fn midpoint_pull(
        kind: PresetKind,
        strength: f32,
        influence_ratio: f32,
        (left, left_target): (usize, (usize, usize)),
        (right, right_target): (usize, (usize, usize)),
    ) -> Self {
        Self {
            kind,
            strength,
            influence_ratio,
            face_size_landmarks: FACE_WIDTH_LANDMARKS,
            targets: vec![
                PullTarget::new(
                    LandmarkRef::Index(left),
                    LandmarkRef::Midpoint(left_target.0, left_target.1),
                ),
                PullTarget::new(
                    LandmarkRef::Index(right),
                    LandmarkRef::Midpoint(right_target.0, right_target.1),
                ),
            ],
        }
    }

    /// Check the parameters and every landmark index.
    pub fn validate(&self) -> Result<(), FaceError> {
        let invalid = |reason: String| FaceError::InvalidPreset {
            kind: self.kind,
            reason,
        };

        if !self.strength.is_finite() || !(0.0..=MAX_STRENGTH).contains(&self.strength) {
            return Err(invalid(format!(
                "strength {} is outside [0, {MAX_STRENGTH}]",
                self.strength
            )));
        }

        if !self.influence_ratio.is_finite() || self.influence_ratio <= 0.0 {
            return Err(invalid(format!(
                "influence ratio {} must be > 0",
                self.influence_ratio
            )));
        }

        if self.targets.is_empty() {
            return Err(invalid("no pull targets".to_string()));
        }

        let (left, right) = self.face_size_landmarks;
        let indices = [left, right].into_iter().chain(
            self.targets
                .iter()
                .flat_map(|t| t.anchor.indices().chain(t.target.indices())),
        );
        for idx in indices {
            if idx >= NUM_LANDMARKS {
                return Err(invalid(format!(
                    "landmark index {idx} is out of range [0, {}]",
                    NUM_LANDMARKS - 1
                )));
            }
        }

        Ok(())
    }

    /// The influence radius for a face: its width times the influence ratio.
    pub fn influence_radius(&self, landmarks: &LandmarkSet) -> Result<f32, FaceError> {
        let (left, right) = self.face_size_landmarks;
        let face_width = (landmarks.get(right)?.x - landmarks.get(left)?.x).abs();
        Ok(face_width * self.influence_ratio)
    }

    /// Resolve the preset into the warps to apply, in order.
    pub fn plan(&self, landmarks: &LandmarkSet) -> Result<Vec<WarpOperation>, FaceError> {
        let radius = self.influence_radius(landmarks)?;

        self.targets
            .iter()
            .map(|t| {
                let anchor = t.anchor.resolve(landmarks)?;
                let target = t.target.resolve(landmarks)?;
                Ok(WarpOperation::pull(anchor, target, radius, self.strength))
            })
            .collect()
    }
}

/// Landmarks at the left and right edge of the face, at cheekbone height.
const FACE_WIDTH_LANDMARKS: (usize, usize) = (234, 447);

/// Tip of the nose.
const NOSE_TIP: usize = 4;

/// An immutable table of validated preset definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetRegistry {
    presets: BTreeMap<PresetKind, PresetDefinition>,
}

impl PresetRegistry {
    /// Build a registry, validating every definition.
    ///
    /// # Errors
    ///
    /// If a definition is invalid or a preset is defined twice.
    pub fn new(definitions: impl IntoIterator<Item = PresetDefinition>) -> Result<Self, FaceError> {
        let mut presets = BTreeMap::new();
        for definition in definitions {
            definition.validate()?;
            let kind = definition.kind;
            if presets.insert(kind, definition).is_some() {
                return Err(FaceError::DuplicatePreset(kind));
            }
        }
        Ok(Self { presets })
    }

    /// Build a registry from a JSON array of definitions.
    ///
    /// # Example
    ///
    /// ```
    /// use facewarp_face::{PresetKind, PresetRegistry};
    ///
    /// let json = r#"[{
    ///     "kind": "back_slit",
    ///     "strength": 0.05,
    ///     "influence_ratio": 0.1,
    ///     "face_size_landmarks": [234, 447],
    ///     "targets": [
    ///         {"anchor": 33, "target": [34, 162]},
    ///         {"anchor": 359, "target": [368, 264]}
    ///     ]
    /// }]"#;
    ///
    /// let registry = PresetRegistry::from_json(json).unwrap();
    /// assert_eq!(registry.resolve(PresetKind::BackSlit).unwrap().strength, 0.05);
    /// assert!(registry.resolve(PresetKind::Cheek).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FaceError> {
        let definitions: Vec<PresetDefinition> = serde_json::from_str(json)?;
        Self::new(definitions)
    }

    /// The five built-in presets.
    ///
    /// The table goes through the same validation as [`Self::new`].
    pub fn builtin() -> Result<Self, FaceError> {
        let definitions = [
            PresetDefinition::symmetric_pull(
                PresetKind::LowerJaw,
                0.005,
                0.4,
                (150, 379),
                NOSE_TIP,
            ),
            PresetDefinition::symmetric_pull(
                PresetKind::MiddleJaw,
                0.005,
                0.65,
                (172, 397),
                NOSE_TIP,
            ),
            PresetDefinition::symmetric_pull(
                PresetKind::Cheek,
                0.005,
                0.65,
                (215, 435),
                NOSE_TIP,
            ),
            PresetDefinition::midpoint_pull(
                PresetKind::FrontProtusion,
                0.03,
                0.1,
                (243, (168, 6)),
                (463, (168, 6)),
            ),
            PresetDefinition::midpoint_pull(
                PresetKind::BackSlit,
                0.03,
                0.1,
                (33, (34, 162)),
                (359, (368, 264)),
            ),
        ];

        Self::new(definitions)
    }

    /// The definition of a preset.
    pub fn resolve(&self, kind: PresetKind) -> Result<&PresetDefinition, FaceError> {
        self.presets
            .get(&kind)
            .ok_or_else(|| FaceError::UnknownPreset(kind.to_string()))
    }

    /// The definition of a preset given by its string id.
    pub fn resolve_name(&self, name: &str) -> Result<&PresetDefinition, FaceError> {
        self.resolve(name.parse()?)
    }

    /// The definitions, ordered by kind.
    pub fn iter(&self) -> impl Iterator<Item = &PresetDefinition> {
        self.presets.values()
    }
}
