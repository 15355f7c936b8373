use crate::PoseError;
use mimic_base::Vec2;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Number of keypoints in a full pose
pub const BODY_PART_COUNT: usize = 17;

/// Body-part labels in estimator output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyPart {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl BodyPart {
    pub const ALL: [BodyPart; BODY_PART_COUNT] = [
        BodyPart::Nose,
        BodyPart::LeftEye,
        BodyPart::RightEye,
        BodyPart::LeftEar,
        BodyPart::RightEar,
        BodyPart::LeftShoulder,
        BodyPart::RightShoulder,
        BodyPart::LeftElbow,
        BodyPart::RightElbow,
        BodyPart::LeftWrist,
        BodyPart::RightWrist,
        BodyPart::LeftHip,
        BodyPart::RightHip,
        BodyPart::LeftKnee,
        BodyPart::RightKnee,
        BodyPart::LeftAnkle,
        BodyPart::RightAnkle,
    ];

    /// Label used by the estimator and in joint-angle names, e.g. `leftElbow`.
    pub fn name(self) -> &'static str {
        match self {
            BodyPart::Nose => "nose",
            BodyPart::LeftEye => "leftEye",
            BodyPart::RightEye => "rightEye",
            BodyPart::LeftEar => "leftEar",
            BodyPart::RightEar => "rightEar",
            BodyPart::LeftShoulder => "leftShoulder",
            BodyPart::RightShoulder => "rightShoulder",
            BodyPart::LeftElbow => "leftElbow",
            BodyPart::RightElbow => "rightElbow",
            BodyPart::LeftWrist => "leftWrist",
            BodyPart::RightWrist => "rightWrist",
            BodyPart::LeftHip => "leftHip",
            BodyPart::RightHip => "rightHip",
            BodyPart::LeftKnee => "leftKnee",
            BodyPart::RightKnee => "rightKnee",
            BodyPart::LeftAnkle => "leftAnkle",
            BodyPart::RightAnkle => "rightAnkle",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<BodyPart> for usize {
    fn from(part: BodyPart) -> usize {
        part as usize
    }
}

impl TryFrom<usize> for BodyPart {
    type Error = PoseError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        BodyPart::ALL.get(value).copied().ok_or_else(|| {
            PoseError::UnknownPart(format!("index {} (must be in range 0-16)", value))
        })
    }
}

impl FromStr for BodyPart {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BodyPart::ALL
            .iter()
            .copied()
            .find(|part| part.name() == s)
            .ok_or_else(|| PoseError::UnknownPart(s.to_string()))
    }
}

/// One tracked body part in a single frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub part: BodyPart,
    pub position: Vec2<f32>,
    /// Confidence in [0.0, 1.0]
    pub score: f32,
}

impl Keypoint {
    pub fn new(part: BodyPart, position: Vec2<f32>, score: f32) -> Self {
        Self {
            part,
            position,
            score,
        }
    }

    pub fn meets(&self, min_confidence: f32) -> bool {
        self.score >= min_confidence
    }
}

/// A single person's keypoints for one frame, indexed by body-part id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Overall pose confidence in [0.0, 1.0]
    pub score: f32,
    pub keypoints: Vec<Keypoint>,
}

impl Pose {
    pub fn new(score: f32, keypoints: Vec<Keypoint>) -> Self {
        Self { score, keypoints }
    }

    /// Keypoint for `part`, if the pose has one at that index.
    pub fn keypoint(&self, part: BodyPart) -> Option<&Keypoint> {
        self.keypoints.get(usize::from(part))
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    /// Check that keypoint `i` is labelled with body part `i`.
    pub fn validate(&self) -> Result<(), PoseError> {
        if self.keypoints.len() > BODY_PART_COUNT {
            return Err(PoseError::KeypointOrder(format!(
                "expected at most {} keypoints, got {}",
                BODY_PART_COUNT,
                self.keypoints.len()
            )));
        }
        for (index, keypoint) in self.keypoints.iter().enumerate() {
            if usize::from(keypoint.part) != index {
                return Err(PoseError::KeypointOrder(format!(
                    "{} found at index {}",
                    keypoint.part, index
                )));
            }
        }
        Ok(())
    }

    /// Same pose with every position scaled per axis, e.g. from model input to display resolution.
    pub fn scaled(&self, scale_x: f32, scale_y: f32) -> Pose {
        Pose {
            score: self.score,
            keypoints: self
                .keypoints
                .iter()
                .map(|kp| Keypoint {
                    position: Vec2::new(kp.position.x * scale_x, kp.position.y * scale_y),
                    ..*kp
                })
                .collect(),
        }
    }
}
