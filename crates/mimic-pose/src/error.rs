use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PoseError {
    /// A side adjacent to the measured vertex has zero length, or a point is not finite.
    DegenerateTriangle,
    /// The pose has no keypoints.
    EmptyPose,
    KeypointOrder(String),
    UnknownPart(String),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoseError::DegenerateTriangle => write!(f, "degenerate triangle: angle is undefined"),
            PoseError::EmptyPose => write!(f, "pose has no keypoints"),
            PoseError::KeypointOrder(msg) => write!(f, "keypoint order error: {msg}"),
            PoseError::UnknownPart(name) => write!(f, "unknown body part: {name}"),
        }
    }
}

impl std::error::Error for PoseError {}
