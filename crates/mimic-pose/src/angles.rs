use crate::{filter::angled_triples, geometry::three_point_angle, BodyPart, Pose};
use serde::{Deserialize, Serialize};

/// A joint angle measured on one pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleMeasurement {
    /// Concatenated labels of the three parts, e.g. `leftWristleftElbowleftShoulder`
    pub name: String,
    pub joint: [BodyPart; 3],
    /// Degrees in [0, 180]; `None` when the triangle is degenerate
    pub angle: Option<f32>,
}

impl AngleMeasurement {
    pub fn new(joint: [BodyPart; 3], angle: Option<f32>) -> Self {
        Self {
            name: joint_name(joint),
            joint,
            angle,
        }
    }
}

pub fn joint_name(joint: [BodyPart; 3]) -> String {
    joint.iter().map(|part| part.name()).collect()
}

/// Measure every joint angle whose three keypoints reach `min_confidence`.
///
/// One measurement per passing triple, in the fixed joint order. Degenerate
/// triangles still produce a measurement, with an undefined angle.
pub fn extract_angles(pose: &Pose, min_confidence: f32) -> Vec<AngleMeasurement> {
    angled_triples(pose, min_confidence)
        .into_iter()
        .map(|[a, b, c]| {
            let joint = [a.part, b.part, c.part];
            let angle = match three_point_angle(a.position, b.position, c.position) {
                Ok(angle) => Some(angle),
                Err(e) => {
                    log::debug!("{} at {}: {}", joint_name(joint), b.part, e);
                    None
                }
            };
            AngleMeasurement::new(joint, angle)
        })
        .collect()
}
