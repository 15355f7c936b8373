use crate::{
    skeleton::{ANGLED_PARTS, CONNECTED_PARTS},
    BodyPart, Keypoint, Pose, PoseError,
};
use mimic_base::BoundingBox;

// A part missing from the pose never meets the threshold.
fn confident(pose: &Pose, part: BodyPart, min_confidence: f32) -> Option<Keypoint> {
    pose.keypoint(part)
        .filter(|kp| kp.meets(min_confidence))
        .copied()
}

/// Skeleton edges whose two keypoints both reach `min_confidence`, in table order.
pub fn adjacent_pairs(pose: &Pose, min_confidence: f32) -> Vec<(Keypoint, Keypoint)> {
    CONNECTED_PARTS
        .iter()
        .filter_map(|&(first, second)| {
            Some((
                confident(pose, first, min_confidence)?,
                confident(pose, second, min_confidence)?,
            ))
        })
        .collect()
}

/// Joint triples whose three keypoints all reach `min_confidence`, in table order.
pub fn angled_triples(pose: &Pose, min_confidence: f32) -> Vec<[Keypoint; 3]> {
    ANGLED_PARTS
        .iter()
        .filter_map(|&(a, b, c)| {
            Some([
                confident(pose, a, min_confidence)?,
                confident(pose, b, min_confidence)?,
                confident(pose, c, min_confidence)?,
            ])
        })
        .collect()
}

/// Keypoints that reach `min_confidence`, in pose order.
pub fn visible_keypoints(pose: &Pose, min_confidence: f32) -> Vec<Keypoint> {
    pose.keypoints
        .iter()
        .filter(|kp| kp.meets(min_confidence))
        .copied()
        .collect()
}

/// Box around every keypoint, ignoring confidence.
pub fn bounding_box(pose: &Pose) -> Result<BoundingBox<f32>, PoseError> {
    BoundingBox::from_points(pose.keypoints.iter().map(|kp| kp.position))
        .ok_or(PoseError::EmptyPose)
}
