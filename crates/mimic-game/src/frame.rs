use crate::MatchConfig;
use mimic_base::BoundingBox;
use mimic_pose::{
    adjacent_pairs, bounding_box, extract_angles, visible_keypoints, AngleMeasurement, Keypoint,
    Pose,
};

/// Everything computed from one stream's pose in one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameAnalysis {
    /// False when the pose score was below `min_pose_confidence`; all fields are then empty.
    pub confident: bool,
    pub angles: Vec<AngleMeasurement>,
    /// Skeleton edges, when `show_skeleton` is on
    pub pairs: Vec<(Keypoint, Keypoint)>,
    /// Confident keypoints, when `show_points` is on
    pub keypoints: Vec<Keypoint>,
    /// When `show_bounding_box` is on and the pose is not empty
    pub bounding_box: Option<BoundingBox<f32>>,
}

/// Measure joint angles and collect overlays for one pose.
pub fn analyze_pose(pose: &Pose, config: &MatchConfig) -> FrameAnalysis {
    if pose.score < config.min_pose_confidence() {
        return FrameAnalysis::default();
    }

    let min_confidence = config.min_part_confidence();
    let output = config.output();

    let bounding_box = if output.show_bounding_box {
        match bounding_box(pose) {
            Ok(bbox) => Some(bbox),
            Err(e) => {
                log::warn!("no bounding box: {}", e);
                None
            }
        }
    } else {
        None
    };

    FrameAnalysis {
        confident: true,
        angles: extract_angles(pose, min_confidence),
        pairs: if output.show_skeleton {
            adjacent_pairs(pose, min_confidence)
        } else {
            Vec::new()
        },
        keypoints: if output.show_points {
            visible_keypoints(pose, min_confidence)
        } else {
            Vec::new()
        },
        bounding_box,
    }
}
