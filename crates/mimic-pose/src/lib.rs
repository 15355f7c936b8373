//! Geometry and scoring core for comparing two human poses.
//!
//! Keypoints come from an external pose estimator. This crate filters them by
//! confidence, measures joint angles and scores how closely a candidate pose
//! matches a reference pose.

pub mod angles;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod keypoint;
pub mod score;
pub mod skeleton;

pub use angles::{extract_angles, AngleMeasurement};
pub use error::PoseError;
pub use filter::{adjacent_pairs, angled_triples, bounding_box, visible_keypoints};
pub use geometry::{round_to_tenth, three_point_angle};
pub use keypoint::{BodyPart, Keypoint, Pose, BODY_PART_COUNT};
pub use score::{score_frame, score_frame_with, ANGLE_DECAY, MAX_JOINT_ANGLES};
pub use skeleton::{ANGLED_PARTS, CONNECTED_PARTS};
