use crate::BodyPart::{self, *};

/// Skeleton edges drawn between confident keypoints
pub const CONNECTED_PARTS: [(BodyPart, BodyPart); 12] = [
    (LeftHip, LeftShoulder),
    (LeftElbow, LeftShoulder),
    (LeftElbow, LeftWrist),
    (LeftHip, LeftKnee),
    (LeftKnee, LeftAnkle),
    (RightHip, RightShoulder),
    (RightElbow, RightShoulder),
    (RightElbow, RightWrist),
    (RightHip, RightKnee),
    (RightKnee, RightAnkle),
    (LeftShoulder, RightShoulder),
    (LeftHip, RightHip),
];

/// Joint angles as (A, B, C), measured at B
pub const ANGLED_PARTS: [(BodyPart, BodyPart, BodyPart); 8] = [
    (LeftWrist, LeftElbow, LeftShoulder),
    (LeftElbow, LeftShoulder, LeftHip),
    (LeftShoulder, LeftHip, LeftKnee),
    (LeftHip, LeftKnee, LeftAnkle),
    (RightWrist, RightElbow, RightShoulder),
    (RightElbow, RightShoulder, RightHip),
    (RightShoulder, RightHip, RightKnee),
    (RightHip, RightKnee, RightAnkle),
];
