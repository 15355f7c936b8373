use crate::AngleMeasurement;

/// Number of joint angles a pose can contribute
pub const MAX_JOINT_ANGLES: usize = 8;

/// Default exponential decay per degree of angle difference
pub const ANGLE_DECAY: f32 = 0.8;

/// Similarity of `candidate` to `reference` for one frame, in [0, 1].
///
/// Each candidate angle is matched by name against the first reference angle
/// with that name and contributes `exp(-0.8 * |difference|)`. Unmatched or
/// undefined angles contribute nothing. The sum is divided by
/// `MAX_JOINT_ANGLES`, so frames with fewer confident joints score lower.
pub fn score_frame(reference: &[AngleMeasurement], candidate: &[AngleMeasurement]) -> f32 {
    score_frame_with(reference, candidate, ANGLE_DECAY)
}

/// `score_frame` with a custom decay rate.
pub fn score_frame_with(
    reference: &[AngleMeasurement],
    candidate: &[AngleMeasurement],
    decay: f32,
) -> f32 {
    let sum: f32 = candidate
        .iter()
        .filter_map(|measured| {
            let target = reference.iter().find(|r| r.name == measured.name)?;
            let difference = (target.angle? - measured.angle?).abs();
            Some((-decay * difference).exp())
        })
        .sum();

    sum / MAX_JOINT_ANGLES as f32
}
