use crate::PoseError;
use mimic_base::Vec2;

/// Round to one decimal place.
pub fn round_to_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Angle at `b` of the triangle `a`-`b`-`c` in degrees, rounded to one decimal.
///
/// Uses the law of cosines with `a = |B - C|`, `b = |A - C|`, `c = |A - B|`:
/// `cos(B) = (a² + c² - b²) / (2ac)`. The result lies in [0, 180].
///
/// Returns `PoseError::DegenerateTriangle` when either side meeting at `b` has
/// zero length or a coordinate is not finite.
pub fn three_point_angle(a: Vec2<f32>, b: Vec2<f32>, c: Vec2<f32>) -> Result<f32, PoseError> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(PoseError::DegenerateTriangle);
    }

    let (a, b, c) = (a.to_f64(), b.to_f64(), c.to_f64());
    let side_a = b.distance_to(c);
    let side_b = a.distance_to(c);
    let side_c = a.distance_to(b);

    if side_a == 0.0 || side_c == 0.0 {
        return Err(PoseError::DegenerateTriangle);
    }

    let cosine = (side_a * side_a + side_c * side_c - side_b * side_b) / (2.0 * side_a * side_c);
    // collinear points can land a hair outside [-1, 1]
    let degrees = cosine.clamp(-1.0, 1.0).acos().to_degrees();

    Ok(round_to_tenth(degrees as f32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(59.99), 60.0);
        assert_eq!(round_to_tenth(45.04), 45.0);
        assert_eq!(round_to_tenth(45.06), 45.1);
    }

    #[test]
    fn test_non_finite_input() {
        let p = Vec2::new(0.0, 0.0);
        let bad = Vec2::new(f32::NAN, 1.0);
        assert_eq!(
            three_point_angle(bad, p, Vec2::new(1.0, 0.0)),
            Err(PoseError::DegenerateTriangle)
        );
    }
}
