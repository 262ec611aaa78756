use super::{Vector2, TOLERANCE};

/// Unsigned angle between two vectors, in degrees within `[0, 180]`.
///
/// Uses `atan2(|cross|, dot)`, which stays accurate near 0 and 180 degrees
/// where `acos` loses precision. Returns `0.0` if either vector is shorter
/// than [`TOLERANCE`].
#[must_use]
pub fn unsigned_angle_deg(from: &Vector2, to: &Vector2) -> f64 {
    if from.norm() < TOLERANCE || to.norm() < TOLERANCE {
        return 0.0;
    }
    let cross = from.perp(to);
    cross.abs().atan2(from.dot(to)).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn parallel_and_opposite() {
        let x = Vector2::new(1.0, 0.0);
        assert_abs_diff_eq!(unsigned_angle_deg(&x, &(x * 4.0)), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(unsigned_angle_deg(&x, &-x), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn unsigned_regardless_of_turn() {
        let left = Vector2::new(-1.0, 0.0);
        let up = Vector2::new(-1.0, 1.0);
        let down = Vector2::new(-1.0, -1.0);
        assert_abs_diff_eq!(unsigned_angle_deg(&left, &up), 45.0, epsilon = 1e-12);
        assert_abs_diff_eq!(unsigned_angle_deg(&left, &down), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn tiny_deviation_resolved() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(1.0, 1e-9);
        assert_abs_diff_eq!(unsigned_angle_deg(&a, &b), 1e-9f64.to_degrees(), epsilon = 1e-15);
    }

    #[test]
    fn zero_vector_yields_zero() {
        assert_abs_diff_eq!(
            unsigned_angle_deg(&Vector2::zeros(), &Vector2::new(0.0, 1.0)),
            0.0
        );
    }
}
