use serde::{Deserialize, Serialize};

use crate::geometry::{point_on_circle, Circle};
use crate::math::{normalize_or_zero, Point2, Vector2};

/// Side of the drop the laser source sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaserSide {
    /// Source at `-x`, ray travels toward `+x`.
    #[default]
    Left,
    /// Source at `+x`, ray travels toward `-x`.
    Right,
}

impl LaserSide {
    /// Unit vector pointing from the drop back toward the source.
    ///
    /// Exit angles are measured against this axis, so a ray returning
    /// straight to the source reports `0` degrees.
    #[must_use]
    pub fn reference_axis(self) -> Vector2 {
        match self {
            LaserSide::Left => Vector2::new(-1.0, 0.0),
            LaserSide::Right => Vector2::new(1.0, 0.0),
        }
    }
}

/// The incoming ray: where it starts and where it first meets the drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryRay {
    /// Position of the source.
    pub origin: Point2,
    /// Entry point on the circle boundary.
    pub hit: Point2,
}

impl EntryRay {
    /// Creates an entry ray from an explicit source and boundary hit.
    #[must_use]
    pub fn new(origin: Point2, hit: Point2) -> Self {
        Self { origin, hit }
    }

    /// Builds the entry ray for a slider `offset` in `[-radius, radius]`.
    ///
    /// The offset is clamped to that range and mapped to the boundary angle
    /// `tan(offset / radius)`. For [`LaserSide::Left`] the point is mirrored
    /// across the vertical line through the center so the ray hits the left
    /// face. The source sits `start_distance` from the center along X, at the
    /// hit's height, giving a horizontal ray.
    #[must_use]
    pub fn from_offset(circle: &Circle, offset: f64, start_distance: f64, side: LaserSide) -> Self {
        let radius = circle.radius();
        let center = circle.center();
        let offset = offset.clamp(-radius, radius);

        let mut hit = point_on_circle(center, radius, (offset / radius).tan());
        if side == LaserSide::Left {
            hit.x = 2.0 * center.x - hit.x;
        }

        let origin_x = match side {
            LaserSide::Left => center.x - start_distance,
            LaserSide::Right => center.x + start_distance,
        };

        Self {
            origin: Point2::new(origin_x, hit.y),
            hit,
        }
    }

    /// Normalized direction from the source to the entry point.
    #[must_use]
    pub fn incident(&self) -> Vector2 {
        normalize_or_zero(&(self.hit - self.origin))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_circle() -> Circle {
        Circle::new(Point2::origin(), 1.0).unwrap()
    }

    #[test]
    fn centered_offset_hits_left_pole() {
        let entry = EntryRay::from_offset(&unit_circle(), 0.0, 3.0, LaserSide::Left);
        assert_abs_diff_eq!(entry.hit, Point2::new(-1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(entry.origin, Point2::new(-3.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(entry.incident(), Vector2::new(1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn centered_offset_hits_right_pole() {
        let entry = EntryRay::from_offset(&unit_circle(), 0.0, 3.0, LaserSide::Right);
        assert_abs_diff_eq!(entry.hit, Point2::new(1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(entry.incident(), Vector2::new(-1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn offset_maps_through_tangent() {
        let c = unit_circle();
        let entry = EntryRay::from_offset(&c, 0.5, 3.0, LaserSide::Left);
        let angle = 0.5f64.tan();
        assert_abs_diff_eq!(entry.hit, Point2::new(-angle.cos(), angle.sin()), epsilon = 1e-12);
        assert_abs_diff_eq!(entry.origin.y, entry.hit.y);
        assert_abs_diff_eq!((entry.hit - c.center()).norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn offset_is_clamped_to_radius() {
        let c = Circle::new(Point2::new(1.0, 1.0), 2.0).unwrap();
        let clamped = EntryRay::from_offset(&c, 10.0, 5.0, LaserSide::Right);
        let edge = EntryRay::from_offset(&c, 2.0, 5.0, LaserSide::Right);
        assert_eq!(clamped, edge);
    }

    #[test]
    fn mirrors_about_offset_center() {
        let c = Circle::new(Point2::new(4.0, -1.0), 1.5).unwrap();
        let left = EntryRay::from_offset(&c, 0.7, 6.0, LaserSide::Left);
        let right = EntryRay::from_offset(&c, 0.7, 6.0, LaserSide::Right);
        assert_abs_diff_eq!(left.hit.x - 4.0, -(right.hit.x - 4.0), epsilon = 1e-12);
        assert_abs_diff_eq!(left.hit.y, right.hit.y, epsilon = 1e-12);
        assert_abs_diff_eq!(left.origin.x, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(right.origin.x, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn reference_axis_points_at_source() {
        assert_eq!(LaserSide::Left.reference_axis(), Vector2::new(-1.0, 0.0));
        assert_eq!(LaserSide::Right.reference_axis(), Vector2::new(1.0, 0.0));
    }
}
