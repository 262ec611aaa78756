use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::ray_circle_exit;
use crate::math::{normalize_or_zero, Point2, Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// Point on the circumference at `angle` radians, counter-clockwise from +X.
///
/// `center + radius * (cos(angle), sin(angle))`.
#[must_use]
pub fn point_on_circle(center: &Point2, radius: f64, angle: f64) -> Point2 {
    center + Vector2::new(angle.cos(), angle.sin()) * radius
}

/// Outward unit normal of a circle at `point`.
///
/// The result points from `center` toward `point` whichever side the point
/// is approached from. `point` must differ from `center`; at the center the
/// zero vector is returned.
#[must_use]
pub fn circle_normal(center: &Point2, point: &Point2) -> Vector2 {
    normalize_or_zero(&(point - center))
}

/// A circle in the XY plane, the cross-section of the drop.
///
/// `P(t) = center + radius * (cos t, sin t)`, `t` in `[0, 2*pi)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the radius is not a finite
    /// value above [`TOLERANCE`] or the center is not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "circle radius must be positive, got {radius}"
            ))
            .into());
        }
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(
                GeometryError::Degenerate("circle center must be finite".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Point on the circumference at `angle` radians.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point2 {
        point_on_circle(&self.center, self.radius, angle)
    }

    /// Outward unit normal at `point`. See [`circle_normal`].
    #[must_use]
    pub fn normal_at(&self, point: &Point2) -> Vector2 {
        circle_normal(&self.center, point)
    }

    /// Whether `point` lies in the closed disk, with a small tolerance.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        (point - self.center).norm() <= self.radius + TOLERANCE * self.radius.max(1.0)
    }

    /// Next boundary crossing along `direction` from `start`.
    /// See [`ray_circle_exit`].
    #[must_use]
    pub fn exit_point(&self, start: &Point2, direction: &Vector2) -> Point2 {
        ray_circle_exit(start, direction, &self.center, self.radius)
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Point2 {
        self.point_at(t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, std::f64::consts::TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
