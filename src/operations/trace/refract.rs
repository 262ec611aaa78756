use tracing::trace;

use crate::geometry::Circle;
use crate::math::optics_2d::{reflect, try_refract};
use crate::math::{normalize_or_zero, Point2, Vector2};

/// Direction of a ray refracted at `hit` on the circle boundary.
///
/// The circle's normal always points outward, so it is flipped to oppose
/// `incident` when the ray arrives from inside. On total internal reflection
/// the ray is reflected instead. The result is normalized.
#[must_use]
pub fn refract_at_circle(hit: &Point2, incident: &Vector2, n1: f64, n2: f64, circle: &Circle) -> Vector2 {
    let mut normal = circle.normal_at(hit);
    if incident.dot(&normal) > 0.0 {
        normal = -normal;
    }

    if let Some(refracted) = try_refract(incident, &normal, n1, n2) {
        return normalize_or_zero(&refracted);
    }

    trace!(x = hit.x, y = hit.y, n1, n2, "total internal reflection");
    normalize_or_zero(&reflect(incident, &normal))
}
