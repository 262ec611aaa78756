use super::{Point2, Vector2, HIT_EPSILON, TOLERANCE};

/// Finds where a ray leaves (or enters) a circle, moving forward from `start`.
///
/// Solves `|f + t * d|^2 = r^2` with `f = start - center` and `d` the
/// normalized `direction`, so the leading coefficient is 1. Of the two roots,
/// the largest one strictly greater than [`HIT_EPSILON`] is taken: a start
/// point on the boundary yields a root at `t ~ 0` that must be skipped.
///
/// Returns `start` unchanged when there is no real intersection, when no
/// root lies ahead of the start point, or when `direction` is zero. Callers
/// treat that as "no progress" rather than an error.
#[must_use]
pub fn ray_circle_exit(start: &Point2, direction: &Vector2, center: &Point2, radius: f64) -> Point2 {
    let Some(d) = direction.try_normalize(TOLERANCE) else {
        return *start;
    };

    let f = start - center;
    let b = 2.0 * f.dot(&d);
    let c = f.norm_squared() - radius * radius;

    let discriminant = b * b - 4.0 * c;
    if discriminant < 0.0 {
        return *start;
    }

    let disc_sqrt = discriminant.sqrt();
    let t1 = (-b - disc_sqrt) * 0.5;
    let t2 = (-b + disc_sqrt) * 0.5;

    let t = [t1, t2]
        .into_iter()
        .filter(|t| *t > HIT_EPSILON)
        .fold(f64::NEG_INFINITY, f64::max);

    if !t.is_finite() {
        return *start;
    }

    start + d * t
}
