//! Vector-form reflection and refraction in 2D.
//!
//! Normals passed to these functions are normalized internally, so callers
//! may hand in any non-zero length.

use super::{normalize_or_zero, Vector2};

/// Reflects `v` about the line perpendicular to `normal`.
///
/// `r = v - 2 * dot(v, n) * n` with `n` normalized. The magnitude of `v` is
/// preserved. A zero-length normal leaves `v` unchanged.
#[must_use]
pub fn reflect(v: &Vector2, normal: &Vector2) -> Vector2 {
    let n = normalize_or_zero(normal);
    v - n * (2.0 * v.dot(&n))
}

/// Refracts `incident` through a surface with the given `normal` (Snell's law).
///
/// `n1` is the refractive index of the medium the ray travels in, `n2` the
/// index of the medium it enters. The normal must oppose the incident ray
/// (`dot(incident, normal) <= 0`) for the sign convention to hold.
///
/// Returns `None` on total internal reflection, i.e. exactly when
/// `eta^2 * (1 - cos_i^2) > 1` with `eta = n1 / n2`.
#[must_use]
pub fn try_refract(incident: &Vector2, normal: &Vector2, n1: f64, n2: f64) -> Option<Vector2> {
    let i = normalize_or_zero(incident);
    let n = normalize_or_zero(normal);

    let eta = n1 / n2;
    let cos_i = -n.dot(&i);
    let sin_t2 = eta * eta * (1.0 - cos_i * cos_i);

    if sin_t2 > 1.0 {
        return None;
    }

    let cos_t = (1.0 - sin_t2).sqrt();
    Some(i * eta + n * (eta * cos_i - cos_t))
}
