pub mod angle_2d;
pub mod intersect_2d;
pub mod optics_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Minimum forward distance for a ray-circle hit to count as a new point.
///
/// Rays launched from a point already on the boundary produce a root at
/// `t ~ 0`; anything at or below this distance is treated as that start point.
pub const HIT_EPSILON: f64 = 1e-4;

/// Normalizes `v`, returning the zero vector when it is shorter than [`TOLERANCE`].
#[must_use]
pub fn normalize_or_zero(v: &Vector2) -> Vector2 {
    v.try_normalize(TOLERANCE).unwrap_or_else(Vector2::zeros)
}
