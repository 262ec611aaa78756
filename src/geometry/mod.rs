pub mod curve;

pub use curve::{circle_normal, point_on_circle, Circle, Curve, CurveDomain};
