use crate::error::{GeometryError, Result};
use crate::geometry::Curve;

use super::Polyline;

/// Fewest segments that still outline a closed curve.
const MIN_SEGMENTS: usize = 3;

/// Tessellates a curve into a polyline of evenly spaced parameter steps.
///
/// Closed curves yield `segments` vertices with the closing edge implied;
/// open curves yield `segments + 1` vertices including both ends.
pub struct TessellateCurve<'a, C: Curve> {
    curve: &'a C,
    segments: usize,
}

impl<'a, C: Curve> TessellateCurve<'a, C> {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(curve: &'a C, segments: usize) -> Self {
        Self { curve, segments }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if fewer than three
    /// segments are requested or the domain is not finite.
    pub fn execute(&self) -> Result<Polyline> {
        if self.segments < MIN_SEGMENTS {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "segments",
                value: usize_to_f64(self.segments),
                min: usize_to_f64(MIN_SEGMENTS),
                max: f64::INFINITY,
            }
            .into());
        }

        let domain = self.curve.domain();
        if !domain.span().is_finite() {
            return Err(GeometryError::Degenerate(
                "cannot tessellate a curve with an unbounded domain".into(),
            )
            .into());
        }

        let closed = self.curve.is_closed();
        let count = if closed {
            self.segments
        } else {
            self.segments + 1
        };
        let step = domain.span() / usize_to_f64(self.segments);

        let points = (0..count)
            .map(|i| self.curve.evaluate(domain.t_min + step * usize_to_f64(i)))
            .collect();

        Ok(Polyline { points, closed })
    }
}

#[allow(clippy::cast_precision_loss)]
fn usize_to_f64(n: usize) -> f64 {
    n as f64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::DropletError;
    use crate::geometry::{Circle, CurveDomain};
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;

    #[test]
    fn circle_outline() {
        let circle = Circle::new(Point2::new(1.0, 2.0), 0.5).unwrap();
        let outline = TessellateCurve::new(&circle, 36).execute().unwrap();

        assert!(outline.closed);
        assert_eq!(outline.points.len(), 36);
        assert_eq!(outline.edge_count(), 36);
        assert_abs_diff_eq!(outline.points[0], Point2::new(1.5, 2.0), epsilon = 1e-12);
        assert_abs_diff_eq!(outline.points[9], Point2::new(1.0, 2.5), epsilon = 1e-12);
        for p in &outline.points {
            assert_abs_diff_eq!((p - circle.center()).norm(), 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn first_point_not_repeated() {
        let circle = Circle::new(Point2::origin(), 1.0).unwrap();
        let outline = TessellateCurve::new(&circle, 4).execute().unwrap();
        let last = outline.points[3];
        assert!((last - outline.points[0]).norm() > 1.0);
    }

    #[test]
    fn too_few_segments() {
        let circle = Circle::new(Point2::origin(), 1.0).unwrap();
        let err = TessellateCurve::new(&circle, 2).execute().unwrap_err();
        assert!(matches!(
            err,
            DropletError::Geometry(GeometryError::ParameterOutOfRange { parameter: "segments", .. })
        ));
    }

    /// Unit-speed straight segment from `start` to `start + (length, 0)`.
    struct Segment {
        start: Point2,
        length: f64,
    }

    impl Curve for Segment {
        fn evaluate(&self, t: f64) -> Point2 {
            Point2::new(self.start.x + t, self.start.y)
        }

        fn domain(&self) -> CurveDomain {
            CurveDomain::new(0.0, self.length)
        }

        fn is_closed(&self) -> bool {
            false
        }
    }

    #[test]
    fn open_curve_keeps_both_ends() {
        let segment = Segment {
            start: Point2::new(1.0, -1.0),
            length: 4.0,
        };
        let line = TessellateCurve::new(&segment, 4).execute().unwrap();

        assert!(!line.closed);
        assert_eq!(line.points.len(), 5);
        assert_eq!(line.edge_count(), 4);
        assert_abs_diff_eq!(line.points[0], Point2::new(1.0, -1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(line.points[2], Point2::new(3.0, -1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(line.points[4], Point2::new(5.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn unbounded_domain_rejected() {
        let ray = Segment {
            start: Point2::origin(),
            length: f64::INFINITY,
        };
        let err = TessellateCurve::new(&ray, 8).execute().unwrap_err();
        assert!(matches!(err, DropletError::Geometry(GeometryError::Degenerate(_))));
    }

    #[test]
    fn open_polyline_edges() {
        let p = Polyline {
            points: vec![Point2::origin(), Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)],
            closed: false,
        };
        assert_eq!(p.edge_count(), 2);
        assert_eq!(Polyline::default().edge_count(), 0);
    }
}
