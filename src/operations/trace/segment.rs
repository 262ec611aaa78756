use crate::math::{normalize_or_zero, Point2, Vector2};

/// What a drawn segment represents physically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// From the source to the entry point.
    Entry,
    /// Light reflected off the outer surface at the entry point.
    SurfaceReflection,
    /// Light leaving the drop at an internal hit.
    ExitRefraction,
    /// Path between two boundary points inside the drop.
    InternalChord,
}

impl SegmentKind {
    /// Whether the segment leaves the drop with a fixed drawing length.
    #[must_use]
    pub fn is_outward(self) -> bool {
        matches!(self, SegmentKind::SurfaceReflection | SegmentKind::ExitRefraction)
    }
}

/// A drawable piece of the ray path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySegment {
    /// Where the segment begins.
    pub start: Point2,
    /// Where the segment ends; outward rays stop at the drawing length.
    pub end: Point2,
    pub kind: SegmentKind,
    /// Boundary event that produced the segment; `0` for the entry ray.
    pub iteration: usize,
}

impl RaySegment {
    /// Creates a segment between two points.
    #[must_use]
    pub fn new(start: Point2, end: Point2, kind: SegmentKind, iteration: usize) -> Self {
        Self {
            start,
            end,
            kind,
            iteration,
        }
    }

    /// Creates a segment of `length` along `direction` from `start`.
    #[must_use]
    pub fn from_direction(
        start: Point2,
        direction: &Vector2,
        length: f64,
        kind: SegmentKind,
        iteration: usize,
    ) -> Self {
        Self::new(start, start + direction * length, kind, iteration)
    }

    /// Unit direction from start to end, zero for a collapsed segment.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        normalize_or_zero(&(self.end - self.start))
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// Output of a drop trace.
///
/// Segments are in physical order: the entry ray, then for every boundary
/// event its outward ray followed by the internal chord to the next hit.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceResult {
    /// Drawable segments in the order the light travels them.
    pub segments: Vec<RaySegment>,
    /// Direction of the last outward ray.
    pub exit_direction: Vector2,
    /// Unsigned angle between the reference axis and `exit_direction`,
    /// in degrees within `[0, 180]`.
    pub exit_angle_deg: f64,
}

impl TraceResult {
    /// Exit angle rounded to the nearest whole degree, halves to even.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded_exit_angle(&self) -> i64 {
        // Bounded to [0, 180] so the cast is exact.
        self.exit_angle_deg.round_ties_even() as i64
    }

    /// Segments leaving the drop (surface reflection and exit refractions).
    pub fn outward_segments(&self) -> impl Iterator<Item = &RaySegment> {
        self.segments.iter().filter(|s| s.kind.is_outward())
    }

    /// Segments travelling inside the drop.
    pub fn internal_chords(&self) -> impl Iterator<Item = &RaySegment> {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::InternalChord)
    }

    /// Boundary points in the order the ray visits them.
    #[must_use]
    pub fn hit_points(&self) -> Vec<Point2> {
        let mut hits: Vec<Point2> = self
            .segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Entry)
            .map(|s| s.end)
            .collect();
        hits.extend(self.internal_chords().map(|s| s.end));
        hits
    }
}
