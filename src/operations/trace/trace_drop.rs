use tracing::debug;

use crate::geometry::Circle;
use crate::math::angle_2d::unsigned_angle_deg;
use crate::math::optics_2d::reflect;
use crate::math::{normalize_or_zero, Point2, Vector2, TOLERANCE};
use crate::optics::{Medium, MediumPair};

use super::{refract_at_circle, EntryRay, LaserSide, RaySegment, SegmentKind, TraceResult};

/// Tuning for a drop trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceOptions {
    /// Number of boundary events to follow. Three covers the entry, the
    /// straight-through exit and the primary bow.
    pub iterations: usize,
    /// Drawing length of rays leaving the drop.
    pub outgoing_length: f64,
    /// Side of the source, which fixes the reference axis for the exit angle.
    pub laser_side: LaserSide,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            iterations: 3,
            outgoing_length: 10.0,
            laser_side: LaserSide::Left,
        }
    }
}

/// Traces a ray into a circular drop and through its internal bounces.
///
/// # Algorithm
///
/// A single loop carries `(hit, incident, medium)` from one boundary event
/// to the next:
///
/// 1. **Entry** (`medium == Outside`): the outward ray is the surface
///    reflection; the ray continues by refracting into the drop.
/// 2. **Inside** (every later event): the outward ray is the refraction out
///    of the drop (or its reflection on total internal reflection); the ray
///    continues by reflecting off the inner surface.
///
/// Each event emits its outward ray followed by the chord to the next hit.
/// The exit angle is measured between the source-side reference axis and the
/// last outward ray.
#[derive(Debug, Clone)]
pub struct TraceDrop {
    entry: EntryRay,
    circle: Circle,
    media: MediumPair,
    options: TraceOptions,
}

impl TraceDrop {
    /// Creates a new `TraceDrop` operation.
    #[must_use]
    pub fn new(entry: EntryRay, circle: Circle, media: MediumPair, options: TraceOptions) -> Self {
        Self {
            entry,
            circle,
            media,
            options,
        }
    }

    /// Executes the trace.
    ///
    /// Never fails: missed intersections leave the ray where it is, and
    /// impossible refractions reflect.
    #[must_use]
    pub fn execute(&self) -> TraceResult {
        let iterations = self.options.iterations;
        let mut segments = Vec::with_capacity(1 + 2 * iterations);
        segments.push(RaySegment::new(
            self.entry.origin,
            self.entry.hit,
            SegmentKind::Entry,
            0,
        ));

        let mut hit = self.entry.hit;
        let mut incident = self.entry.incident();
        let mut medium = Medium::Outside;
        let mut exit_direction = incident;

        for iteration in 0..iterations {
            let (outward, continuation, kind) = self.boundary_event(&hit, &incident, medium);
            segments.push(RaySegment::from_direction(
                hit,
                &outward,
                self.options.outgoing_length,
                kind,
                iteration,
            ));
            exit_direction = outward;

            let next = self.circle.exit_point(&hit, &continuation);
            segments.push(RaySegment::new(
                hit,
                next,
                SegmentKind::InternalChord,
                iteration,
            ));

            let chord = next - hit;
            if chord.norm() > TOLERANCE {
                incident = chord.normalize();
            } else {
                debug!(iteration, "ray made no progress inside the drop");
            }
            hit = next;
            medium = Medium::Inside;
        }

        let exit_angle_deg =
            unsigned_angle_deg(&self.options.laser_side.reference_axis(), &exit_direction);
        let result = TraceResult {
            segments,
            exit_direction,
            exit_angle_deg,
        };
        debug!(iterations, "{} degrees", result.rounded_exit_angle());
        result
    }

    /// Outward and continuing directions at one boundary event.
    fn boundary_event(
        &self,
        hit: &Point2,
        incident: &Vector2,
        medium: Medium,
    ) -> (Vector2, Vector2, SegmentKind) {
        let (n1, n2) = self.media.crossing(medium);
        let normal = self.circle.normal_at(hit);
        match medium {
            Medium::Outside => {
                let reflected = normalize_or_zero(&reflect(incident, &normal));
                let refracted = refract_at_circle(hit, incident, n1, n2, &self.circle);
                (reflected, refracted, SegmentKind::SurfaceReflection)
            }
            Medium::Inside => {
                let refracted = refract_at_circle(hit, incident, n1, n2, &self.circle);
                let reflected = reflect(incident, &normal);
                (refracted, reflected, SegmentKind::ExitRefraction)
            }
        }
    }
}
