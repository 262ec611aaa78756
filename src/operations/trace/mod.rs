//! Tracing a ray through the drop: entry, internal chords and outgoing rays.

mod entry;
mod refract;
mod segment;
mod trace_drop;

pub use entry::{EntryRay, LaserSide};
pub use refract::refract_at_circle;
pub use segment::{RaySegment, SegmentKind, TraceResult};
pub use trace_drop::{TraceDrop, TraceOptions};
