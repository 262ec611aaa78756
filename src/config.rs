//! Scene configuration: every scalar a driver feeds the tracer.
//!
//! Loaded from JSON; missing fields fall back to the scene defaults.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::geometry::Circle;
use crate::math::Point2;
use crate::operations::trace::{EntryRay, LaserSide, TraceDrop, TraceOptions, TraceResult};
use crate::optics::Light;
use crate::tessellation::{Polyline, TessellateCurve};

/// Scene parameters for a single drop and laser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Drop radius.
    pub radius: f64,
    /// Drop center `[x, y]`.
    pub center: [f64; 2],
    /// Horizontal distance from the drop center to the laser source.
    pub start_distance: f64,
    /// Side of the drop the laser sits on.
    pub laser_side: LaserSide,
    /// Number of segments used to outline the drop.
    pub circle_resolution: usize,
    /// Drawing length of rays leaving the drop.
    pub outgoing_length: f64,
    /// Number of boundary events to trace.
    pub iterations: usize,
    /// Light source and refractive indices.
    pub light: Light,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            center: [0.0, 0.0],
            start_distance: 3.0,
            laser_side: LaserSide::Left,
            circle_resolution: 36,
            outgoing_length: 10.0,
            iterations: 3,
            light: Light::default(),
        }
    }
}

impl SceneConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON or mistyped fields.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        debug!(light = %config.light.name, radius = config.radius, "loaded scene configuration");
        Ok(config)
    }

    /// The drop circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or center is invalid.
    pub fn circle(&self) -> Result<Circle> {
        Circle::new(Point2::new(self.center[0], self.center[1]), self.radius)
    }

    /// Trace options derived from the scene.
    #[must_use]
    pub fn trace_options(&self) -> TraceOptions {
        TraceOptions {
            iterations: self.iterations,
            outgoing_length: self.outgoing_length,
            laser_side: self.laser_side,
        }
    }

    /// Traces the ray for a slider `offset` in `[-radius, radius]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the circle, refractive indices, start distance or
    /// outgoing length are invalid.
    pub fn trace_at(&self, offset: f64) -> Result<TraceResult> {
        let circle = self.circle()?;
        let media = self.light.media()?;
        self.check_lengths()?;

        let entry = EntryRay::from_offset(&circle, offset, self.start_distance, self.laser_side);
        Ok(TraceDrop::new(entry, circle, media, self.trace_options()).execute())
    }

    /// Polyline outline of the drop at `circle_resolution` segments.
    ///
    /// # Errors
    ///
    /// Returns an error if the circle is invalid or the resolution is below 3.
    pub fn outline(&self) -> Result<Polyline> {
        let circle = self.circle()?;
        TessellateCurve::new(&circle, self.circle_resolution).execute()
    }

    fn check_lengths(&self) -> Result<()> {
        if !self.start_distance.is_finite() || self.start_distance <= self.radius {
            return Err(ConfigError::Invalid(format!(
                "start_distance {} must be finite and outside the drop (radius {})",
                self.start_distance, self.radius
            ))
            .into());
        }
        if !self.outgoing_length.is_finite() || self.outgoing_length < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "outgoing_length {} must be finite and non-negative",
                self.outgoing_length
            ))
            .into());
        }
        Ok(())
    }
}
