use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::MediumPair;

/// A monochromatic light source and the indices it sees in air and water.
///
/// Water's index depends on wavelength, so each colour of the bow is traced
/// with its own `Light`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    /// Display name of the light.
    pub name: String,
    /// Wavelength in nanometres. Informational; the indices carry the physics.
    pub wavelength_nm: f64,
    /// Refractive index of the surrounding air.
    pub air_index: f64,
    /// Refractive index of the water drop.
    pub water_index: f64,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            name: String::new(),
            wavelength_nm: 500.0,
            air_index: 1.0,
            water_index: 1.0,
        }
    }
}

impl Light {
    /// Creates a named light.
    #[must_use]
    pub fn new(name: impl Into<String>, wavelength_nm: f64, air_index: f64, water_index: f64) -> Self {
        Self {
            name: name.into(),
            wavelength_nm,
            air_index,
            water_index,
        }
    }

    /// Validates the indices into a [`MediumPair`].
    ///
    /// # Errors
    ///
    /// Returns an error if either index is not finite and positive.
    pub fn media(&self) -> Result<MediumPair> {
        MediumPair::new(self.air_index, self.water_index)
    }
}
