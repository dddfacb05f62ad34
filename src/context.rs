//! Evaluation context: the constants every formula reads, passed explicitly.

use crate::constants::{COPPER_RESISTIVITY, DEFAULT_ANGULAR_RESOLUTION, VACUUM_PERMEABILITY};
use crate::errors::{require_positive, CoilResult};
use crate::math::Scalar;

/// How a polygon spiral is rotated relative to the start axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonOrientation {
    /// Rotate by half a corner so a flat edge faces the start axis.
    #[default]
    FlatEdge,
    /// Leave a vertex on the start axis.
    Vertex,
}

/// Constants and rendering defaults shared by all evaluations of a coil.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilContext {
    /// Vacuum permeability μ₀ (H/m).
    pub vacuum_permeability: Scalar,
    /// Copper resistivity ρ (Ω·m).
    pub copper_resistivity: Scalar,
    /// Angular step (radians) used to sample continuous shapes.
    pub angular_resolution: Scalar,
    /// Orientation of polygon spirals.
    pub polygon_orientation: PolygonOrientation,
}

impl Default for CoilContext {
    fn default() -> Self {
        Self {
            vacuum_permeability: VACUUM_PERMEABILITY,
            copper_resistivity: COPPER_RESISTIVITY,
            angular_resolution: DEFAULT_ANGULAR_RESOLUTION,
            polygon_orientation: PolygonOrientation::FlatEdge,
        }
    }
}

impl CoilContext {
    /// Returns a copy with a different default angular resolution (radians).
    pub fn with_angular_resolution(mut self, radians: Scalar) -> CoilResult<Self> {
        self.angular_resolution = require_positive("angular_resolution", radians)?;
        Ok(self)
    }

    /// Returns a copy with a different polygon orientation.
    #[must_use]
    pub const fn with_polygon_orientation(mut self, orientation: PolygonOrientation) -> Self {
        self.polygon_orientation = orientation;
        self
    }

    /// Checks that every constant is finite and positive.
    pub fn validate(&self) -> CoilResult<()> {
        require_positive("vacuum_permeability", self.vacuum_permeability)?;
        require_positive("copper_resistivity", self.copper_resistivity)?;
        require_positive("angular_resolution", self.angular_resolution)?;
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl CoilContext {
    /// Parses a context from JSON; missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, crate::errors::ConfigError> {
        let context: Self = serde_json::from_str(json)?;
        context.validate()?;
        Ok(context)
    }
}
