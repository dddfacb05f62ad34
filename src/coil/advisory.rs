//! Reduced-confidence flags carried alongside predictions.

use std::fmt;

use crate::electrical::multilayer::{COUPLING_VALID_SPACING_MM, COUPLING_VALID_TURNS};
use crate::math::Scalar;

/// A condition under which a prediction is still returned but should not be trusted.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// The turns do not fit inside the outer diameter.
    DegenerateGeometry {
        /// Simple inner diameter (mm), zero or negative.
        inner_diameter: Scalar,
    },
    /// The multilayer coupling fit is used outside the range it was derived for.
    CouplingOutsideValidatedRange {
        /// Turn count.
        turns: Scalar,
        /// Offending layer separation (mm).
        layer_spacing: Scalar,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGeometry { inner_diameter } => write!(
                f,
                "degenerate geometry: inner diameter {inner_diameter:.3} mm, the turns do not fit"
            ),
            Self::CouplingOutsideValidatedRange {
                turns,
                layer_spacing,
            } => write!(
                f,
                "coupling model outside validated range ({turns} turns, {layer_spacing:.3} mm layer spacing; fitted for {}-{} turns, {}-{} mm)",
                COUPLING_VALID_TURNS.start(),
                COUPLING_VALID_TURNS.end(),
                COUPLING_VALID_SPACING_MM.start(),
                COUPLING_VALID_SPACING_MM.end(),
            ),
        }
    }
}

/// Inductance prediction with the pieces it was assembled from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct InductanceEstimate {
    /// Total inductance (H).
    pub henries: Scalar,
    /// Inductance of one layer on its own (H).
    pub single_layer_henries: Scalar,
    /// `henries / single_layer_henries`: layer count plus twice the mutual sum.
    pub multiplier: Scalar,
    /// Conditions that reduce confidence in `henries`.
    pub advisories: Vec<Advisory>,
}

impl InductanceEstimate {
    /// True when no advisory was raised.
    #[must_use]
    pub fn is_validated(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Total inductance in microhenries.
    #[must_use]
    pub fn microhenries(&self) -> Scalar {
        self.henries * 1.0e6
    }
}
