//! Closed-form spiral positions and path lengths.
//!
//! Every function here is O(1) in the step parameter: positions and lengths
//! are evaluated directly, never by walking the path.

/// Square spiral corner walk and triangular-number length sum.
pub mod square;
/// Circular and regular-polygon spirals built on a shrinking polar radius.
pub mod polar;

use crate::math::Scalar;

/// Trace dimensions of one spiral layer, in millimeters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceGeometry {
    /// Nominal (naive) outer diameter, outside edge to outside edge.
    pub outer_diameter: Scalar,
    /// Copper-free gap between neighbouring turns.
    pub clearance: Scalar,
    /// Trace width.
    pub trace_width: Scalar,
}

impl TraceGeometry {
    /// Groups the three trace dimensions.
    #[must_use]
    pub const fn new(outer_diameter: Scalar, clearance: Scalar, trace_width: Scalar) -> Self {
        Self {
            outer_diameter,
            clearance,
            trace_width,
        }
    }

    /// Centre-to-centre distance between neighbouring turns (clearance + trace width).
    #[inline]
    #[must_use]
    pub fn spacing(&self) -> Scalar {
        self.clearance + self.trace_width
    }

    /// Scales every dimension from the inscribed to the circumscribed circle of an `sides`-gon.
    #[must_use]
    pub fn circumscribed(&self, sides: u32) -> Self {
        Self {
            outer_diameter: polar::circumscribed(sides, self.outer_diameter),
            clearance: polar::circumscribed(sides, self.clearance),
            trace_width: polar::circumscribed(sides, self.trace_width),
        }
    }
}

/// Direction the spiral winds when walking inwards from the start point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Winding {
    /// Clockwise (y axis pointing up).
    #[default]
    Clockwise,
    /// Counter-clockwise; the mirror image sharing the clockwise start point.
    CounterClockwise,
}

impl Winding {
    /// The opposite winding.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// Reverses the winding when `flip` is set.
    #[must_use]
    pub const fn reversed_if(self, flip: bool) -> Self {
        if flip {
            self.reversed()
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn spacing_adds_clearance_and_width() {
        let g = TraceGeometry::new(40.0, 0.15, 0.9);
        assert_relative_eq!(g.spacing(), 1.05, epsilon = 1.0e-12);
    }

    #[test]
    fn winding_reversal_is_an_involution() {
        assert_eq!(Winding::Clockwise.reversed().reversed(), Winding::Clockwise);
        assert_eq!(Winding::Clockwise.reversed_if(false), Winding::Clockwise);
        assert_eq!(Winding::Clockwise.reversed_if(true), Winding::CounterClockwise);
    }
}
