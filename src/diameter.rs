//! Competing diameter definitions and their reconciliation.
//!
//! Three concepts are kept apart:
//!
//! - the *naive* outer diameter, the constructor input;
//! - the *simple* inner diameter, the largest circle concentric with the naive
//!   outer diameter that stays clear of the innermost trace;
//! - the *true* outer/inner pair used by the published inductance fits,
//!   measured as the farthest/nearest trace crossing along a line through the
//!   spiral centre and the start point.
//!
//! For non-square spirals the true pair is shifted by a quarter spacing towards
//! (outer) and away from (inner) the start point. The square's corner walk
//! makes both definitions coincide, so its offset is zero.

use crate::geometry::TraceGeometry;
use crate::math::Scalar;
use crate::shape::Shape;

/// Turns the square spiral does not spend shrinking before it reaches its centre.
#[inline]
#[must_use]
pub fn square_correction(shape: Shape) -> Scalar {
    match shape {
        Shape::Square => 1.0,
        _ => 0.0,
    }
}

/// Inner diameter left after `turns` full spacings, concentric with the outer diameter.
#[inline]
#[must_use]
pub fn concentric_inner_diameter(turns: Scalar, geometry: &TraceGeometry) -> Scalar {
    geometry.outer_diameter - 2.0 * turns * geometry.spacing() - 2.0 * geometry.trace_width
}

/// Simple inner diameter: `D − 2·(turns − c)·spacing − 2·width`, `c = 1` for the square.
#[must_use]
pub fn simple_inner_diameter(shape: Shape, turns: Scalar, geometry: &TraceGeometry) -> Scalar {
    concentric_inner_diameter(turns - square_correction(shape), geometry)
}

/// Offset between the naive and the true diameter centres.
#[must_use]
pub fn true_diameter_offset(shape: Shape, geometry: &TraceGeometry) -> Scalar {
    match shape {
        Shape::Square => 0.0,
        _ => geometry.spacing() / 4.0,
    }
}

/// Outer diameter as defined by the inductance papers.
#[must_use]
pub fn true_outer_diameter(shape: Shape, geometry: &TraceGeometry) -> Scalar {
    geometry.outer_diameter - 2.0 * true_diameter_offset(shape, geometry)
}

/// Inner diameter as defined by the inductance papers.
#[must_use]
pub fn true_inner_diameter(shape: Shape, turns: Scalar, geometry: &TraceGeometry) -> Scalar {
    simple_inner_diameter(shape, turns, geometry) + 2.0 * true_diameter_offset(shape, geometry)
}

/// All diameter definitions of one spiral layer, in millimeters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diameters {
    /// Naive outer diameter (input).
    pub naive_outer: Scalar,
    /// Simple inner diameter, concentric with `naive_outer`.
    pub simple_inner: Scalar,
    /// Paper-defined outer diameter.
    pub true_outer: Scalar,
    /// Paper-defined inner diameter.
    pub true_inner: Scalar,
    /// Centre offset of the true pair relative to the naive pair.
    pub offset: Scalar,
}

impl Diameters {
    /// Evaluates every definition for a spiral of `turns` turns.
    #[must_use]
    pub fn new(shape: Shape, turns: Scalar, geometry: &TraceGeometry) -> Self {
        Self {
            naive_outer: geometry.outer_diameter,
            simple_inner: simple_inner_diameter(shape, turns, geometry),
            true_outer: true_outer_diameter(shape, geometry),
            true_inner: true_inner_diameter(shape, turns, geometry),
            offset: true_diameter_offset(shape, geometry),
        }
    }

    /// Fill factor `(d_out − d_in) / (d_out + d_in)` of the true pair.
    #[must_use]
    pub fn fill_factor(&self) -> Scalar {
        (self.true_outer - self.true_inner) / (self.true_outer + self.true_inner)
    }

    /// Average of the true pair.
    #[must_use]
    pub fn average(&self) -> Scalar {
        (self.true_outer + self.true_inner) / 2.0
    }

    /// True when the turns do not fit: the spiral crosses its own centre.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.simple_inner <= 0.0
    }
}
