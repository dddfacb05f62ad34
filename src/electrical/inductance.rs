//! Single-layer inductance fits from Mohan et al. (1999).
//!
//! All three operate on the paper-defined ("true") outer and inner diameters.

use crate::constants::mm_to_m;
use crate::diameter::Diameters;
use crate::errors::{CoilError, CoilResult};
use crate::geometry::TraceGeometry;
use crate::math::Scalar;
use crate::shape::{Coefficients, InductanceFormula, Shape};

/// The monomial β is tabulated ×10³ and the fit yields µH, hence the combined scale.
pub const MONOMIAL_OUTPUT_SCALE: Scalar = 1.0e-6;

/// A shape paired with a formula it has coefficients for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaSelection {
    shape: Shape,
    formula: InductanceFormula,
    coefficients: Coefficients,
}

impl FormulaSelection {
    /// Pairs `shape` with `formula`, failing when the shape has no coefficients for it.
    pub fn new(shape: Shape, formula: InductanceFormula) -> CoilResult<Self> {
        let coefficients = shape
            .coefficients(formula)
            .ok_or_else(|| CoilError::UnsupportedFormula {
                shape: shape.name().to_owned(),
                formula: formula.name().to_owned(),
            })?;
        Ok(Self {
            shape,
            formula,
            coefficients,
        })
    }

    /// Selected shape.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Selected formula.
    #[must_use]
    pub const fn formula(&self) -> InductanceFormula {
        self.formula
    }

    /// Coefficients looked up at construction.
    #[must_use]
    pub const fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }
}

/// Inputs to an inductance fit. Lengths are in meters except `clearance_term`,
/// which is passed in whatever unit the coefficients were fitted against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitInputs {
    /// Number of turns.
    pub turns: Scalar,
    /// Outer diameter (m).
    pub outer: Scalar,
    /// Inner diameter (m).
    pub inner: Scalar,
    /// Trace width (m).
    pub trace_width: Scalar,
    /// Clearance, unit as fitted.
    pub clearance_term: Scalar,
}

impl FitInputs {
    fn fill_factor(&self) -> Scalar {
        (self.outer - self.inner) / (self.outer + self.inner)
    }

    fn average(&self) -> Scalar {
        (self.outer + self.inner) / 2.0
    }
}

/// Evaluates one fit in henries.
#[must_use]
pub fn evaluate(coefficients: &Coefficients, vacuum_permeability: Scalar, inputs: &FitInputs) -> Scalar {
    let n2 = inputs.turns.powi(2);
    let rho = inputs.fill_factor();
    let d_avg = inputs.average();
    match *coefficients {
        Coefficients::Wheeler([k1, k2]) => k1 * vacuum_permeability * n2 * d_avg / (1.0 + k2 * rho),
        Coefficients::Monomial([beta, a1, a2, a3, a4, a5]) => {
            MONOMIAL_OUTPUT_SCALE
                * beta
                * inputs.outer.powf(a1)
                * inputs.trace_width.powf(a2)
                * d_avg.powf(a3)
                * inputs.turns.powf(a4)
                * inputs.clearance_term.powf(a5)
        }
        Coefficients::CurrentSheet([c1, c2, c3, c4]) => {
            c1 * vacuum_permeability * n2 * d_avg * ((c2 / rho).ln() + c3 * rho + c4 * rho.powi(2)) / 2.0
        }
    }
}

/// Inductance (H) of one spiral layer.
///
/// The monomial clearance term stays in millimeters while every other length
/// is in meters; the published exponents were fitted against that mixture.
#[must_use]
pub fn single_layer_inductance(
    selection: &FormulaSelection,
    turns: Scalar,
    geometry: &TraceGeometry,
    vacuum_permeability: Scalar,
) -> Scalar {
    let diameters = Diameters::new(selection.shape(), turns, geometry);
    let inputs = FitInputs {
        turns,
        outer: mm_to_m(diameters.true_outer),
        inner: mm_to_m(diameters.true_inner),
        trace_width: mm_to_m(geometry.trace_width),
        clearance_term: geometry.clearance,
    };
    evaluate(selection.coefficients(), vacuum_permeability, &inputs)
}
