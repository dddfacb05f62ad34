//! The older single-spacing coil model.
//!
//! Parameterized by centre-to-centre `spacing` instead of clearance, with the
//! nominal diameter measured on the trace centre line. Its inner diameter
//! ignores trace width and shape (`D − 2·turns·spacing`), the inductance fits
//! take the nominal diameters directly, and the monomial clearance term is in
//! meters. Kept so results from designs made with it can be reproduced.

use crate::constants::{copper_oz_to_mm, mm_to_m};
use crate::context::CoilContext;
use crate::electrical::inductance::{evaluate, FitInputs, FormulaSelection};
use crate::electrical::resistance::{resistivity_constant, trace_resistance};
use crate::errors::{require_positive, CoilError, CoilResult};
use crate::geometry::{TraceGeometry, Winding};
use crate::math::{is_near_integer, Scalar};
use crate::render::RenderPath;
use crate::shape::{InductanceFormula, Shape};

/// Copper weight the model assumes for every board.
pub const LEGACY_COPPER_OZ: Scalar = 2.0;

/// Coil in the single-spacing parameterization. Lengths in millimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyCoil {
    turns: Scalar,
    diameter: Scalar,
    spacing: Scalar,
    trace_width: Scalar,
    selection: FormulaSelection,
    context: CoilContext,
}

impl LegacyCoil {
    /// Validates the parameters and the formula choice.
    pub fn new(
        turns: Scalar,
        diameter: Scalar,
        spacing: Scalar,
        trace_width: Scalar,
        shape: Shape,
        formula: InductanceFormula,
    ) -> CoilResult<Self> {
        let turns = require_positive("turns", turns)?;
        let diameter = require_positive("diameter", diameter)?;
        let spacing = require_positive("spacing", spacing)?;
        let trace_width = require_positive("trace_width", trace_width)?;
        if spacing <= trace_width {
            return Err(CoilError::invalid(
                "spacing",
                spacing,
                "must exceed the trace width to leave a clearance",
            ));
        }
        if shape.is_discrete() && !is_near_integer(turns * shape.steps_per_turn(), 1.0e-9) {
            return Err(CoilError::invalid("turns", turns, "a discrete spiral must end on a corner"));
        }
        Ok(Self {
            turns,
            diameter,
            spacing,
            trace_width,
            selection: FormulaSelection::new(shape, formula)?,
            context: CoilContext::default(),
        })
    }

    /// Replaces the evaluation constants.
    pub fn with_context(mut self, context: CoilContext) -> CoilResult<Self> {
        context.validate()?;
        self.context = context;
        Ok(self)
    }

    /// Gap left between neighbouring turns.
    #[must_use]
    pub fn clearance(&self) -> Scalar {
        self.spacing - self.trace_width
    }

    /// Centre-line geometry: zero width, so the spacing is all clearance.
    fn centre_line(&self) -> TraceGeometry {
        TraceGeometry::new(self.diameter, self.spacing, 0.0)
    }

    fn steps(&self) -> Scalar {
        self.turns * self.selection.shape().steps_per_turn()
    }

    /// Empty space inside the coil, the same for every shape.
    #[must_use]
    pub fn inner_diameter(&self) -> Scalar {
        self.diameter - 2.0 * self.turns * self.spacing
    }

    /// Trace length (mm).
    #[must_use]
    pub fn trace_length(&self) -> Scalar {
        self.selection.shape().length(self.steps(), &self.centre_line())
    }

    /// Return trace, straight out from the centre (mm).
    #[must_use]
    pub fn return_trace_length(&self) -> Scalar {
        self.turns * self.spacing
    }

    /// DC resistance (Ω) on 2 oz copper.
    #[must_use]
    pub fn resistance(&self) -> Scalar {
        let k = resistivity_constant(
            self.context.copper_resistivity,
            copper_oz_to_mm(LEGACY_COPPER_OZ),
        );
        trace_resistance(k, self.trace_length(), self.trace_width)
    }

    /// Inductance (H) from the nominal diameters.
    #[must_use]
    pub fn inductance(&self) -> Scalar {
        let inputs = FitInputs {
            turns: self.turns,
            outer: mm_to_m(self.diameter),
            inner: mm_to_m(self.inner_diameter()),
            trace_width: mm_to_m(self.trace_width),
            clearance_term: mm_to_m(self.clearance()),
        };
        evaluate(
            self.selection.coefficients(),
            self.context.vacuum_permeability,
            &inputs,
        )
    }

    /// Points along the centre line, clockwise.
    pub fn render_path(&self, resolution: Option<Scalar>) -> CoilResult<RenderPath> {
        RenderPath::new(
            self.selection.shape(),
            self.centre_line(),
            self.steps(),
            Winding::Clockwise,
            self.context.polygon_orientation,
            resolution.unwrap_or(self.context.angular_resolution),
        )
    }
}
