//! Validated coil parameters and their builder.

use crate::constants::{copper_oz_to_mm, COPPER_MM_PER_OZ};
use crate::electrical::layer_spacing;
use crate::errors::{require_positive, CoilError, CoilResult};
use crate::geometry::{TraceGeometry, Winding};
use crate::math::{is_near_integer, Scalar};
use crate::shape::Shape;
use crate::stackup::LayerStack;

/// Tolerance when checking that a discrete spiral ends on a corner.
const CORNER_TOLERANCE: Scalar = 1.0e-9;
/// Relative tolerance when a board thickness is checked against a stack.
const THICKNESS_TOLERANCE: Scalar = 1.0e-9;

/// Immutable description of one spiral coil. Lengths in millimeters.
///
/// Built through [`CoilSpecBuilder`]; every accessor returns already-validated
/// data. Use [`CoilSpec::to_builder`] to derive a retuned copy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CoilSpecBuilder", into = "CoilSpecBuilder"))]
#[derive(Debug, Clone, PartialEq)]
pub struct CoilSpec {
    turns: Scalar,
    outer_diameter: Scalar,
    clearance: Scalar,
    trace_width: Scalar,
    shape: Shape,
    layers: u32,
    pcb_thickness: Option<Scalar>,
    copper_thickness: Scalar,
    winding: Winding,
    layer_stack: Option<LayerStack>,
}

impl CoilSpec {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> CoilSpecBuilder {
        CoilSpecBuilder::default()
    }

    /// Builder pre-filled with this spec, for retuning.
    #[must_use]
    pub fn to_builder(&self) -> CoilSpecBuilder {
        CoilSpecBuilder::from(self.clone())
    }

    /// Number of turns (may be fractional).
    #[must_use]
    pub const fn turns(&self) -> Scalar {
        self.turns
    }

    /// Nominal outer diameter.
    #[must_use]
    pub const fn outer_diameter(&self) -> Scalar {
        self.outer_diameter
    }

    /// Gap between neighbouring turns.
    #[must_use]
    pub const fn clearance(&self) -> Scalar {
        self.clearance
    }

    /// Trace width.
    #[must_use]
    pub const fn trace_width(&self) -> Scalar {
        self.trace_width
    }

    /// Spiral family.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of copper layers.
    #[must_use]
    pub const fn layers(&self) -> u32 {
        self.layers
    }

    /// Board thickness, if the coil spans more than one layer.
    #[must_use]
    pub const fn pcb_thickness(&self) -> Option<Scalar> {
        self.pcb_thickness
    }

    /// Copper foil thickness (first layer when a stack is given).
    #[must_use]
    pub const fn copper_thickness(&self) -> Scalar {
        self.copper_thickness
    }

    /// Winding direction of the first layer.
    #[must_use]
    pub const fn winding(&self) -> Winding {
        self.winding
    }

    /// Explicit stack-up, if one was supplied.
    #[must_use]
    pub const fn layer_stack(&self) -> Option<&LayerStack> {
        self.layer_stack.as_ref()
    }

    /// Centre-to-centre distance between neighbouring turns.
    #[must_use]
    pub fn spacing(&self) -> Scalar {
        self.clearance + self.trace_width
    }

    /// Distance between neighbouring copper layers; the mean when a stack is uneven.
    #[must_use]
    pub fn layer_spacing(&self) -> Scalar {
        match (&self.layer_stack, self.pcb_thickness) {
            (Some(stack), _) if self.layers > 1 => {
                let adjacent = stack.adjacent_separations();
                adjacent.iter().sum::<Scalar>() / adjacent.len() as Scalar
            }
            (_, Some(pcb)) => layer_spacing(self.layers, pcb, self.copper_thickness),
            _ => 0.0,
        }
    }

    /// Trace dimensions handed to the geometry formulas.
    #[must_use]
    pub const fn geometry(&self) -> TraceGeometry {
        TraceGeometry::new(self.outer_diameter, self.clearance, self.trace_width)
    }

    /// Step count of one layer: corners for discrete shapes, radians for the circle.
    #[must_use]
    pub fn steps(&self) -> Scalar {
        self.turns * self.shape.steps_per_turn()
    }
}

/// Collects coil parameters and validates them in [`CoilSpecBuilder::build`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoilSpecBuilder {
    turns: Option<Scalar>,
    outer_diameter: Option<Scalar>,
    clearance: Option<Scalar>,
    trace_width: Option<Scalar>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    shape: Option<Shape>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    layers: Option<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pcb_thickness: Option<Scalar>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    copper_thickness: Option<Scalar>,
    winding: Winding,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    layer_stack: Option<LayerStack>,
}

impl CoilSpecBuilder {
    /// Number of turns.
    #[must_use]
    pub fn turns(mut self, turns: Scalar) -> Self {
        self.turns = Some(turns);
        self
    }

    /// Nominal outer diameter (mm).
    #[must_use]
    pub fn outer_diameter(mut self, mm: Scalar) -> Self {
        self.outer_diameter = Some(mm);
        self
    }

    /// Gap between turns (mm).
    #[must_use]
    pub fn clearance(mut self, mm: Scalar) -> Self {
        self.clearance = Some(mm);
        self
    }

    /// Trace width (mm).
    #[must_use]
    pub fn trace_width(mut self, mm: Scalar) -> Self {
        self.trace_width = Some(mm);
        self
    }

    /// Spiral family; circular when unset.
    #[must_use]
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Copper layer count; one when unset, or the stack's count.
    #[must_use]
    pub fn layers(mut self, layers: u32) -> Self {
        self.layers = Some(layers);
        self
    }

    /// Board thickness (mm); required for more than one layer without a stack.
    #[must_use]
    pub fn pcb_thickness(mut self, mm: Scalar) -> Self {
        self.pcb_thickness = Some(mm);
        self
    }

    /// Copper foil thickness (mm); 1 oz when unset.
    #[must_use]
    pub fn copper_thickness(mut self, mm: Scalar) -> Self {
        self.copper_thickness = Some(mm);
        self
    }

    /// Copper foil weight in ounces per square foot.
    #[must_use]
    pub fn copper_weight(mut self, oz: Scalar) -> Self {
        self.copper_thickness = Some(copper_oz_to_mm(oz));
        self
    }

    /// Winding direction of the first layer.
    #[must_use]
    pub fn winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }

    /// Explicit stack-up; fixes the layer count, board thickness and copper thickness.
    #[must_use]
    pub fn layer_stack(mut self, stack: LayerStack) -> Self {
        self.layer_stack = Some(stack);
        self
    }

    /// Validates every parameter and produces an immutable spec.
    pub fn build(self) -> CoilResult<CoilSpec> {
        let turns = require_positive("turns", self.turns.ok_or(CoilError::MissingParameter("turns"))?)?;
        let outer_diameter = require_positive(
            "outer_diameter",
            self.outer_diameter.ok_or(CoilError::MissingParameter("outer_diameter"))?,
        )?;
        let clearance = require_positive(
            "clearance",
            self.clearance.ok_or(CoilError::MissingParameter("clearance"))?,
        )?;
        let trace_width = require_positive(
            "trace_width",
            self.trace_width.ok_or(CoilError::MissingParameter("trace_width"))?,
        )?;
        let shape = self.shape.unwrap_or(Shape::Circle);
        if shape.is_discrete() && !is_near_integer(turns * shape.steps_per_turn(), CORNER_TOLERANCE) {
            return Err(CoilError::invalid(
                "turns",
                turns,
                "a discrete spiral must end on a corner",
            ));
        }

        let (layers, pcb_thickness, copper_thickness) = match &self.layer_stack {
            Some(stack) => {
                Self::stack_layout(stack, self.layers, self.pcb_thickness, self.copper_thickness)?
            }
            None => self.uniform_layout()?,
        };

        Ok(CoilSpec {
            turns,
            outer_diameter,
            clearance,
            trace_width,
            shape,
            layers,
            pcb_thickness,
            copper_thickness,
            winding: self.winding,
            layer_stack: self.layer_stack,
        })
    }

    fn uniform_layout(&self) -> CoilResult<(u32, Option<Scalar>, Scalar)> {
        let copper = require_positive(
            "copper_thickness",
            self.copper_thickness.unwrap_or(COPPER_MM_PER_OZ),
        )?;
        let layers = self.layers.unwrap_or(1);
        if layers == 0 {
            return Err(CoilError::invalid("layers", 0.0, "at least one layer is required"));
        }
        let pcb = match self.pcb_thickness {
            Some(pcb) => Some(require_positive("pcb_thickness", pcb)?),
            None if layers > 1 => return Err(CoilError::MissingParameter("pcb_thickness")),
            None => None,
        };
        if let Some(pcb) = pcb {
            if layers > 1 && pcb <= copper {
                return Err(CoilError::invalid(
                    "pcb_thickness",
                    pcb,
                    "must exceed the copper thickness",
                ));
            }
        }
        Ok((layers, pcb, copper))
    }

    fn stack_layout(
        stack: &LayerStack,
        layers: Option<u32>,
        pcb_thickness: Option<Scalar>,
        copper_thickness: Option<Scalar>,
    ) -> CoilResult<(u32, Option<Scalar>, Scalar)> {
        let copper_layers = stack.copper_layers();
        if let Some(layers) = layers {
            if layers != copper_layers {
                return Err(CoilError::invalid(
                    "layers",
                    Scalar::from(layers),
                    "does not match the copper layers of the stack",
                ));
            }
        }
        let total = stack.total_thickness();
        if let Some(pcb) = pcb_thickness {
            if (pcb - total).abs() > THICKNESS_TOLERANCE * total {
                return Err(CoilError::invalid(
                    "pcb_thickness",
                    pcb,
                    "does not match the total thickness of the stack",
                ));
            }
        }
        let copper = stack
            .copper_thickness(0)
            .ok_or(CoilError::MissingParameter("layer_stack"))?;
        if let Some(requested) = copper_thickness {
            if (requested - copper).abs() > THICKNESS_TOLERANCE * copper {
                return Err(CoilError::invalid(
                    "copper_thickness",
                    requested,
                    "does not match the top copper layer of the stack",
                ));
            }
        }
        Ok((copper_layers, Some(total), copper))
    }
}

impl From<CoilSpec> for CoilSpecBuilder {
    fn from(spec: CoilSpec) -> Self {
        let explicit_stack = spec.layer_stack.is_some();
        Self {
            turns: Some(spec.turns),
            outer_diameter: Some(spec.outer_diameter),
            clearance: Some(spec.clearance),
            trace_width: Some(spec.trace_width),
            shape: Some(spec.shape),
            layers: Some(spec.layers),
            pcb_thickness: spec.pcb_thickness,
            copper_thickness: (!explicit_stack).then_some(spec.copper_thickness),
            winding: spec.winding,
            layer_stack: spec.layer_stack,
        }
    }
}

impl TryFrom<CoilSpecBuilder> for CoilSpec {
    type Error = CoilError;

    fn try_from(builder: CoilSpecBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
