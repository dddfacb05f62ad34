//! The coil aggregate: validated parameters, a formula choice and a context,
//! composed into length, resistance, inductance and rendered paths.

/// Validated parameters and their builder.
pub mod params;
/// Reduced-confidence flags and the inductance estimate that carries them.
pub mod advisory;
/// Flat summary of every prediction for one coil.
pub mod report;

pub use advisory::{Advisory, InductanceEstimate};
pub use params::{CoilSpec, CoilSpecBuilder};
pub use report::CoilReport;

use tracing::{debug, warn};

use crate::constants::copper_mm_to_oz;
use crate::context::CoilContext;
use crate::diameter::Diameters;
use crate::electrical::inductance::{single_layer_inductance, FormulaSelection};
use crate::electrical::multilayer::{
    coupling_in_validated_range, inductance_multiplier, pairwise_mutual_sum, uniform_mutual_sum,
};
use crate::electrical::resistance::{resistivity_constant, total_resistance, trace_resistance};
use crate::errors::{CoilError, CoilResult};
use crate::math::Scalar;
use crate::render::RenderPath;
use crate::shape::{InductanceFormula, Shape};

/// A coil ready for evaluation.
///
/// Every prediction is recomputed from the parameters on demand; the struct holds no
/// cached state and can be shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Coil {
    spec: CoilSpec,
    selection: FormulaSelection,
    context: CoilContext,
}

impl Coil {
    /// Pairs `spec` with `formula` under the default context.
    pub fn new(spec: CoilSpec, formula: InductanceFormula) -> CoilResult<Self> {
        Self::with_context(spec, formula, CoilContext::default())
    }

    /// Pairs `spec` with `formula` under an explicit context.
    ///
    /// Fails when the shape has no coefficients for `formula` or the context
    /// holds a non-positive constant.
    pub fn with_context(
        spec: CoilSpec,
        formula: InductanceFormula,
        context: CoilContext,
    ) -> CoilResult<Self> {
        context.validate()?;
        let selection = FormulaSelection::new(spec.shape(), formula)?;
        debug!(
            shape = %spec.shape(),
            %formula,
            turns = spec.turns(),
            outer_diameter = spec.outer_diameter(),
            layers = spec.layers(),
            "assembled coil"
        );
        Ok(Self {
            spec,
            selection,
            context,
        })
    }

    /// Same formula and context applied to a new spec.
    pub fn retune(&self, spec: CoilSpec) -> CoilResult<Self> {
        Self::with_context(spec, self.formula(), self.context)
    }

    /// Parameters.
    #[must_use]
    pub const fn spec(&self) -> &CoilSpec {
        &self.spec
    }

    /// Spiral family.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.selection.shape()
    }

    /// Selected inductance formula.
    #[must_use]
    pub const fn formula(&self) -> InductanceFormula {
        self.selection.formula()
    }

    /// Evaluation constants.
    #[must_use]
    pub const fn context(&self) -> &CoilContext {
        &self.context
    }

    /// Every diameter definition of one layer.
    #[must_use]
    pub fn diameters(&self) -> Diameters {
        Diameters::new(self.shape(), self.spec.turns(), &self.spec.geometry())
    }

    /// Trace length of one layer (mm).
    #[must_use]
    pub fn layer_trace_length(&self) -> Scalar {
        self.shape().length(self.spec.steps(), &self.spec.geometry())
    }

    /// Trace length summed over all layers (mm).
    #[must_use]
    pub fn trace_length(&self) -> Scalar {
        self.layer_trace_length() * Scalar::from(self.spec.layers())
    }

    /// Length of the trace leading back out from the centre (mm).
    ///
    /// Even layer counts end on the far layer next to the start point and need
    /// none. Reported only; it is not part of the resistance.
    #[must_use]
    pub fn return_trace_length(&self) -> Scalar {
        if self.spec.layers() % 2 == 1 {
            self.spec.turns() * self.spec.spacing()
        } else {
            0.0
        }
    }

    /// DC resistance of each layer (Ω), top first.
    #[must_use]
    pub fn layer_resistances(&self) -> Vec<Scalar> {
        let length = self.layer_trace_length();
        let width = self.spec.trace_width();
        let resistivity = self.context.copper_resistivity;
        match self.spec.layer_stack() {
            Some(stack) => stack
                .copper_thicknesses()
                .map(|t| trace_resistance(resistivity_constant(resistivity, t), length, width))
                .collect(),
            None => {
                let k = resistivity_constant(resistivity, self.spec.copper_thickness());
                vec![trace_resistance(k, length, width); self.spec.layers() as usize]
            }
        }
    }

    /// Series DC resistance of all layers (Ω). Vias and the return trace are excluded.
    #[must_use]
    pub fn total_resistance(&self) -> Scalar {
        if self.spec.layer_stack().is_some() {
            return self.layer_resistances().iter().sum();
        }
        let k = resistivity_constant(self.context.copper_resistivity, self.spec.copper_thickness());
        let single = trace_resistance(k, self.layer_trace_length(), self.spec.trace_width());
        total_resistance(single, self.spec.layers())
    }

    /// Inductance of one layer on its own (H).
    #[must_use]
    pub fn single_layer_inductance(&self) -> Scalar {
        single_layer_inductance(
            &self.selection,
            self.spec.turns(),
            &self.spec.geometry(),
            self.context.vacuum_permeability,
        )
    }

    /// Σ K over every layer pair; zero for one layer.
    #[must_use]
    pub fn mutual_sum(&self) -> Scalar {
        let turns = self.spec.turns();
        match self.spec.layer_stack() {
            Some(stack) => pairwise_mutual_sum(turns, stack.pair_separations()),
            None => uniform_mutual_sum(turns, self.spec.layers(), self.spec.layer_spacing()),
        }
    }

    /// Every separation the coupling factor is evaluated at, one per layer pair.
    fn coupling_separations(&self) -> Vec<Scalar> {
        match self.spec.layer_stack() {
            Some(stack) => stack.pair_separations(),
            None => {
                let s = self.spec.layer_spacing();
                (1..self.spec.layers()).map(|i| Scalar::from(i) * s).collect()
            }
        }
    }

    /// Conditions under which the predictions lose their accuracy claim.
    #[must_use]
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        let diameters = self.diameters();
        if diameters.is_degenerate() {
            advisories.push(Advisory::DegenerateGeometry {
                inner_diameter: diameters.simple_inner,
            });
        }
        if self.spec.layers() > 1 {
            let turns = self.spec.turns();
            if let Some(layer_spacing) = self
                .coupling_separations()
                .into_iter()
                .find(|&s| !coupling_in_validated_range(turns, s))
            {
                advisories.push(Advisory::CouplingOutsideValidatedRange {
                    turns,
                    layer_spacing,
                });
            }
        }
        advisories
    }

    /// Single-layer inductance and the multiplier applied to it.
    fn scaled_inductance(&self) -> (Scalar, Scalar) {
        let single = self.single_layer_inductance();
        let layers = self.spec.layers();
        if layers == 1 {
            (single, 1.0)
        } else {
            (single, inductance_multiplier(layers, self.mutual_sum()))
        }
    }

    /// Total inductance with its single-layer base, multiplier and advisories.
    ///
    /// One layer returns the single-layer value untouched; more layers scale it
    /// by `N + 2·Σ K`.
    #[must_use]
    pub fn inductance(&self) -> InductanceEstimate {
        let (single, multiplier) = self.scaled_inductance();
        let henries = single * multiplier;
        let advisories = self.advisories();
        for advisory in &advisories {
            warn!(%advisory, "inductance estimate has reduced confidence");
        }
        InductanceEstimate {
            henries,
            single_layer_henries: single,
            multiplier,
            advisories,
        }
    }

    /// Points of the first layer. `resolution` overrides the context's angular
    /// step for continuous shapes and is ignored by discrete ones.
    pub fn render_path(&self, resolution: Option<Scalar>) -> CoilResult<RenderPath> {
        self.render_layer(0, resolution)
    }

    /// Points of layer `index`. Odd layers wind the other way so consecutive
    /// layers join through a via at the shared start point.
    ///
    /// Square layers are not concentric: the counter-clockwise walk is the
    /// clockwise one mirrored through the start point, which moves its centre
    /// by `(s, −s)` for spacing `s`. Exporters overlaying square layers should
    /// expect that offset.
    pub fn render_layer(&self, index: u32, resolution: Option<Scalar>) -> CoilResult<RenderPath> {
        if index >= self.spec.layers() {
            return Err(CoilError::invalid(
                "layer",
                Scalar::from(index),
                "exceeds the number of copper layers",
            ));
        }
        RenderPath::new(
            self.shape(),
            self.spec.geometry(),
            self.spec.steps(),
            self.spec.winding().reversed_if(index % 2 == 1),
            self.context.polygon_orientation,
            resolution.unwrap_or(self.context.angular_resolution),
        )
    }

    /// Compact identifier: shape, diameter, turns, trace width and clearance (µm),
    /// copper weight (tenths of an ounce), layers and board thickness (µm) when
    /// multilayer, then resistance (mΩ) and inductance (nH).
    #[must_use]
    pub fn designation(&self) -> String {
        let (single, multiplier) = self.scaled_inductance();
        self.designation_for(self.total_resistance(), single * multiplier)
    }

    /// Designation from already evaluated resistance (Ω) and inductance (H).
    pub(crate) fn designation_for(&self, resistance: Scalar, henries: Scalar) -> String {
        let spec = &self.spec;
        let mut name = format!(
            "{}_di{}_tu{}_wi{}_cl{}_oz{}",
            &self.shape().name()[..2],
            spec.outer_diameter().round(),
            spec.turns(),
            (spec.trace_width() * 1.0e3).round(),
            (spec.clearance() * 1.0e3).round(),
            (copper_mm_to_oz(spec.copper_thickness()) * 10.0).round(),
        );
        if spec.layers() > 1 {
            if let Some(pcb) = spec.pcb_thickness() {
                name.push_str(&format!("_La{}_Pt{}", spec.layers(), (pcb * 1.0e3).round()));
            }
        }
        name.push_str(&format!(
            "_Re{}_In{}",
            (resistance * 1.0e3).round(),
            (henries * 1.0e9).round(),
        ));
        name
    }

    /// Every prediction in one flat record.
    #[must_use]
    pub fn report(&self) -> CoilReport {
        CoilReport::new(self)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::Winding;
    use crate::math::polyline_length;
    use crate::stackup::LayerStack;

    fn reference_spec() -> CoilSpec {
        CoilSpec::builder()
            .turns(9.0)
            .outer_diameter(40.0)
            .clearance(0.15)
            .trace_width(0.9)
            .layers(2)
            .pcb_thickness(0.6)
            .copper_thickness(0.030)
            .build()
            .unwrap()
    }

    fn reference() -> Coil {
        Coil::new(reference_spec(), InductanceFormula::CurrentSheet).unwrap()
    }

    #[test]
    fn reference_coil_resistance() {
        let coil = reference();
        assert_relative_eq!(coil.layer_trace_length(), 838.333_999_610_436_3, max_relative = 1.0e-9);
        assert_relative_eq!(coil.total_resistance(), 1.068_099_614_318_482, max_relative = 1.0e-6);
    }

    #[test]
    fn reference_coil_inductance() {
        let estimate = reference().inductance();
        assert_relative_eq!(estimate.single_layer_henries, 3.058_223_308_007_920_2e-6, max_relative = 1.0e-6);
        assert_relative_eq!(estimate.henries, 9.715_467_286_768_891e-6, max_relative = 1.0e-6);
        assert_relative_eq!(estimate.multiplier, 2.0 + 2.0 * 0.588_416_918_628_711_6, max_relative = 1.0e-9);
        // 0.57 mm between layers is below the fitted range
        assert_eq!(estimate.advisories.len(), 1);
        assert!(matches!(
            estimate.advisories[0],
            Advisory::CouplingOutsideValidatedRange { .. }
        ));
    }

    #[test]
    fn four_layer_inductance() {
        let spec = reference_spec().to_builder().layers(4).pcb_thickness(0.8).build().unwrap();
        let coil = reference().retune(spec).unwrap();
        assert_relative_eq!(coil.inductance().henries, 3.566_481_516_905_297_6e-5, max_relative = 1.0e-6);
    }

    #[test]
    fn single_layer_inductance_is_untouched() {
        let spec = reference_spec().to_builder().layers(1).build().unwrap();
        let coil = reference().retune(spec).unwrap();
        let estimate = coil.inductance();
        assert_eq!(estimate.henries, coil.single_layer_inductance());
        assert_eq!(estimate.multiplier, 1.0);
        assert!(estimate.is_validated());
    }

    #[test]
    fn monomial_circle_is_rejected_at_construction() {
        let err = Coil::new(reference_spec(), InductanceFormula::Monomial).unwrap_err();
        assert!(matches!(err, CoilError::UnsupportedFormula { .. }));
    }

    #[test]
    fn return_trace_only_for_odd_layer_counts() {
        assert_eq!(reference().return_trace_length(), 0.0);
        let spec = reference_spec().to_builder().layers(3).build().unwrap();
        let coil = reference().retune(spec).unwrap();
        assert_relative_eq!(coil.return_trace_length(), 9.0 * 1.05, epsilon = 1.0e-12);
    }

    #[test]
    fn layers_join_at_the_start_point() {
        let coil = reference();
        let top: Vec<_> = coil.render_layer(0, None).unwrap().collect();
        let bottom: Vec<_> = coil.render_layer(1, None).unwrap().collect();
        assert_eq!(top.len(), bottom.len());
        assert_relative_eq!(top[0].x, bottom[0].x, epsilon = 1.0e-12);
        assert_relative_eq!(top[0].y, bottom[0].y, epsilon = 1.0e-12);
        // mirrored: the second point lies on the other side of the start axis
        assert!(top[1].x * bottom[1].x < 0.0);
        assert!(coil.render_layer(2, None).is_err());
    }

    #[test]
    fn render_path_length_matches_trace_length() {
        let coil = reference();
        let walked = polyline_length(coil.render_path(Some(TAU / 720.0)).unwrap());
        assert_relative_eq!(walked, coil.layer_trace_length(), max_relative = 1.0e-4);
    }

    #[test]
    fn counter_clockwise_first_layer() {
        let spec = reference_spec().to_builder().winding(Winding::CounterClockwise).build().unwrap();
        let ccw = reference().retune(spec).unwrap();
        let cw: Vec<_> = reference().render_path(None).unwrap().collect();
        let first: Vec<_> = ccw.render_layer(1, None).unwrap().collect();
        assert_eq!(cw, first);
    }

    #[test]
    fn degenerate_geometry_is_reported_not_rejected() {
        let spec = reference_spec().to_builder().turns(25.0).layers(1).build().unwrap();
        let coil = reference().retune(spec).unwrap();
        assert!(coil.diameters().simple_inner < 0.0);
        assert!(coil
            .advisories()
            .iter()
            .any(|a| matches!(a, Advisory::DegenerateGeometry { .. })));
    }

    #[test]
    fn far_layer_pairs_outside_the_fit_are_flagged() {
        let spec = CoilSpec::builder()
            .turns(10.0)
            .outer_diameter(35.0)
            .clearance(0.3)
            .trace_width(0.5)
            .layers(4)
            .pcb_thickness(3.2)
            .copper_thickness(0.035)
            .build()
            .unwrap();
        let s = spec.layer_spacing();
        assert!(coupling_in_validated_range(10.0, s));
        let coil = Coil::new(spec, InductanceFormula::CurrentSheet).unwrap();
        let advisories = coil.inductance().advisories;
        assert_eq!(advisories.len(), 1);
        match advisories[0] {
            Advisory::CouplingOutsideValidatedRange { layer_spacing, .. } => {
                assert_relative_eq!(layer_spacing, 2.0 * s, epsilon = 1.0e-12);
            }
            ref other => panic!("unexpected advisory {other:?}"),
        }

        let stack = LayerStack::uniform(4, 3.2, 0.035).unwrap();
        let stacked = coil
            .retune(coil.spec().to_builder().layer_stack(stack).build().unwrap())
            .unwrap();
        assert!(stacked
            .advisories()
            .iter()
            .any(|a| matches!(a, Advisory::CouplingOutsideValidatedRange { .. })));
    }

    #[test]
    fn stack_with_heavier_outer_copper() {
        let stack = LayerStack::new(vec![0.07, 0.5, 0.035, 0.5, 0.07]).unwrap();
        let spec = CoilSpec::builder()
            .turns(10.0)
            .outer_diameter(35.0)
            .clearance(0.3)
            .trace_width(0.5)
            .shape(Shape::Square)
            .layer_stack(stack)
            .build()
            .unwrap();
        let coil = Coil::new(spec, InductanceFormula::Wheeler).unwrap();
        let r = coil.layer_resistances();
        assert_eq!(r.len(), 3);
        assert_relative_eq!(r[1], 2.0 * r[0], max_relative = 1.0e-12);
        assert_relative_eq!(coil.total_resistance(), 4.0 * r[0], max_relative = 1.0e-12);
    }

    #[test]
    fn designation_encodes_the_parameters() {
        let name = reference().designation();
        assert!(name.starts_with("ci_di40_tu9_wi900_cl150_oz9_La2_Pt600_Re1068_In"), "{name}");
        assert!(name.ends_with("_In9715"), "{name}");
    }
}
