use std::fmt;

use crate::coil::{Advisory, Coil};
use crate::diameter::Diameters;
use crate::math::Scalar;
use crate::shape::{InductanceFormula, Shape};

/// Snapshot of every prediction for one coil. Lengths in mm, SI otherwise.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CoilReport {
    /// Identifier encoding the main parameters and results.
    pub designation: String,
    /// Spiral family.
    pub shape: Shape,
    /// Inductance formula.
    pub formula: InductanceFormula,
    /// Number of turns per layer.
    pub turns: Scalar,
    /// Copper layers.
    pub layers: u32,
    /// Diameter definitions of one layer.
    pub diameters: Diameters,
    /// Trace length over all layers.
    pub trace_length: Scalar,
    /// Length of the return trace, zero for even layer counts.
    pub return_trace_length: Scalar,
    /// Distance between neighbouring layers, zero for one layer.
    pub layer_spacing: Scalar,
    /// Series DC resistance (Ω).
    pub resistance: Scalar,
    /// Total inductance (H).
    pub inductance: Scalar,
    /// Inductance of one layer (H).
    pub single_layer_inductance: Scalar,
    /// Inductance per ohm (H/Ω), a figure of merit for power coils.
    pub inductance_per_ohm: Scalar,
    /// Conditions that reduce confidence in the numbers above.
    pub advisories: Vec<Advisory>,
}

impl CoilReport {
    pub(crate) fn new(coil: &Coil) -> Self {
        let estimate = coil.inductance();
        let resistance = coil.total_resistance();
        let spec = coil.spec();
        Self {
            designation: coil.designation_for(resistance, estimate.henries),
            shape: coil.shape(),
            formula: coil.formula(),
            turns: spec.turns(),
            layers: spec.layers(),
            diameters: coil.diameters(),
            trace_length: coil.trace_length(),
            return_trace_length: coil.return_trace_length(),
            layer_spacing: spec.layer_spacing(),
            resistance,
            inductance: estimate.henries,
            single_layer_inductance: estimate.single_layer_henries,
            inductance_per_ohm: estimate.henries / resistance,
            advisories: estimate.advisories,
        }
    }
}

impl fmt::Display for CoilReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.designation)?;
        writeln!(f, "  shape:          {} ({} formula)", self.shape, self.formula)?;
        writeln!(f, "  turns:          {} x {} layer(s)", self.turns, self.layers)?;
        writeln!(
            f,
            "  diameters:      outer {:.3} mm, inner {:.3} mm (true {:.3} / {:.3} mm)",
            self.diameters.naive_outer,
            self.diameters.simple_inner,
            self.diameters.true_outer,
            self.diameters.true_inner
        )?;
        writeln!(f, "  trace length:   {:.2} mm", self.trace_length)?;
        if self.return_trace_length > 0.0 {
            writeln!(f, "  return trace:   {:.2} mm", self.return_trace_length)?;
        }
        if self.layers > 1 {
            writeln!(f, "  layer spacing:  {:.3} mm", self.layer_spacing)?;
            writeln!(f, "  single layer:   {:.3} uH", self.single_layer_inductance * 1.0e6)?;
        }
        writeln!(f, "  resistance:     {:.2} mOhm", self.resistance * 1.0e3)?;
        writeln!(f, "  inductance:     {:.3} uH", self.inductance * 1.0e6)?;
        write!(f, "  L/R:            {:.3} uH/Ohm", self.inductance_per_ohm * 1.0e6)?;
        for advisory in &self.advisories {
            write!(f, "\n  warning: {advisory}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use approx::assert_relative_eq;
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Metadata, Subscriber};

    use crate::coil::{Coil, CoilSpec};
    use crate::component::CoilElement;
    use crate::shape::{InductanceFormula, Shape};

    /// Counts `WARN` events and ignores everything else.
    struct WarnCounter(Arc<AtomicUsize>);

    impl Subscriber for WarnCounter {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }
        fn record(&self, _: &Id, _: &Record<'_>) {}
        fn record_follows_from(&self, _: &Id, _: &Id) {}
        fn event(&self, event: &Event<'_>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
        fn enter(&self, _: &Id) {}
        fn exit(&self, _: &Id) {}
    }

    fn warnings_during(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        tracing::subscriber::with_default(WarnCounter(Arc::clone(&count)), f);
        count.load(Ordering::SeqCst)
    }

    fn square() -> Coil {
        let spec = CoilSpec::builder()
            .turns(10.0)
            .outer_diameter(35.0)
            .clearance(0.3)
            .trace_width(0.5)
            .shape(Shape::Square)
            .copper_thickness(0.035)
            .build()
            .unwrap();
        Coil::new(spec, InductanceFormula::Wheeler).unwrap()
    }

    #[test]
    fn report_collects_predictions() {
        let report = square().report();
        assert_relative_eq!(report.trace_length, 1092.0, epsilon = 1.0e-9);
        assert_relative_eq!(report.resistance, 1.073_28, max_relative = 1.0e-9);
        assert_relative_eq!(report.inductance, 4.520_986_370_523_209e-6, max_relative = 1.0e-6);
        assert_relative_eq!(report.return_trace_length, 8.0, epsilon = 1.0e-12);
        assert!(report.advisories.is_empty());
    }

    #[test]
    fn display_lists_the_headline_numbers() {
        let text = square().report().to_string();
        assert!(text.starts_with("sq_di35_tu10_wi500_cl300_oz10_Re1073_In4521"), "{text}");
        assert!(text.contains("1092.00 mm"), "{text}");
        assert!(!text.contains("layer spacing"), "{text}");
    }

    #[test]
    fn advisories_are_logged_once_per_evaluation() {
        let spec = square()
            .spec()
            .to_builder()
            .layers(2)
            .pcb_thickness(0.6)
            .build()
            .unwrap();
        let coil = square().retune(spec).unwrap();
        assert_eq!(coil.advisories().len(), 1);

        let mut report = None;
        assert_eq!(warnings_during(|| report = Some(coil.report())), 1);
        let report = report.unwrap();
        assert_eq!(report.designation, coil.designation());
        assert_eq!(report.advisories.len(), 1);

        assert_eq!(warnings_during(|| drop(CoilElement::from_coil(&coil))), 1);
        assert_eq!(warnings_during(|| drop(coil.designation())), 0);
    }
}
