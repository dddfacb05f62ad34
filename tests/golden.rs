//! Reference outputs pinned from a known-good run, stored under `tests/fixtures/`.

use approx::assert_relative_eq;
use pcb_coil::prelude::*;
use serde::Deserialize;

const GOLDEN: &str = include_str!("fixtures/golden.json");

#[derive(Debug, Deserialize)]
struct Fixtures {
    coils: Vec<CoilCase>,
    legacy: Vec<LegacyCase>,
}

#[derive(Debug, Deserialize)]
struct CoilCase {
    name: String,
    shape: String,
    formula: String,
    turns: f64,
    outer_diameter: f64,
    clearance: f64,
    trace_width: f64,
    layers: u32,
    pcb_thickness: Option<f64>,
    copper_thickness: f64,
    trace_length: f64,
    resistance: f64,
    single_layer_inductance: f64,
    inductance: f64,
    advisories: usize,
}

#[derive(Debug, Deserialize)]
struct LegacyCase {
    name: String,
    shape: String,
    formula: String,
    turns: f64,
    diameter: f64,
    spacing: f64,
    trace_width: f64,
    trace_length: f64,
    resistance: f64,
    inductance: f64,
}

fn fixtures() -> Fixtures {
    serde_json::from_str(GOLDEN).expect("golden fixtures parse")
}

fn build(case: &CoilCase) -> Coil {
    let mut builder = CoilSpec::builder()
        .turns(case.turns)
        .outer_diameter(case.outer_diameter)
        .clearance(case.clearance)
        .trace_width(case.trace_width)
        .shape(case.shape.parse().unwrap())
        .layers(case.layers)
        .copper_thickness(case.copper_thickness);
    if let Some(pcb) = case.pcb_thickness {
        builder = builder.pcb_thickness(pcb);
    }
    let spec = builder.build().unwrap();
    Coil::new(spec, case.formula.parse().unwrap()).unwrap()
}

#[test]
fn coil_predictions_match_reference() {
    for case in fixtures().coils {
        let coil = build(&case);
        let estimate = coil.inductance();
        // resistance and inductance within 0.1 %; lengths tighter
        assert_relative_eq!(coil.trace_length(), case.trace_length, max_relative = 1.0e-9);
        assert_relative_eq!(coil.total_resistance(), case.resistance, max_relative = 1.0e-3);
        assert_relative_eq!(
            estimate.single_layer_henries,
            case.single_layer_inductance,
            max_relative = 1.0e-3
        );
        assert_relative_eq!(estimate.henries, case.inductance, max_relative = 1.0e-3);
        assert_eq!(estimate.advisories.len(), case.advisories, "{}", case.name);
    }
}

#[test]
fn reference_values_are_reproduced_closely() {
    // the reference run used μ0 = 4π·10⁻⁷, within 1e-9 of the constant used here
    for case in fixtures().coils {
        let estimate = build(&case).inductance();
        assert_relative_eq!(estimate.henries, case.inductance, max_relative = 1.0e-8);
    }
}

#[test]
fn legacy_predictions_match_reference() {
    for case in fixtures().legacy {
        let coil = LegacyCoil::new(
            case.turns,
            case.diameter,
            case.spacing,
            case.trace_width,
            case.shape.parse().unwrap(),
            case.formula.parse().unwrap(),
        )
        .unwrap();
        assert_relative_eq!(coil.trace_length(), case.trace_length, max_relative = 1.0e-9);
        assert_relative_eq!(coil.resistance(), case.resistance, max_relative = 1.0e-9);
        assert_relative_eq!(coil.inductance(), case.inductance, max_relative = 1.0e-6);
        assert!(coil.inductance() > 0.0, "{}", case.name);
    }
}

#[test]
fn report_agrees_with_the_coil() {
    for case in fixtures().coils {
        let coil = build(&case);
        let report = coil.report();
        assert_eq!(report.designation, coil.designation());
        assert_eq!(report.layers, case.layers);
        assert_relative_eq!(report.resistance, case.resistance, max_relative = 1.0e-3);
        assert_relative_eq!(report.inductance, case.inductance, max_relative = 1.0e-3);
        assert_relative_eq!(
            report.inductance_per_ohm,
            report.inductance / report.resistance,
            max_relative = 1.0e-12
        );
    }
}
