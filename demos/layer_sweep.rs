use pcb_coil::prelude::*;

fn main() -> Result<(), CoilError> {
    // Same footprint on boards with more and more layers.
    let base = CoilSpec::builder()
        .turns(12.0)
        .outer_diameter(30.0)
        .clearance(0.2)
        .trace_width(0.4)
        .shape(Shape::OCTAGON)
        .pcb_thickness(1.6);

    let coils = (1..=6)
        .map(|layers| {
            let spec = base.clone().layers(layers).build()?;
            Coil::new(spec, InductanceFormula::Wheeler)
        })
        .collect::<CoilResult<Vec<_>>>()?;

    println!("layers, spacing(mm), R(ohm), L(uH), multiplier, validated");
    for (coil, report) in coils.iter().zip(evaluate(&coils)) {
        let estimate = coil.inductance();
        println!(
            "{}, {:.3}, {:.3}, {:.3}, {:.3}, {}",
            report.layers,
            report.layer_spacing,
            report.resistance,
            report.inductance * 1.0e6,
            estimate.multiplier,
            estimate.is_validated()
        );
    }
    Ok(())
}
