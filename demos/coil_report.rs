use pcb_coil::component::{CoilElement, Component};
use pcb_coil::constants::angular_frequency;
use pcb_coil::prelude::*;

fn main() -> Result<(), CoilError> {
    // Two-layer circular coil on a thin 0.6 mm board.
    let spec = CoilSpec::builder()
        .turns(9.0)
        .outer_diameter(40.0)
        .clearance(0.15)
        .trace_width(0.9)
        .layers(2)
        .pcb_thickness(0.6)
        .copper_thickness(0.030)
        .build()?;

    for formula in Shape::Circle.formulas() {
        let coil = Coil::new(spec.clone(), formula)?;
        println!("{}\n", coil.report());
    }

    let coil = Coil::new(spec, InductanceFormula::CurrentSheet)?;
    let element = CoilElement::from(&coil);
    println!("f(Hz), Z_real(ohm), Z_imag(ohm), Q");
    for f in [1.0e3_f64, 1.0e4, 1.0e5, 1.0e6] {
        let omega = angular_frequency(f);
        let z = element.impedance(omega);
        println!("{f:.1e}, {:.4}, {:.4}, {:.2}", z.re, z.im, element.quality_factor(omega));
    }
    Ok(())
}
