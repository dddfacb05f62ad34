//! pcb-coil: evaluate a planar spiral coil from the command line.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pcb_coil::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "pcb-coil")]
#[command(about = "Predict resistance and inductance of a PCB spiral coil")]
#[command(version)]
struct Args {
    /// Coil description as JSON; replaces the geometry flags
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Evaluation constants as JSON (missing fields keep their defaults)
    #[arg(long)]
    context: Option<PathBuf>,

    /// Number of turns per layer
    #[arg(short, long)]
    turns: Option<f64>,

    /// Outer diameter in mm
    #[arg(short, long)]
    diameter: Option<f64>,

    /// Clearance between turns in mm
    #[arg(short, long)]
    clearance: Option<f64>,

    /// Trace width in mm
    #[arg(short = 'w', long)]
    trace_width: Option<f64>,

    /// Spiral shape (square, hexagon, octagon, circle)
    #[arg(short, long, default_value = "circle")]
    shape: String,

    /// Copper layers
    #[arg(short, long, default_value = "1")]
    layers: u32,

    /// Board thickness in mm (required for more than one layer)
    #[arg(long)]
    pcb_thickness: Option<f64>,

    /// Copper weight in oz
    #[arg(long, default_value = "1")]
    copper_oz: f64,

    /// Wind the first layer counter-clockwise
    #[arg(long)]
    ccw: bool,

    /// Inductance formula (wheeler, monomial, current-sheet)
    #[arg(short, long, default_value = "current-sheet")]
    formula: String,

    /// Angular render resolution in degrees for circular coils
    #[arg(long)]
    resolution: Option<f64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write the rendered points of every layer to this CSV file
    #[arg(long)]
    points: Option<PathBuf>,
}

fn spec_from_flags(args: &Args) -> Result<CoilSpec> {
    let mut builder = CoilSpec::builder()
        .shape(args.shape.parse()?)
        .layers(args.layers)
        .copper_weight(args.copper_oz)
        .winding(if args.ccw {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        });
    if let Some(turns) = args.turns {
        builder = builder.turns(turns);
    }
    if let Some(diameter) = args.diameter {
        builder = builder.outer_diameter(diameter);
    }
    if let Some(clearance) = args.clearance {
        builder = builder.clearance(clearance);
    }
    if let Some(width) = args.trace_width {
        builder = builder.trace_width(width);
    }
    if let Some(pcb) = args.pcb_thickness {
        builder = builder.pcb_thickness(pcb);
    }
    Ok(builder.build()?)
}

fn points_csv(coil: &Coil, resolution: Option<f64>) -> Result<String> {
    let mut csv = String::from("layer,x_mm,y_mm\n");
    for layer in 0..coil.spec().layers() {
        for p in coil.render_layer(layer, resolution)? {
            writeln!(csv, "{layer},{},{}", p.x, p.y)?;
        }
    }
    Ok(csv)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let spec = match &args.input {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read coil file: {path:?}"))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Invalid coil description in {path:?}"))?
        }
        None => spec_from_flags(&args).context("Invalid coil parameters")?,
    };
    let context = match &args.context {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read context file: {path:?}"))?;
            CoilContext::from_json(&json)?
        }
        None => CoilContext::default(),
    };
    let formula: InductanceFormula = args.formula.parse()?;
    let coil = Coil::with_context(spec, formula, context)?;

    let report = coil.report();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    if let Some(path) = &args.points {
        let resolution = args.resolution.map(f64::to_radians);
        fs::write(path, points_csv(&coil, resolution)?)
            .with_context(|| format!("Failed to write points file: {path:?}"))?;
        eprintln!("Wrote rendered path: {path:?}");
    }

    Ok(())
}
