//! DC resistance and inductance predictions.

/// Resistance from trace length and copper cross-section.
pub mod resistance;
/// Single-layer inductance approximations selected by name.
pub mod inductance;
/// Mutual coupling between stacked layers.
pub mod multilayer;

pub use inductance::{single_layer_inductance, FormulaSelection};
pub use multilayer::{coupling_factor, layer_spacing};
pub use resistance::{resistivity_constant, trace_resistance};
