#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and unit conversions.
pub mod constants;
/// Scalar and point aliases plus small numeric helpers.
pub mod math;
/// Error types shared by every module.
pub mod errors;
/// Evaluation constants passed explicitly instead of globals.
pub mod context;
/// Spiral families and their inductance coefficient tables.
pub mod shape;
/// Closed-form positions and lengths per spiral family.
pub mod geometry;
/// Naive, simple and paper-defined diameters.
pub mod diameter;
/// Resistance, single-layer and multilayer inductance formulas.
pub mod electrical;
/// Copper/dielectric stack-up description.
pub mod stackup;
/// Lazy point sequences for renderers and exporters.
pub mod render;
/// Coil parameters, the evaluated aggregate, and reports.
pub mod coil;
/// Series R-L circuit view of a coil.
pub mod component;
/// Parameter grids and batch evaluation.
pub mod sweep;
/// The older single-spacing coil model.
pub mod legacy;

/// Common exports for downstream crates.
pub mod prelude;
