//! Convenience re-exports for designing and evaluating coils.

pub use crate::coil::{Advisory, Coil, CoilReport, CoilSpec, CoilSpecBuilder, InductanceEstimate};
pub use crate::component::{CoilElement, Component};
pub use crate::constants::*;
pub use crate::context::{CoilContext, PolygonOrientation};
pub use crate::diameter::Diameters;
pub use crate::electrical::{coupling_factor, layer_spacing, FormulaSelection};
pub use crate::errors::{CoilError, CoilResult};
pub use crate::geometry::{TraceGeometry, Winding};
pub use crate::legacy::LegacyCoil;
pub use crate::math::{polyline_length, Scalar, P2};
pub use crate::render::RenderPath;
pub use crate::shape::{InductanceFormula, Shape, Sides};
pub use crate::stackup::LayerStack;
#[cfg(feature = "parallel")]
pub use crate::sweep::par_evaluate;
pub use crate::sweep::{evaluate, linspace, sweep_map};
