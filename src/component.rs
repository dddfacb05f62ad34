//! Circuit view of a coil: a lumped series R-L element.

use num_complex::Complex;

use crate::coil::Coil;
use crate::math::{CScalar, Scalar};

/// Anything that presents a frequency-domain impedance.
pub trait Component {
    /// Returns the component's impedance for an angular frequency `omega` (rad/s).
    fn impedance(&self, omega: Scalar) -> CScalar;

    /// Human-readable identifier.
    fn name(&self) -> &str;
}

/// A coil frozen into its DC resistance and inductance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CoilElement {
    name: String,
    resistance: Scalar,
    inductance: Scalar,
}

impl CoilElement {
    /// Evaluates `coil` once and keeps the results.
    #[must_use]
    pub fn from_coil(coil: &Coil) -> Self {
        let resistance = coil.total_resistance();
        let inductance = coil.inductance().henries;
        Self {
            name: coil.designation_for(resistance, inductance),
            resistance,
            inductance,
        }
    }

    /// Series resistance (Ω).
    #[must_use]
    pub const fn resistance(&self) -> Scalar {
        self.resistance
    }

    /// Inductance (H).
    #[must_use]
    pub const fn inductance(&self) -> Scalar {
        self.inductance
    }

    /// Quality factor `ωL / R` at `omega`.
    #[must_use]
    pub fn quality_factor(&self, omega: Scalar) -> Scalar {
        omega * self.inductance / self.resistance
    }
}

impl Component for CoilElement {
    fn impedance(&self, omega: Scalar) -> CScalar {
        Complex::new(self.resistance, omega * self.inductance)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl From<&Coil> for CoilElement {
    fn from(coil: &Coil) -> Self {
        Self::from_coil(coil)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::coil::CoilSpec;
    use crate::constants::angular_frequency;
    use crate::shape::InductanceFormula;

    #[test]
    fn impedance_is_series_rl() {
        let spec = CoilSpec::builder()
            .turns(9.0)
            .outer_diameter(40.0)
            .clearance(0.15)
            .trace_width(0.9)
            .build()
            .unwrap();
        let coil = Coil::new(spec, InductanceFormula::Wheeler).unwrap();
        let element = CoilElement::from(&coil);
        let omega = angular_frequency(100.0e3);
        let z = element.impedance(omega);
        assert_relative_eq!(z.re, coil.total_resistance(), max_relative = 1.0e-12);
        assert_relative_eq!(z.im, omega * coil.inductance().henries, max_relative = 1.0e-12);
        assert_relative_eq!(element.quality_factor(omega), z.im / z.re, max_relative = 1.0e-12);
        assert_eq!(element.name(), coil.designation());
        assert_eq!(element.impedance(0.0).im, 0.0);
    }
}
