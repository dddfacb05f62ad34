//! Physical constants and unit conversions used by the coil models.
//!
//! ## Accuracy
//!
//! μ₀ is the CODATA 2018 measured value with 12 significant figures. It differs
//! from the pre-2019 defined value 4π × 10⁻⁷ H/m by roughly 5 × 10⁻¹⁰ relative,
//! far below the accuracy of any empirical inductance fit used here.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - IPC-2221 copper weight convention: 1 oz/ft² ≈ 34.8 µm foil.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Vacuum permeability μ₀ in henries per meter (H/m).
/// Approximate value: 1.25663706212 × 10⁻⁶ H/m (12 significant figures).
pub const VACUUM_PERMEABILITY: Scalar = 1.256_637_062_12e-6;
/// Electrical resistivity ρ of annealed PCB copper at room temperature in ohm meters (Ω·m).
pub const COPPER_RESISTIVITY: Scalar = 1.72e-8;
/// Foil thickness of one ounce (per square foot) of copper, in millimeters.
pub const COPPER_MM_PER_OZ: Scalar = 0.0348;
/// Default angular step used when sampling continuous (circular) spirals: 5°.
pub const DEFAULT_ANGULAR_RESOLUTION: Scalar = 5.0 * PI / 180.0;
/// All lengths enter the crate in millimeters; multiply by this to get meters.
pub const MM_TO_M: Scalar = 1.0e-3;

/// Converts a length in millimeters to meters.
#[inline]
#[must_use]
pub fn mm_to_m(mm: Scalar) -> Scalar {
    mm * MM_TO_M
}

/// Returns the foil thickness in millimeters for a copper weight given in ounces.
#[inline]
#[must_use]
pub fn copper_oz_to_mm(oz: Scalar) -> Scalar {
    oz * COPPER_MM_PER_OZ
}

/// Returns the copper weight in ounces for a foil thickness given in millimeters.
#[inline]
#[must_use]
pub fn copper_mm_to_oz(mm: Scalar) -> Scalar {
    mm / COPPER_MM_PER_OZ
}

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn permeability_matches_legacy_definition() {
        assert_relative_eq!(VACUUM_PERMEABILITY, 4.0 * PI * 1.0e-7, max_relative = 1.0e-9);
    }

    #[test]
    fn copper_weight_conversion_roundtrips() {
        assert_relative_eq!(copper_oz_to_mm(1.0), 0.0348, epsilon = 1.0e-15);
        assert_relative_eq!(copper_mm_to_oz(copper_oz_to_mm(2.0)), 2.0, epsilon = 1.0e-12);
    }

    #[test]
    fn default_resolution_is_five_degrees() {
        assert_relative_eq!(DEFAULT_ANGULAR_RESOLUTION.to_degrees(), 5.0, epsilon = 1.0e-12);
    }
}
