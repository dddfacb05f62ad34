use crate::constants::mm_to_m;
use crate::math::Scalar;

/// Sheet resistance `ρ / t` (Ω) of a copper foil `copper_thickness_mm` thick.
#[inline]
#[must_use]
pub fn resistivity_constant(resistivity: Scalar, copper_thickness_mm: Scalar) -> Scalar {
    resistivity / mm_to_m(copper_thickness_mm)
}

/// DC resistance (Ω) of a trace: `(ρ / t) · length / width`.
#[inline]
#[must_use]
pub fn trace_resistance(resistivity_constant: Scalar, length_mm: Scalar, trace_width_mm: Scalar) -> Scalar {
    resistivity_constant * (mm_to_m(length_mm) / mm_to_m(trace_width_mm))
}

/// Series resistance of identical layers. Vias and the return trace are not modelled.
#[inline]
#[must_use]
pub fn total_resistance(single_layer: Scalar, layers: u32) -> Scalar {
    single_layer * Scalar::from(layers)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::COPPER_RESISTIVITY;

    #[test]
    fn one_square_of_foil() {
        // a trace as long as it is wide is one square: R = ρ / t
        let k = resistivity_constant(COPPER_RESISTIVITY, 0.035);
        assert_relative_eq!(trace_resistance(k, 2.0, 2.0), COPPER_RESISTIVITY / 35.0e-6, max_relative = 1.0e-12);
    }

    #[test]
    fn layers_add_in_series() {
        assert_relative_eq!(total_resistance(0.25, 4), 1.0, epsilon = 1.0e-12);
    }
}
