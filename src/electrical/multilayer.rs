//! Multilayer inductance from pairwise layer coupling.
//!
//! The total is `L = L₁ · (N + 2·Σ K)`, where `L₁` is the single-layer
//! inductance and the sum runs over every pair of layers (Zhao, "A new
//! calculation for designing multilayer planar spiral inductors", EDN 2010;
//! Liu et al., "Design and optimization of PCB inductors for WPT", 2014).
//! All layers are assumed cumulatively coupled.
//!
//! The coupling factor `K(n, s)` is a fit valid for roughly 5–20 turns and
//! 0.75–2 mm layer separation. Outside that box the result is still returned,
//! with no accuracy claim; see [`coupling_in_validated_range`].

use std::ops::RangeInclusive;

use crate::math::Scalar;

/// Turn counts the coupling fit was derived for.
pub const COUPLING_VALID_TURNS: RangeInclusive<Scalar> = 5.0..=20.0;
/// Layer separations (mm) the coupling fit was derived for.
pub const COUPLING_VALID_SPACING_MM: RangeInclusive<Scalar> = 0.75..=2.0;

/// Centre-to-centre distance (mm) between neighbouring copper layers of a
/// board `pcb_thickness` thick with `layers` equally spaced foils. Zero for a
/// single layer.
#[must_use]
pub fn layer_spacing(layers: u32, pcb_thickness: Scalar, copper_thickness: Scalar) -> Scalar {
    if layers > 1 {
        (pcb_thickness - copper_thickness) / Scalar::from(layers - 1)
    } else {
        0.0
    }
}

/// Coupling factor between two identical spirals `spacing_mm` apart.
#[must_use]
pub fn coupling_factor(turns: Scalar, spacing_mm: Scalar) -> Scalar {
    let s = spacing_mm;
    let spacing_poly = 0.184 * s.powi(3) - 0.525 * s.powi(2) + 1.038 * s + 1.001;
    let turns_poly = 1.67 * turns.powi(2) - 5.84 * turns + 65.0;
    turns.powi(2) / (spacing_poly * turns_poly * 0.64)
}

/// Σ K over all layer pairs of a uniform stack: `(N − i)` pairs sit `i` gaps apart.
#[must_use]
pub fn uniform_mutual_sum(turns: Scalar, layers: u32, spacing_mm: Scalar) -> Scalar {
    (1..layers)
        .map(|gaps| Scalar::from(layers - gaps) * coupling_factor(turns, Scalar::from(gaps) * spacing_mm))
        .sum()
}

/// Σ K over explicitly listed pair separations (mm).
#[must_use]
pub fn pairwise_mutual_sum<I>(turns: Scalar, separations: I) -> Scalar
where
    I: IntoIterator<Item = Scalar>,
{
    separations
        .into_iter()
        .map(|s| coupling_factor(turns, s))
        .sum()
}

/// Factor applied to the single-layer inductance: `N + 2·Σ K`.
#[inline]
#[must_use]
pub fn inductance_multiplier(layers: u32, mutual_sum: Scalar) -> Scalar {
    Scalar::from(layers) + 2.0 * mutual_sum
}

/// Whether the coupling fit was derived for this turn count and separation.
#[must_use]
pub fn coupling_in_validated_range(turns: Scalar, spacing_mm: Scalar) -> bool {
    COUPLING_VALID_TURNS.contains(&turns) && COUPLING_VALID_SPACING_MM.contains(&spacing_mm)
}
