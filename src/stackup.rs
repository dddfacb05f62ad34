//! Board stack-up: alternating copper and dielectric layers.

use crate::errors::{require_positive, CoilError, CoilResult};
use crate::math::Scalar;

/// Layer thicknesses (mm) from one board face to the other, copper first and last.
///
/// Entry `2·k` is copper layer `k`; odd entries are the dielectric between
/// neighbouring copper layers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Scalar>", into = "Vec<Scalar>"))]
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStack {
    thicknesses: Vec<Scalar>,
}

impl LayerStack {
    /// Validates a copper/dielectric sequence.
    pub fn new(thicknesses: Vec<Scalar>) -> CoilResult<Self> {
        if thicknesses.len() % 2 == 0 {
            return Err(CoilError::invalid(
                "layer_stack",
                thicknesses.len() as Scalar,
                "must alternate copper and dielectric, starting and ending with copper",
            ));
        }
        for &t in &thicknesses {
            require_positive("layer_stack", t)?;
        }
        Ok(Self { thicknesses })
    }

    /// `layers` equal copper foils spread evenly through a board `pcb_thickness` thick.
    pub fn uniform(layers: u32, pcb_thickness: Scalar, copper_thickness: Scalar) -> CoilResult<Self> {
        if layers == 0 {
            return Err(CoilError::invalid("layers", 0.0, "at least one copper layer is required"));
        }
        require_positive("copper_thickness", copper_thickness)?;
        if layers == 1 {
            return Self::new(vec![copper_thickness]);
        }
        let copper = Scalar::from(layers) * copper_thickness;
        let dielectric = (pcb_thickness - copper) / Scalar::from(layers - 1);
        if dielectric.is_nan() || dielectric <= 0.0 {
            return Err(CoilError::invalid(
                "pcb_thickness",
                pcb_thickness,
                "leaves no room for dielectric between the copper layers",
            ));
        }
        let mut thicknesses = Vec::with_capacity(2 * layers as usize - 1);
        thicknesses.push(copper_thickness);
        for _ in 1..layers {
            thicknesses.push(dielectric);
            thicknesses.push(copper_thickness);
        }
        Self::new(thicknesses)
    }

    /// Raw thickness sequence.
    #[must_use]
    pub fn thicknesses(&self) -> &[Scalar] {
        &self.thicknesses
    }

    /// Number of copper layers.
    #[must_use]
    pub fn copper_layers(&self) -> u32 {
        (self.thicknesses.len() / 2 + 1) as u32
    }

    /// Thickness of copper layer `layer`, if it exists.
    #[must_use]
    pub fn copper_thickness(&self, layer: usize) -> Option<Scalar> {
        self.thicknesses.get(2 * layer).copied()
    }

    /// Copper thicknesses from top to bottom.
    pub fn copper_thicknesses(&self) -> impl Iterator<Item = Scalar> + '_ {
        self.thicknesses.iter().step_by(2).copied()
    }

    /// Board thickness.
    #[must_use]
    pub fn total_thickness(&self) -> Scalar {
        self.thicknesses.iter().sum()
    }

    /// Centre-to-centre distance between copper layers `a` and `b`.
    #[must_use]
    pub fn separation(&self, a: usize, b: usize) -> Option<Scalar> {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let span = self.thicknesses.get(2 * lo..=2 * hi)?;
        let outer_halves = (span[0] + span[span.len() - 1]) / 2.0;
        Some(span.iter().sum::<Scalar>() - outer_halves)
    }

    /// Separations of every unordered copper pair.
    #[must_use]
    pub fn pair_separations(&self) -> Vec<Scalar> {
        let n = self.copper_layers() as usize;
        (0..n)
            .flat_map(|a| ((a + 1)..n).map(move |b| (a, b)))
            .filter_map(|(a, b)| self.separation(a, b))
            .collect()
    }

    /// Separations of neighbouring copper pairs.
    #[must_use]
    pub fn adjacent_separations(&self) -> Vec<Scalar> {
        let n = self.copper_layers() as usize;
        (1..n).filter_map(|b| self.separation(b - 1, b)).collect()
    }
}

impl TryFrom<Vec<Scalar>> for LayerStack {
    type Error = CoilError;

    fn try_from(thicknesses: Vec<Scalar>) -> Result<Self, Self::Error> {
        Self::new(thicknesses)
    }
}

impl From<LayerStack> for Vec<Scalar> {
    fn from(stack: LayerStack) -> Self {
        stack.thicknesses
    }
}
