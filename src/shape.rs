//! Spiral shape families and their empirical inductance coefficient tables.
//!
//! The coefficient sets are the Greenhouse/Wheeler/monomial fits tabulated in
//! Mohan, Hershenson, Boyd & Lee, "Simple Accurate Expressions for Planar
//! Spiral Inductances" (IEEE JSSC, 1999). Circular spirals have no monomial fit.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::context::PolygonOrientation;
use crate::errors::{CoilError, CoilResult};
use crate::geometry::{polar, square, TraceGeometry, Winding};
use crate::math::{Scalar, P2};

/// Names of the single-layer inductance approximations.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InductanceFormula {
    /// Modified Wheeler expression.
    Wheeler,
    /// Data-fitted monomial expression.
    Monomial,
    /// Current-sheet (Greenhouse) approximation.
    #[cfg_attr(feature = "serde", serde(alias = "cur_sheet", alias = "greenhouse"))]
    CurrentSheet,
}

impl InductanceFormula {
    /// Every formula, in table order.
    pub const ALL: [Self; 3] = [Self::Wheeler, Self::Monomial, Self::CurrentSheet];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wheeler => "wheeler",
            Self::Monomial => "monomial",
            Self::CurrentSheet => "current-sheet",
        }
    }

    /// Number of coefficients the formula consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Wheeler => 2,
            Self::Monomial => 6,
            Self::CurrentSheet => 4,
        }
    }
}

impl fmt::Display for InductanceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InductanceFormula {
    type Err = CoilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wheeler" => Ok(Self::Wheeler),
            "monomial" => Ok(Self::Monomial),
            "current-sheet" | "current_sheet" | "cur_sheet" | "greenhouse" => {
                Ok(Self::CurrentSheet)
            }
            _ => Err(CoilError::UnknownFormula(s.to_owned())),
        }
    }
}

/// Coefficient tuple for one formula; the arity is fixed by the variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coefficients {
    /// `K1, K2`.
    Wheeler([Scalar; 2]),
    /// `β, α1..α5`, with β stored scaled by 10³.
    Monomial([Scalar; 6]),
    /// `c1..c4`.
    CurrentSheet([Scalar; 4]),
}

impl Coefficients {
    /// Formula these coefficients belong to.
    #[must_use]
    pub const fn formula(&self) -> InductanceFormula {
        match self {
            Self::Wheeler(_) => InductanceFormula::Wheeler,
            Self::Monomial(_) => InductanceFormula::Monomial,
            Self::CurrentSheet(_) => InductanceFormula::CurrentSheet,
        }
    }

    /// Raw coefficient values.
    #[must_use]
    pub fn values(&self) -> &[Scalar] {
        match self {
            Self::Wheeler(c) => c,
            Self::Monomial(c) => c,
            Self::CurrentSheet(c) => c,
        }
    }
}

struct FormulaTable {
    wheeler: Option<[Scalar; 2]>,
    monomial: Option<[Scalar; 6]>,
    current_sheet: Option<[Scalar; 4]>,
}

const SQUARE_TABLE: FormulaTable = FormulaTable {
    wheeler: Some([2.34, 2.75]),
    monomial: Some([1.62, -1.21, -0.147, 2.40, 1.78, -0.030]),
    current_sheet: Some([1.27, 2.07, 0.18, 0.13]),
};

const HEXAGON_TABLE: FormulaTable = FormulaTable {
    wheeler: Some([2.33, 3.82]),
    monomial: Some([1.28, -1.24, -0.174, 2.47, 1.77, -0.049]),
    current_sheet: Some([1.09, 2.23, 0.00, 0.17]),
};

const OCTAGON_TABLE: FormulaTable = FormulaTable {
    wheeler: Some([2.25, 3.55]),
    monomial: Some([1.33, -1.21, -0.163, 2.43, 1.75, -0.049]),
    current_sheet: Some([1.07, 2.29, 0.00, 0.19]),
};

const CIRCLE_TABLE: FormulaTable = FormulaTable {
    wheeler: Some([2.23, 3.45]),
    monomial: None,
    current_sheet: Some([1.00, 2.46, 0.00, 0.20]),
};

/// Corner count of a polygon spiral that has a published coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sides(u32);

impl Sides {
    /// Six corners.
    pub const HEXAGON: Self = Self(6);
    /// Eight corners.
    pub const OCTAGON: Self = Self(8);

    /// Number of corners per turn.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Closed set of spiral families.
///
/// Square is not a four-sided [`Shape::Polygon`]: its corner walk
/// and length sum differ materially from the circumscribed-circle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Axis-aligned square spiral, four corners per turn.
    Square,
    /// Continuous Archimedean spiral.
    Circle,
    /// Regular polygon spiral sampled from a circumscribed circle.
    Polygon(Sides),
}

impl Shape {
    /// Hexagonal spiral.
    pub const HEXAGON: Self = Self::Polygon(Sides::HEXAGON);
    /// Octagonal spiral.
    pub const OCTAGON: Self = Self::Polygon(Sides::OCTAGON);
    /// Every supported shape.
    pub const ALL: [Self; 4] = [Self::Square, Self::HEXAGON, Self::OCTAGON, Self::Circle];

    /// Polygon spiral with `sides` corners; only corner counts with a coefficient table exist.
    pub fn polygon(sides: u32) -> CoilResult<Self> {
        match sides {
            6 => Ok(Self::HEXAGON),
            8 => Ok(Self::OCTAGON),
            _ => Err(CoilError::invalid(
                "sides",
                Scalar::from(sides),
                "no inductance coefficients are published for this corner count",
            )),
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Polygon(Sides(6)) => "hexagon",
            Self::Polygon(Sides(8)) => "octagon",
            Self::Polygon(_) => "polygon",
        }
    }

    /// Steps in one full turn: corners for discrete shapes, radians for the circle.
    #[must_use]
    pub fn steps_per_turn(self) -> Scalar {
        match self {
            Self::Square => 4.0,
            Self::Circle => TAU,
            Self::Polygon(sides) => Scalar::from(sides.get()),
        }
    }

    /// Whether positions are sampled at integer corners (true) or need an angular resolution.
    #[must_use]
    pub const fn is_discrete(self) -> bool {
        !matches!(self, Self::Circle)
    }

    fn table(self) -> &'static FormulaTable {
        match self {
            Self::Square => &SQUARE_TABLE,
            Self::Circle => &CIRCLE_TABLE,
            Self::Polygon(Sides(8)) => &OCTAGON_TABLE,
            Self::Polygon(_) => &HEXAGON_TABLE,
        }
    }

    /// Coefficients for `formula`, or `None` when the formula is not valid for this shape.
    #[must_use]
    pub fn coefficients(self, formula: InductanceFormula) -> Option<Coefficients> {
        let table = self.table();
        match formula {
            InductanceFormula::Wheeler => table.wheeler.map(Coefficients::Wheeler),
            InductanceFormula::Monomial => table.monomial.map(Coefficients::Monomial),
            InductanceFormula::CurrentSheet => table.current_sheet.map(Coefficients::CurrentSheet),
        }
    }

    /// Formulas that have coefficients for this shape.
    pub fn formulas(self) -> impl Iterator<Item = InductanceFormula> {
        InductanceFormula::ALL
            .into_iter()
            .filter(move |f| self.coefficients(*f).is_some())
    }

    /// Position after `step` steps along the spiral (corners, or radians for the circle).
    ///
    /// Discrete shapes truncate a fractional `step` to the preceding corner.
    #[must_use]
    pub fn position(
        self,
        step: Scalar,
        geometry: &TraceGeometry,
        winding: Winding,
        orientation: PolygonOrientation,
    ) -> P2 {
        match self {
            Self::Square => square::position(corner_index(step), geometry, winding),
            Self::Circle => polar::circle_position(step, geometry, winding),
            Self::Polygon(sides) => polar::polygon_position(
                sides.get(),
                corner_index(step),
                geometry,
                winding,
                orientation,
            ),
        }
    }

    /// Trace length in millimeters after `step` steps, evaluated in closed form.
    #[must_use]
    pub fn length(self, step: Scalar, geometry: &TraceGeometry) -> Scalar {
        match self {
            Self::Square => square::length(corner_index(step), geometry),
            Self::Circle => polar::circle_length(step, geometry),
            Self::Polygon(sides) => polar::polygon_length(sides.get(), corner_index(step), geometry),
        }
    }
}

fn corner_index(step: Scalar) -> u64 {
    // `as` saturates NaN and negatives to zero
    step.floor() as u64
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = CoilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "circle" | "circular" => Ok(Self::Circle),
            "hexagon" => Ok(Self::HEXAGON),
            "octagon" => Ok(Self::OCTAGON),
            _ => Err(CoilError::UnknownShape(s.to_owned())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Shape {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Shape {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_a_formula() {
        for shape in Shape::ALL {
            assert!(shape.formulas().count() > 0, "{shape} has no formulas");
        }
    }

    #[test]
    fn coefficient_arity_is_fixed_per_formula() {
        for shape in Shape::ALL {
            for formula in shape.formulas() {
                let coeff = shape.coefficients(formula).unwrap();
                assert_eq!(coeff.values().len(), formula.arity());
                assert_eq!(coeff.formula(), formula);
            }
        }
    }

    #[test]
    fn circle_has_no_monomial_fit() {
        assert!(Shape::Circle.coefficients(InductanceFormula::Monomial).is_none());
        assert!(Shape::Square.coefficients(InductanceFormula::Monomial).is_some());
    }

    #[test]
    fn names_roundtrip_through_parse() {
        for shape in Shape::ALL {
            assert_eq!(shape.name().parse::<Shape>().unwrap(), shape);
        }
        for formula in InductanceFormula::ALL {
            assert_eq!(formula.name().parse::<InductanceFormula>().unwrap(), formula);
        }
        assert_eq!("cur_sheet".parse::<InductanceFormula>().unwrap(), InductanceFormula::CurrentSheet);
        assert!("triangle".parse::<Shape>().is_err());
    }

    #[test]
    fn polygon_constructor_only_accepts_tabulated_corner_counts() {
        assert_eq!(Shape::polygon(6).unwrap(), Shape::HEXAGON);
        assert_eq!(Shape::polygon(8).unwrap(), Shape::OCTAGON);
        assert!(Shape::polygon(3).is_err());
        assert!(Shape::polygon(4).is_err());
    }

    #[test]
    fn discreteness_and_steps() {
        assert!(Shape::Square.is_discrete());
        assert!(!Shape::Circle.is_discrete());
        assert_eq!(Shape::OCTAGON.steps_per_turn(), 8.0);
        assert_eq!(Shape::Circle.steps_per_turn(), TAU);
    }
}
