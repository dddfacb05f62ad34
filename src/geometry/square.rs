//! Square spiral: the path visits four corners per turn, starting at the
//! lower-left and walking inwards one spacing per full turn.

use crate::geometry::{TraceGeometry, Winding};
use crate::math::{Scalar, P2};

/// Corner `step` of the square spiral.
///
/// The start point sits one spacing below the lower-left corner so the first
/// vertical run is one spacing longer than the rest. The counter-clockwise
/// walk is the clockwise walk mirrored across the 45° line through that start
/// point, so both windings begin at the same coordinate.
#[must_use]
pub fn position(step: u64, geometry: &TraceGeometry, winding: Winding) -> P2 {
    let spacing = geometry.spacing();
    let half = (geometry.outer_diameter - geometry.trace_width) / 2.0;
    let step = step as i64;
    let corner = step.rem_euclid(4);
    let x_sign = if corner >= 2 { 1.0 } else { -1.0 };
    let y_sign = if corner == 1 || corner == 2 { 1.0 } else { -1.0 };
    let x = x_sign * (half - step.div_euclid(4) as Scalar * spacing);
    let y = y_sign * (half - (step - 1).div_euclid(4) as Scalar * spacing);
    match winding {
        Winding::Clockwise => P2::new(x, y),
        Winding::CounterClockwise => P2::new(y + spacing, x - spacing),
    }
}

/// Path length from corner 0 to corner `step`.
///
/// Horizontal runs shrink by one spacing each: `n·w − s·n(n−1)/2` for `n` runs.
/// Vertical runs follow the same series shifted by one run because the first
/// one is a spacing longer. Once the spiral runs out of room the result goes
/// negative; that is returned as is.
#[must_use]
pub fn length(step: u64, geometry: &TraceGeometry) -> Scalar {
    let spacing = geometry.spacing();
    let span = geometry.outer_diameter - geometry.trace_width;
    let horizontal = (step / 2) as Scalar;
    let vertical = ((step + 1) / 2) as Scalar;
    let widths = horizontal * span - spacing * horizontal * (horizontal - 1.0) / 2.0;
    let heights = vertical * span - spacing * (vertical * (vertical - 1.0) / 2.0 - vertical);
    widths + heights
}
