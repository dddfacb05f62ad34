//! Archimedean spirals: the radius shrinks by one spacing per turn.
//!
//! Polygon spirals are the circular spiral sampled at `sides` points per turn,
//! using the circumscribed circle so the polygon's inscribed circle matches
//! the requested diameter.

use std::f64::consts::{PI, TAU};

use crate::context::PolygonOrientation;
use crate::diameter;
use crate::geometry::{TraceGeometry, Winding};
use crate::math::{Scalar, P2};
use crate::shape::Shape;

/// Diameter of the circle circumscribing a regular `sides`-gon whose inscribed diameter is `inscribed`.
#[inline]
#[must_use]
pub fn circumscribed(sides: u32, inscribed: Scalar) -> Scalar {
    inscribed / (PI / Scalar::from(sides)).cos()
}

/// Radius of the trace centre line after turning through `angle` radians.
#[inline]
#[must_use]
pub fn spiral_radius(start_radius: Scalar, angle: Scalar, spacing: Scalar) -> Scalar {
    start_radius - (angle / TAU) * spacing
}

/// Point at `angle` along a spiral that starts below the centre.
///
/// `phase` rotates the whole spiral about the centre; the counter-clockwise
/// branch rotates the other way so that both windings start on the same point.
fn polar_point(angle: Scalar, phase: Scalar, radius: Scalar, winding: Winding) -> P2 {
    match winding {
        Winding::Clockwise => {
            let theta = angle + phase;
            P2::new(-theta.sin() * radius, -theta.cos() * radius)
        }
        Winding::CounterClockwise => {
            let theta = angle - phase;
            P2::new(theta.sin() * radius, -theta.cos() * radius)
        }
    }
}

/// Point on the circular spiral after `angle` radians.
#[must_use]
pub fn circle_position(angle: Scalar, geometry: &TraceGeometry, winding: Winding) -> P2 {
    let start = (geometry.outer_diameter - geometry.trace_width) / 2.0;
    let radius = spiral_radius(start, angle, geometry.spacing());
    polar_point(angle, 0.0, radius, winding)
}

/// Length of the circular spiral after `angle` radians: the circumference of
/// the average of the outer and simple inner diameters, times the turn count.
#[must_use]
pub fn circle_length(angle: Scalar, geometry: &TraceGeometry) -> Scalar {
    let turns = angle / TAU;
    let inner = diameter::simple_inner_diameter(Shape::Circle, turns, geometry);
    PI * turns * (geometry.outer_diameter + inner) / 2.0
}

/// Corner `step` of a regular polygon spiral with `sides` corners per turn.
#[must_use]
pub fn polygon_position(
    sides: u32,
    step: u64,
    geometry: &TraceGeometry,
    winding: Winding,
    orientation: PolygonOrientation,
) -> P2 {
    let n = Scalar::from(sides);
    let outer = geometry.circumscribed(sides);
    let angle = step as Scalar * TAU / n;
    let start = circumscribed(sides, geometry.outer_diameter - geometry.trace_width) / 2.0;
    let radius = spiral_radius(start, angle, outer.spacing());
    let phase = match orientation {
        PolygonOrientation::FlatEdge => PI / n,
        PolygonOrientation::Vertex => 0.0,
    };
    polar_point(angle, phase, radius, winding)
}

/// Length of the polygon spiral after `step` corners.
///
/// Each chord is approximated by `2·sin(π/n)` times the mean radius of its
/// end points; because the radius falls linearly the sum collapses to the
/// perimeter of the average polygon.
#[must_use]
pub fn polygon_length(sides: u32, step: u64, geometry: &TraceGeometry) -> Scalar {
    let n = Scalar::from(sides);
    let steps = step as Scalar;
    let outer = geometry.circumscribed(sides);
    let inner = diameter::concentric_inner_diameter(steps / n, &outer);
    steps * (PI / n).sin() * (outer.outer_diameter + inner) / 2.0
}
