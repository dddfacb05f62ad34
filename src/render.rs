//! Lazy point sequences along a spiral layer.

use std::iter::FusedIterator;

use crate::context::PolygonOrientation;
use crate::errors::{require_positive, CoilResult};
use crate::geometry::{TraceGeometry, Winding};
use crate::math::{Scalar, P2};
use crate::shape::Shape;

/// Ordered points (mm) from step 0 to the last step of one layer, inclusive.
///
/// Discrete shapes yield every corner. The circle is sampled every
/// `increment` radians, with the final point pinned to the exact end angle.
/// Cloning or calling [`RenderPath::restart`] replays the same sequence.
#[derive(Debug, Clone)]
pub struct RenderPath {
    shape: Shape,
    geometry: TraceGeometry,
    winding: Winding,
    orientation: PolygonOrientation,
    end: Scalar,
    increment: Scalar,
    count: usize,
    index: usize,
}

impl RenderPath {
    /// Path over `steps` steps. `resolution` only applies to continuous shapes.
    pub fn new(
        shape: Shape,
        geometry: TraceGeometry,
        steps: Scalar,
        winding: Winding,
        orientation: PolygonOrientation,
        resolution: Scalar,
    ) -> CoilResult<Self> {
        let steps = require_positive("steps", steps)?;
        let (end, increment) = if shape.is_discrete() {
            (steps.round(), 1.0)
        } else {
            (steps, require_positive("angular_resolution", resolution)?)
        };
        // a tail shorter than a millionth of a step is absorbed into the last point
        let intervals = (end / increment - 1.0e-6).ceil().max(1.0) as usize;
        Ok(Self {
            shape,
            geometry,
            winding,
            orientation,
            end,
            increment,
            count: intervals + 1,
            index: 0,
        })
    }

    /// Step between consecutive points (corners, or radians for the circle).
    #[must_use]
    pub const fn increment(&self) -> Scalar {
        self.increment
    }

    /// Rewinds to the first point.
    pub fn restart(&mut self) {
        self.index = 0;
    }

    fn step_at(&self, index: usize) -> Scalar {
        if index + 1 >= self.count {
            self.end
        } else {
            index as Scalar * self.increment
        }
    }
}

impl Iterator for RenderPath {
    type Item = P2;

    fn next(&mut self) -> Option<P2> {
        if self.index >= self.count {
            return None;
        }
        let step = self.step_at(self.index);
        self.index += 1;
        Some(
            self.shape
                .position(step, &self.geometry, self.winding, self.orientation),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index.min(self.count);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RenderPath {}

impl FusedIterator for RenderPath {}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::polyline_length;

    fn geometry() -> TraceGeometry {
        TraceGeometry::new(40.0, 0.15, 0.9)
    }

    fn path(shape: Shape, turns: Scalar, resolution: Scalar) -> RenderPath {
        RenderPath::new(
            shape,
            geometry(),
            turns * shape.steps_per_turn(),
            Winding::Clockwise,
            PolygonOrientation::FlatEdge,
            resolution,
        )
        .unwrap()
    }

    #[test]
    fn discrete_path_visits_every_corner() {
        let p = path(Shape::Square, 9.0, 0.1);
        assert_eq!(p.len(), 37);
        let pts: Vec<_> = p.collect();
        assert_eq!(pts[0], Shape::Square.position(0.0, &geometry(), Winding::Clockwise, PolygonOrientation::FlatEdge));
    }

    #[test]
    fn circle_path_ends_on_the_last_angle() {
        let res = 5.0_f64.to_radians();
        let pts: Vec<_> = path(Shape::Circle, 9.0, res).collect();
        assert_eq!(pts.len(), 9 * 72 + 1);
        let end = Shape::Circle.position(9.0 * TAU, &geometry(), Winding::Clockwise, PolygonOrientation::FlatEdge);
        assert_relative_eq!(pts[pts.len() - 1].x, end.x, epsilon = 1.0e-12);
        assert_relative_eq!(pts[pts.len() - 1].y, end.y, epsilon = 1.0e-12);
    }

    #[test]
    fn uneven_resolution_keeps_a_short_tail() {
        let res = 7.0_f64.to_radians();
        let p = path(Shape::Circle, 1.0, res);
        // 360 / 7 = 51.4 intervals, rounded up
        assert_eq!(p.len(), 53);
    }

    #[test]
    fn restart_replays_the_sequence() {
        let mut p = path(Shape::HEXAGON, 2.0, 0.1);
        let first: Vec<_> = p.by_ref().collect();
        assert_eq!(p.next(), None);
        p.restart();
        let second: Vec<_> = p.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn circle_samples_match_closed_form_length() {
        let res = 1.0_f64.to_radians();
        let walked = polyline_length(path(Shape::Circle, 9.0, res));
        let closed = Shape::Circle.length(9.0 * TAU, &geometry());
        assert_relative_eq!(walked, closed, max_relative = 1.0e-4);
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let result = RenderPath::new(
            Shape::Circle,
            geometry(),
            TAU,
            Winding::Clockwise,
            PolygonOrientation::FlatEdge,
            0.0,
        );
        assert!(result.is_err());
    }
}
