//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Point2;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Planar point in millimeters, as produced by the spiral renderers.
pub type P2 = Point2<Scalar>;
/// Primary complex scalar type used for impedances.
pub type CScalar = num_complex::Complex<Scalar>;

/// Sums the Euclidean distances between consecutive points of a polyline.
#[must_use]
pub fn polyline_length<I>(points: I) -> Scalar
where
    I: IntoIterator<Item = P2>,
{
    let mut points = points.into_iter();
    let Some(mut previous) = points.next() else {
        return 0.0;
    };
    let mut total = 0.0;
    for point in points {
        total += nalgebra::distance(&previous, &point);
        previous = point;
    }
    total
}

/// Returns true when `value` lies within `tolerance` of an integer.
#[inline]
#[must_use]
pub fn is_near_integer(value: Scalar, tolerance: Scalar) -> bool {
    (value - value.round()).abs() <= tolerance
}
