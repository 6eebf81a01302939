//! Point type and orientation predicates shared by both hull algorithms.

use nalgebra::Vector2;
use std::cmp::Ordering;

/// A point in the plane. Also used as a displacement vector (`b - a`).
pub type Point = Vector2<f64>;

/// Turn direction of an ordered triple of points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

/// Signed area of the parallelogram spanned by vectors `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// True when `a → b → c` turns clockwise or the three are collinear.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> bool {
    cross(b - a, c - a) <= 0.0
}

/// Three-way version of [`orient`].
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let s = cross(b - a, c - a);
    if s < 0.0 {
        Orientation::Clockwise
    } else if s > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// y-value at abscissa `x` of the line through `p1` and `p2`.
///
/// A vertical line (`p1.x == p2.x`) only meets abscissa `x` when `x == p1.x`;
/// there the top endpoint is returned, anywhere else `-inf`.
pub fn intersection_y(x: f64, p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    if dx == 0.0 {
        return if x == p1.x {
            p1.y.max(p2.y)
        } else {
            f64::NEG_INFINITY
        };
    }
    (p2.y - p1.y) / dx * (x - p1.x) + p1.y
}

/// Lexicographic (x, then y) comparison. Inputs are checked finite upstream.
#[inline]
pub(crate) fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Mirror across the x-axis.
#[inline]
pub(crate) fn flip_y(p: Point) -> Point {
    Point::new(p.x, -p.y)
}
