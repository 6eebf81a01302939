//! Upper-hull bridge across a vertical pivot line.
//!
//! The bridge is the upper-hull edge crossing `x = pivot_x`, i.e. the line
//! through two input points that has every point on or below it and the
//! lowest possible height at the pivot. It is found incrementally: visit the
//! points one by one; whenever a point rises strictly above the current
//! bridge line, the new bridge passes through it and its partner is the
//! best supporting point among those already visited.
//!
//! All comparisons are orientation tests. "Highest crossing at the pivot"
//! among lines through a fixed point `p` on one side of the pivot is the same
//! as "steepest towards the pivot", which `orientation` decides without
//! dividing.

use crate::geometry::{intersection_y, orientation, Orientation, Point};

/// An upper-hull edge with `left.x < right.x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bridge {
    pub left: Point,
    pub right: Point,
    /// Height of the edge's line at the pivot abscissa.
    pub y_at_pivot: f64,
}

/// Candidate line through the newly visited point and one partner.
#[derive(Clone, Copy, Debug)]
struct TangentCandidate {
    y_at_pivot: f64,
    left: Point,
    right: Point,
}

impl TangentCandidate {
    fn new(pivot_x: f64, a: Point, b: Point) -> Self {
        let (left, right) = if a.x < b.x { (a, b) } else { (b, a) };
        Self {
            y_at_pivot: intersection_y(pivot_x, left, right),
            left,
            right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// `c` strictly above the line through `l` and `r` (`l.x < r.x`).
#[inline]
fn above(l: Point, r: Point, c: Point) -> bool {
    orientation(l, r, c) == Orientation::CounterClockwise
}

/// Best line through `p` supported by a point of `seen` on the pivot side of `p`.
///
/// Returns `None` only when `seen` has no point strictly on that side.
fn tangent_through(p: Point, seen: &[Point], pivot_x: f64) -> Option<TangentCandidate> {
    let side = if p.x < pivot_x {
        Side::Right
    } else if p.x > pivot_x || !seen.iter().any(|q| q.x > p.x) {
        Side::Left
    } else {
        Side::Right
    };

    let mut best: Option<Point> = None;
    for &q in seen {
        let eligible = match side {
            Side::Right => q.x > p.x,
            Side::Left => q.x < p.x,
        };
        if !eligible {
            continue;
        }
        let b = match best {
            None => {
                best = Some(q);
                continue;
            }
            Some(b) => b,
        };
        let (steeper, farther) = match side {
            Side::Right => (above(p, b, q), q.x > b.x),
            Side::Left => (above(b, p, q), q.x < b.x),
        };
        let collinear = orientation(p, b, q) == Orientation::Collinear;
        if steeper || (collinear && farther) {
            best = Some(q);
        }
    }
    best.map(|q| TangentCandidate::new(pivot_x, p, q))
}

/// Find the bridge over `pivot_x`.
///
/// Pre: `scan.len() >= 2`, `scan[0]` is a leftmost and `scan[1]` a rightmost
/// point, `scan[0].x < scan[1].x`, and `pivot_x` lies between them. The
/// remaining order is the visiting order (shuffle it for expected speed).
pub fn find_bridge(scan: &[Point], pivot_x: f64) -> Bridge {
    let mut cur = TangentCandidate::new(pivot_x, scan[0], scan[1]);
    for k in 2..scan.len() {
        let p = scan[k];
        if !above(cur.left, cur.right, p) {
            continue;
        }
        if let Some(next) = tangent_through(p, &scan[..k], pivot_x) {
            tracing::trace!(
                k,
                y_before = cur.y_at_pivot,
                y_after = next.y_at_pivot,
                "bridge raised"
            );
            cur = next;
        }
    }

    // Points on the bridge line beyond its endpoints are the real vertices.
    let (mut left, mut right) = (cur.left, cur.right);
    for &q in scan {
        if orientation(cur.left, cur.right, q) != Orientation::Collinear {
            continue;
        }
        if q.x < left.x {
            left = q;
        } else if q.x > right.x {
            right = q;
        }
    }
    Bridge {
        left,
        right,
        y_at_pivot: intersection_y(pivot_x, left, right),
    }
}
