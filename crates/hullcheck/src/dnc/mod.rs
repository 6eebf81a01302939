//! Divide-and-conquer hull over a median x-pivot.
//!
//! Purpose
//! - Second, independent hull construction used to cross-check the monotone
//!   chain.
//!
//! Model
//! - `upper_hull(points)`: pick the pivot `x_m` with the median selector, find
//!   the upper-hull edge (bridge) crossing `x = x_m`, drop every point strictly
//!   between the bridge endpoints (they lie below it), and recurse on the left
//!   part (`x <= left.x`) and the right part (`x >= right.x`).
//! - The lower hull is the upper hull of the y-mirrored points, mirrored back.
//! - The bridge search visits points in a shuffled order drawn from an injected
//!   RNG. The order changes running time only, never the result.
//!
//! Notes
//! - Each recursion level allocates its own partitions; no state is shared
//!   between sibling calls.
//! - Only strict vertices are emitted (collinear boundary points are dropped),
//!   matching `monotone`.

mod bridge;

pub use bridge::{find_bridge, Bridge};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::cfg::DEFAULT_SHUFFLE_SEED;
use crate::error::{check_points, HullError};
use crate::geometry::{cmp_xy, flip_y, Point};
use crate::select::find_median;

/// Upper chain of at most two points: x order, a shared column keeps its top.
fn small_chain(points: &[Point]) -> Vec<Point> {
    match *points {
        [a, b] if a.x == b.x => vec![if b.y > a.y { b } else { a }],
        [a, b] if b.x < a.x => vec![b, a],
        _ => points.to_vec(),
    }
}

/// Upper hull vertices of `points`, strictly increasing in x.
///
/// The first vertex is the top of the leftmost column and the last one the top
/// of the rightmost column. An empty input yields an empty chain.
pub fn upper_hull<R: Rng + ?Sized>(
    points: &[Point],
    rng: &mut R,
) -> Result<Vec<Point>, HullError> {
    if points.len() <= 2 {
        return Ok(small_chain(points));
    }
    let (mut lo_i, mut hi_i) = (0, 0);
    for (i, p) in points.iter().enumerate() {
        if cmp_xy(p, &points[lo_i]).is_lt() {
            lo_i = i;
        }
        if cmp_xy(p, &points[hi_i]).is_gt() {
            hi_i = i;
        }
    }
    let (leftmost, rightmost) = (points[lo_i], points[hi_i]);
    if leftmost.x == rightmost.x {
        return Ok(vec![rightmost]);
    }

    let pivot_x = find_median(points)?.x;
    let mut rest: Vec<Point> = points
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != lo_i && i != hi_i)
        .map(|(_, p)| *p)
        .collect();
    rest.shuffle(rng);
    let mut scan = Vec::with_capacity(points.len());
    scan.push(leftmost);
    scan.push(rightmost);
    scan.extend(rest);

    let bridge = find_bridge(&scan, pivot_x);
    tracing::trace!(
        n = points.len(),
        pivot_x,
        left = ?bridge.left,
        right = ?bridge.right,
        "bridge"
    );

    let lo: Vec<Point> = points
        .iter()
        .copied()
        .filter(|p| p.x <= bridge.left.x)
        .collect();
    let hi: Vec<Point> = points
        .iter()
        .copied()
        .filter(|p| p.x >= bridge.right.x)
        .collect();

    let mut out = upper_hull(&lo, rng)?;
    out.push(bridge.left);
    out.push(bridge.right);
    out.extend(upper_hull(&hi, rng)?);
    out.dedup();
    Ok(out)
}

/// Lower hull vertices, strictly increasing in x (upper hull of the mirror image).
pub fn lower_hull<R: Rng + ?Sized>(
    points: &[Point],
    rng: &mut R,
) -> Result<Vec<Point>, HullError> {
    let mirrored: Vec<Point> = points.iter().copied().map(flip_y).collect();
    Ok(upper_hull(&mirrored, rng)?.into_iter().map(flip_y).collect())
}

/// Convex hull by divide and conquer, with the scan order drawn from `rng`.
///
/// Vertices come out clockwise: the upper chain left→right, then the lower
/// chain right→left. Extreme points shared by both chains appear once.
pub fn convex_hull_divide_and_conquer_with_rng<R: Rng + ?Sized>(
    points: &[Point],
    rng: &mut R,
) -> Result<Vec<Point>, HullError> {
    check_points(points)?;
    let mut hull = upper_hull(points, rng)?;
    let mut lower = lower_hull(points, rng)?;
    lower.reverse();
    if !lower.is_empty() && lower.first() == hull.last() {
        lower.remove(0);
    }
    if lower.last() == hull.first() {
        lower.pop();
    }
    tracing::debug!(
        n = points.len(),
        upper = hull.len(),
        lower = lower.len(),
        "dnc hull"
    );
    hull.extend(lower);
    hull.dedup();
    if hull.len() > 1 && hull.first() == hull.last() {
        hull.pop();
    }
    Ok(hull)
}

/// Convex hull by divide and conquer with the default scan seed.
pub fn convex_hull_divide_and_conquer(points: &[Point]) -> Result<Vec<Point>, HullError> {
    let mut rng = StdRng::seed_from_u64(DEFAULT_SHUFFLE_SEED);
    convex_hull_divide_and_conquer_with_rng(points, &mut rng)
}
