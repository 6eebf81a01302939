//! Cross-checks between hull outputs.
//!
//! - `compare_hulls`: vertex-set equality up to a per-coordinate tolerance,
//!   reporting what each side is missing.
//! - `hull_contains`: "on or inside" test against a convex vertex cycle.
//! - `cross_validate`: run both algorithms on one point set and compare.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cfg::HullCfg;
use crate::dnc::convex_hull_divide_and_conquer_with_rng;
use crate::error::HullError;
use crate::geometry::{cmp_xy, cross, Point};
use crate::monotone::convex_hull_monotone;

/// Outcome of comparing two vertex sets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HullComparison {
    pub size_a: usize,
    pub size_b: usize,
    /// Vertices of `b` with no match in `a`.
    pub missing_from_a: Vec<Point>,
    /// Vertices of `a` with no match in `b`.
    pub missing_from_b: Vec<Point>,
}

impl HullComparison {
    pub fn is_match(&self) -> bool {
        self.size_a == self.size_b
            && self.missing_from_a.is_empty()
            && self.missing_from_b.is_empty()
    }
}

#[inline]
fn close(p: &Point, q: &Point, eps: f64) -> bool {
    (p.x - q.x).abs() <= eps && (p.y - q.y).abs() <= eps
}

/// Points of `from` without a partner in `sorted_to` (sorted by x).
fn unmatched(from: &[Point], sorted_to: &[Point], eps: f64) -> Vec<Point> {
    from.iter()
        .copied()
        .filter(|p| {
            let start = sorted_to.partition_point(|q| q.x < p.x - eps);
            !sorted_to[start..]
                .iter()
                .take_while(|q| q.x <= p.x + eps)
                .any(|q| close(p, q, eps))
        })
        .collect()
}

/// Compare two hulls as vertex sets; order does not matter.
pub fn compare_hulls(a: &[Point], b: &[Point], eps: f64) -> HullComparison {
    let mut sa = a.to_vec();
    let mut sb = b.to_vec();
    sa.sort_by(cmp_xy);
    sb.sort_by(cmp_xy);
    HullComparison {
        size_a: a.len(),
        size_b: b.len(),
        missing_from_a: unmatched(b, &sa, eps),
        missing_from_b: unmatched(a, &sb, eps),
    }
}

/// Distance from `p` to the segment `[a, b]`.
fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// True if `p` lies on or inside the convex vertex cycle `hull` (within `eps`).
///
/// Works for either orientation and for degenerate hulls (point, segment).
pub fn hull_contains(hull: &[Point], p: Point, eps: f64) -> bool {
    match hull.len() {
        0 => false,
        1 => (p - hull[0]).norm() <= eps,
        2 => segment_distance(p, hull[0], hull[1]) <= eps,
        n => {
            let twice_area: f64 = (0..n).map(|i| cross(hull[i], hull[(i + 1) % n])).sum();
            let sign = if twice_area < 0.0 { -1.0 } else { 1.0 };
            (0..n).all(|i| {
                let a = hull[i];
                let b = hull[(i + 1) % n];
                let edge = b - a;
                // interior side has sign * cross >= 0
                sign * cross(edge, p - a) >= -eps * edge.norm()
            })
        }
    }
}

/// Both hulls of one point set plus their comparison.
#[derive(Clone, Debug)]
pub struct CrossCheck {
    pub monotone: Vec<Point>,
    pub dnc: Vec<Point>,
    pub comparison: HullComparison,
}

/// Run both algorithms on `points` and compare their vertex sets.
pub fn cross_validate(points: &[Point], cfg: &HullCfg) -> Result<CrossCheck, HullError> {
    let monotone = convex_hull_monotone(points)?;
    let mut rng = StdRng::seed_from_u64(cfg.shuffle_seed);
    let dnc = convex_hull_divide_and_conquer_with_rng(points, &mut rng)?;
    let comparison = compare_hulls(&monotone, &dnc, cfg.match_eps);
    if !comparison.is_match() {
        tracing::debug!(
            monotone = comparison.size_a,
            dnc = comparison.size_b,
            missing_from_monotone = comparison.missing_from_a.len(),
            missing_from_dnc = comparison.missing_from_b.len(),
            "hulls differ"
        );
    }
    Ok(CrossCheck {
        monotone,
        dnc,
        comparison,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square() -> Vec<Point> {
        vec![
            vector![0.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 0.0],
        ]
    }

    #[test]
    fn compare_ignores_order_and_reports_missing() {
        let a = square();
        let mut b = a.clone();
        b.reverse();
        assert!(compare_hulls(&a, &b, 0.0).is_match());

        b[0] = vector![2.0, 2.0];
        let c = compare_hulls(&a, &b, 1e-12);
        assert!(!c.is_match());
        assert_eq!(c.missing_from_a, vec![vector![2.0, 2.0]]);
        assert_eq!(c.missing_from_b, vec![vector![1.0, 0.0]]);
    }

    #[test]
    fn compare_respects_tolerance_and_sizes() {
        let a = square();
        let b: Vec<Point> = a.iter().map(|p| p + vector![1e-13, -1e-13]).collect();
        assert!(compare_hulls(&a, &b, 1e-12).is_match());
        assert!(!compare_hulls(&a, &b, 0.0).is_match());

        let mut c = a.clone();
        c.push(a[0]);
        let r = compare_hulls(&a, &c, 0.0);
        assert!(r.missing_from_a.is_empty() && r.missing_from_b.is_empty());
        assert!(!r.is_match());
    }

    #[test]
    fn contains_both_orientations() {
        let cw = square();
        let mut ccw = cw.clone();
        ccw.reverse();
        for hull in [&cw, &ccw] {
            assert!(hull_contains(hull, vector![0.5, 0.5], 0.0));
            assert!(hull_contains(hull, vector![1.0, 0.5], 0.0));
            assert!(hull_contains(hull, vector![0.0, 0.0], 0.0));
            assert!(!hull_contains(hull, vector![1.1, 0.5], 1e-9));
            assert!(!hull_contains(hull, vector![-0.5, -0.5], 1e-9));
        }
    }

    #[test]
    fn contains_degenerate_hulls() {
        assert!(!hull_contains(&[], vector![0.0, 0.0], 1.0));
        assert!(hull_contains(&[vector![1.0, 1.0]], vector![1.0, 1.0], 0.0));
        let seg = [vector![0.0, 0.0], vector![2.0, 2.0]];
        assert!(hull_contains(&seg, vector![1.0, 1.0], 1e-12));
        assert!(!hull_contains(&seg, vector![1.0, 0.0], 1e-3));
        assert!(!hull_contains(&seg, vector![3.0, 3.0], 1e-3));
    }

    #[test]
    fn cross_validate_square_with_interior() {
        let mut pts = square();
        pts.push(vector![0.25, 0.75]);
        pts.push(vector![0.5, 0.5]);
        let cc = cross_validate(&pts, &HullCfg::default()).unwrap();
        assert!(cc.comparison.is_match());
        assert_eq!(cc.monotone.len(), 4);
        assert!(cross_validate(&[], &HullCfg::default()).is_err());
    }
}
