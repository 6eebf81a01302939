//! Andrew's monotone chain.
//!
//! Sort once by (x, y), then sweep left→right for the upper chain and
//! right→left for the lower chain, popping every point that does not make a
//! strict clockwise turn. Collinear boundary points are therefore dropped.

use crate::error::{check_points, HullError};
use crate::geometry::{cmp_xy, orientation, Orientation, Point};

/// One stack sweep over `pts` in the given order; keeps strict clockwise turns.
fn sweep<'a, I>(pts: I, cap: usize) -> Vec<Point>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut chain: Vec<Point> = Vec::with_capacity(cap);
    for &c in pts {
        while chain.len() >= 2
            && orientation(chain[chain.len() - 2], chain[chain.len() - 1], c)
                != Orientation::Clockwise
        {
            chain.pop();
        }
        chain.push(c);
    }
    chain
}

/// Upper and lower chains of an already sorted, duplicate-free point list.
///
/// Both chains run from one extreme to the other: upper left→right, lower
/// right→left. They share their first and last points.
pub fn chains(sorted: &[Point]) -> (Vec<Point>, Vec<Point>) {
    let upper = sweep(sorted.iter(), sorted.len());
    let lower = sweep(sorted.iter().rev(), sorted.len());
    (upper, lower)
}

/// Convex hull vertices in clockwise order, starting at the lexicographically
/// smallest point. The first vertex is not repeated at the end.
pub fn convex_hull_monotone(points: &[Point]) -> Result<Vec<Point>, HullError> {
    check_points(points)?;
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(cmp_xy);
    pts.dedup();

    let (mut hull, lower) = chains(&pts);
    if lower.len() > 2 {
        hull.extend_from_slice(&lower[1..lower.len() - 1]);
    }
    Ok(hull)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn unit_square_clockwise_from_origin() {
        let pts = vec![
            vector![1.0, 1.0],
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![0.5, 0.5],
        ];
        let hull = convex_hull_monotone(&pts).unwrap();
        assert_eq!(
            hull,
            vec![
                vector![0.0, 0.0],
                vector![0.0, 1.0],
                vector![1.0, 1.0],
                vector![1.0, 0.0],
            ]
        );
    }

    #[test]
    fn collinear_points_are_pruned() {
        let pts = vec![vector![1.0, 1.0], vector![2.0, 2.0], vector![0.0, 0.0]];
        let hull = convex_hull_monotone(&pts).unwrap();
        assert_eq!(hull, vec![vector![0.0, 0.0], vector![2.0, 2.0]]);

        // Midpoints on the square's edges are not vertices either.
        let mut grid = Vec::new();
        for i in 0..3 {
            for j in 0..3 {
                grid.push(vector![f64::from(i), f64::from(j)]);
            }
        }
        assert_eq!(convex_hull_monotone(&grid).unwrap().len(), 4);
    }

    #[test]
    fn single_point_and_duplicates() {
        let p = vector![5.0, 5.0];
        assert_eq!(convex_hull_monotone(&[p]).unwrap(), vec![p]);
        assert_eq!(convex_hull_monotone(&[p, p, p]).unwrap(), vec![p]);

        let q = vector![6.0, 5.0];
        assert_eq!(convex_hull_monotone(&[q, p, q, p]).unwrap(), vec![p, q]);
    }

    #[test]
    fn vertical_segment() {
        let pts: Vec<Point> = (0..6).map(|i| vector![2.0, f64::from(i)]).collect();
        assert_eq!(
            convex_hull_monotone(&pts).unwrap(),
            vec![vector![2.0, 0.0], vector![2.0, 5.0]]
        );
    }

    #[test]
    fn chains_turn_strictly_clockwise() {
        let pts: Vec<Point> = (0..40)
            .map(|i| {
                let t = f64::from(i) * 0.37;
                vector![t.cos() * (1.0 + 0.1 * t.sin()), t.sin()]
            })
            .collect();
        let mut sorted = pts.clone();
        sorted.sort_by(cmp_xy);
        sorted.dedup();
        let (upper, lower) = chains(&sorted);
        for chain in [&upper, &lower] {
            for w in chain.windows(3) {
                assert_eq!(orientation(w[0], w[1], w[2]), Orientation::Clockwise);
            }
        }
        assert_eq!(upper.first(), lower.last());
        assert_eq!(upper.last(), lower.first());
    }

    #[test]
    fn rejects_empty_and_nan() {
        assert!(matches!(
            convex_hull_monotone(&[]),
            Err(HullError::InvalidInput { .. })
        ));
        assert!(convex_hull_monotone(&[vector![f64::NAN, 0.0]]).is_err());
    }
}
