//! k-th order statistic by quickselect with a median-of-medians pivot.
//!
//! - `select(list, k)`: k-th smallest (1-indexed) by `SelectKey::key`.
//! - `find_median(list)`: midpoint of the `n/2`-th and `(n/2+1)`-th elements.
//!   For odd `n` this sits below the true median; the divide-and-conquer hull
//!   only needs a pivot that splits the x-range, not an exact median.
//!
//! Points are selected by their x-projection. Two points with equal x compare
//! equal here and nowhere else.

use std::cmp::Ordering;

use crate::error::HullError;
use crate::geometry::Point;

/// Scalar projection used for ordering during selection.
pub trait SelectKey: Copy {
    fn key(&self) -> f64;
    /// Average of two elements (used by `find_median`).
    fn midpoint(a: Self, b: Self) -> Self;
}

impl SelectKey for f64 {
    #[inline]
    fn key(&self) -> f64 {
        *self
    }
    #[inline]
    fn midpoint(a: Self, b: Self) -> Self {
        (a + b) / 2.0
    }
}

impl SelectKey for Point {
    #[inline]
    fn key(&self) -> f64 {
        self.x
    }
    #[inline]
    fn midpoint(a: Self, b: Self) -> Self {
        (a + b) / 2.0
    }
}

/// Largest list sorted directly instead of partitioned.
const SMALL: usize = 5;

#[inline]
fn cmp_key<T: SelectKey>(a: &T, b: &T) -> Ordering {
    a.key().total_cmp(&b.key())
}

fn sort_small<T: SelectKey>(list: &mut [T]) {
    list.sort_by(cmp_key);
}

/// Approximate median: medians of groups of five, recursively.
fn median_of_medians<T: SelectKey>(list: &[T]) -> T {
    if list.len() <= SMALL {
        let mut tmp = list.to_vec();
        sort_small(&mut tmp);
        return tmp[tmp.len() / 2];
    }
    let medians: Vec<T> = list.chunks(SMALL).map(median_of_medians).collect();
    median_of_medians(&medians)
}

/// Pre: `1 <= k <= list.len()`.
fn quick_select<T: SelectKey>(mut list: Vec<T>, k: usize) -> T {
    debug_assert!(k >= 1 && k <= list.len());
    if list.len() <= SMALL {
        sort_small(&mut list);
        return list[k - 1];
    }
    let pivot = median_of_medians(&list);
    let mut less = Vec::new();
    let mut greater = Vec::new();
    let mut equal = 0usize;
    for x in list {
        match cmp_key(&x, &pivot) {
            Ordering::Less => less.push(x),
            Ordering::Equal => equal += 1,
            Ordering::Greater => greater.push(x),
        }
    }
    if k <= less.len() {
        quick_select(less, k)
    } else if k <= less.len() + equal {
        pivot
    } else {
        let skip = less.len() + equal;
        quick_select(greater, k - skip)
    }
}

/// k-th smallest element (1-indexed) of `list` under `SelectKey` order.
pub fn select<T: SelectKey>(list: &[T], k: usize) -> Result<T, HullError> {
    if list.is_empty() {
        return Err(HullError::invalid("cannot select from an empty list"));
    }
    if k == 0 || k > list.len() {
        return Err(HullError::invalid(format!(
            "rank {k} out of range 1..={}",
            list.len()
        )));
    }
    Ok(quick_select(list.to_vec(), k))
}

/// Lower-biased median: average of ranks `n/2` and `n/2 + 1`.
pub fn find_median<T: SelectKey>(list: &[T]) -> Result<T, HullError> {
    match list.len() {
        0 => Err(HullError::invalid("cannot take the median of an empty list")),
        1 => Ok(list[0]),
        n => {
            let m1 = quick_select(list.to_vec(), n / 2);
            let m2 = quick_select(list.to_vec(), n / 2 + 1);
            Ok(T::midpoint(m1, m2))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn select_small_and_large() {
        let v = [5.0, 1.0, 4.0];
        assert_eq!(select(&v, 1).unwrap(), 1.0);
        assert_eq!(select(&v, 3).unwrap(), 5.0);

        let big: Vec<f64> = (0..101).rev().map(f64::from).collect();
        assert_eq!(select(&big, 1).unwrap(), 0.0);
        assert_eq!(select(&big, 51).unwrap(), 50.0);
        assert_eq!(select(&big, 101).unwrap(), 100.0);
    }

    #[test]
    fn select_rejects_empty_and_bad_rank() {
        let empty: [f64; 0] = [];
        assert!(matches!(
            select(&empty, 1),
            Err(HullError::InvalidInput { .. })
        ));
        assert!(find_median(&empty).is_err());
        assert!(select(&[1.0, 2.0], 0).is_err());
        assert!(select(&[1.0, 2.0], 3).is_err());
    }

    #[test]
    fn equal_keys_terminate() {
        let v = vec![7.0; 1000];
        assert_eq!(select(&v, 500).unwrap(), 7.0);
        assert_eq!(find_median(&v).unwrap(), 7.0);
    }

    #[test]
    fn median_is_lower_biased_for_odd_lengths() {
        assert_eq!(find_median(&[3.0, 1.0, 2.0]).unwrap(), 1.5);
        assert_eq!(find_median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
        assert_eq!(find_median(&[9.0]).unwrap(), 9.0);
    }

    #[test]
    fn points_are_ordered_by_x_only() {
        let pts: Vec<Point> = (0..20)
            .map(|i| Point::new(f64::from(i % 10), f64::from(i)))
            .collect();
        // x values 0..9 each twice; rank 3 has x = 1 regardless of y
        assert_eq!(select(&pts, 3).unwrap().x, 1.0);
        let m = find_median(&pts).unwrap();
        assert_eq!(m.x, 4.5);
    }

    #[test]
    fn median_of_medians_is_an_element() {
        let v: Vec<f64> = (0..37).map(|i| f64::from((i * 17) % 37)).collect();
        let m = median_of_medians(&v);
        assert!(v.contains(&m));
        let below = v.iter().filter(|&&x| x < m).count();
        let above = v.iter().filter(|&&x| x > m).count();
        assert!(below >= 6 && above >= 6, "below={below} above={above}");
    }

    proptest! {
        #[test]
        fn select_matches_sorted(
            raw in proptest::collection::vec(-50i32..50, 1..300),
            frac in 0.0f64..1.0,
        ) {
            let v: Vec<f64> = raw.iter().map(|&i| f64::from(i)).collect();
            let k = 1 + ((v.len() - 1) as f64 * frac) as usize;
            let mut sorted = v.clone();
            sorted.sort_by(f64::total_cmp);
            prop_assert_eq!(select(&v, k).unwrap(), sorted[k - 1]);
        }

        #[test]
        fn median_lies_within_range(v in proptest::collection::vec(-1e6f64..1e6, 1..200)) {
            let m = find_median(&v).unwrap();
            let lo = v.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(m >= lo && m <= hi);
        }
    }
}
