//! Synthetic point sets for hull experiments.
//!
//! Families
//! - `RotatedSquare`: the unit square's corners plus `n - 4` uniform points in
//!   it, rotated by a random angle about a random center, then shuffled. The
//!   hull is exactly the four rotated corners.
//! - `Uniform`: `n` uniform points in `[0, 1]²` (hull size grows like log n).
//! - `Disk`: `n` uniform points in the disk of radius 1/2 centered at
//!   `(1/2, 1/2)`, by rejection (hull size grows like n^(1/3)).
//! - `Circle`: `n` points on that disk's boundary (every point is a vertex).
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//! a dataset can be regenerated from its token alone.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::geometry::Point;

/// Error type for dataset parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    InvalidParams { reason: String },
}

impl DatasetError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid dataset params: {reason}"),
        }
    }
}

impl std::error::Error for DatasetError {}

/// Point-set family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dataset {
    RotatedSquare,
    Uniform,
    Disk,
    Circle,
}

impl Dataset {
    pub const ALL: [Dataset; 4] = [
        Dataset::RotatedSquare,
        Dataset::Uniform,
        Dataset::Disk,
        Dataset::Circle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dataset::RotatedSquare => "square",
            Dataset::Uniform => "uniform",
            Dataset::Disk => "disk",
            Dataset::Circle => "circle",
        }
    }

    /// Smallest `n` the family accepts.
    pub fn min_points(self) -> usize {
        match self {
            Dataset::RotatedSquare => 4,
            _ => 1,
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                DatasetError::invalid(format!(
                    "unknown dataset {s:?} (expected square, uniform, disk or circle)"
                ))
            })
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

const RADIUS: f64 = 0.5;

#[inline]
fn center() -> Point {
    Point::new(0.5, 0.5)
}

fn unit_square_point<R: Rng + ?Sized>(rng: &mut R) -> Point {
    Point::new(rng.gen::<f64>(), rng.gen::<f64>())
}

fn rotated_square<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point> {
    let pivot = unit_square_point(rng);
    let angle = rng.gen::<f64>() * std::f64::consts::TAU;
    let (s, c) = angle.sin_cos();
    let rotate = |p: Point| {
        let d = p - pivot;
        pivot + Point::new(d.x * c - d.y * s, d.x * s + d.y * c)
    };
    let mut pts: Vec<Point> = (0..n - 4).map(|_| rotate(unit_square_point(rng))).collect();
    for corner in [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
    ] {
        pts.push(rotate(corner));
    }
    pts.shuffle(rng);
    pts
}

fn disk<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point> {
    let mut pts = Vec::with_capacity(n);
    while pts.len() < n {
        let p = unit_square_point(rng);
        if (p - center()).norm() <= RADIUS {
            pts.push(p);
        }
    }
    pts
}

fn circle<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point> {
    (0..n)
        .map(|_| {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            center() + Point::new(th.cos(), th.sin()) * RADIUS
        })
        .collect()
}

/// Draw `n` points of family `dataset` from the RNG derived from `tok`.
pub fn generate(
    dataset: Dataset,
    n: usize,
    tok: ReplayToken,
) -> Result<Vec<Point>, DatasetError> {
    if n < dataset.min_points() {
        return Err(DatasetError::invalid(format!(
            "{dataset} needs at least {} points, got {n}",
            dataset.min_points()
        )));
    }
    let mut rng = tok.to_std_rng();
    let pts = match dataset {
        Dataset::RotatedSquare => rotated_square(n, &mut rng),
        Dataset::Uniform => (0..n).map(|_| unit_square_point(&mut rng)).collect(),
        Dataset::Disk => disk(n, &mut rng),
        Dataset::Circle => circle(n, &mut rng),
    };
    Ok(pts)
}
