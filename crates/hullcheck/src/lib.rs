//! Planar convex hulls computed twice and checked against each other.
//!
//! Two independent constructions live here:
//! - `monotone`: Andrew's monotone chain (sort + two stack sweeps).
//! - `dnc`: divide-and-conquer over a median x-pivot, finding the upper-hull
//!   bridge across the pivot and recursing on both sides.
//!
//! `validate` compares their vertex sets, `datasets` produces reproducible
//! inputs, `select` is the median-of-medians quickselect used for the pivot.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; equality is exact coordinate equality.
//! - Collinear boundary points are not hull vertices; duplicates collapse.
//! - Selection orders points by their x-projection only (`select::SelectKey`).

pub mod api;
pub mod cfg;
pub mod datasets;
pub mod dnc;
pub mod error;
pub mod geometry;
pub mod monotone;
pub mod select;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::HullCfg;
pub use dnc::{convex_hull_divide_and_conquer, convex_hull_divide_and_conquer_with_rng};
pub use error::HullError;
pub use geometry::{cross, intersection_y, orient, orientation, Orientation, Point};
pub use monotone::convex_hull_monotone;
pub use select::{find_median, select, SelectKey};
pub use validate::{compare_hulls, hull_contains, HullComparison};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::datasets::{generate, Dataset, DatasetError, ReplayToken};
    pub use crate::dnc::{convex_hull_divide_and_conquer, convex_hull_divide_and_conquer_with_rng};
    pub use crate::geometry::{cross, orient, orientation, Orientation, Point};
    pub use crate::monotone::convex_hull_monotone;
    pub use crate::validate::{compare_hulls, hull_contains, HullComparison};
    pub use crate::{HullCfg, HullError};
}
