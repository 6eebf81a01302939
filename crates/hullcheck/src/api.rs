//! Curated internal API (UNSTABLE).
//!
//! A flat re-export surface for the CLI, benches and examples. Breaking
//! changes are allowed; prefer these names over deep module paths.

// Hull constructions
pub use crate::dnc::{
    convex_hull_divide_and_conquer, convex_hull_divide_and_conquer_with_rng, find_bridge,
    lower_hull, upper_hull, Bridge,
};
pub use crate::monotone::{chains as monotone_chains, convex_hull_monotone};
// Primitives and selection
pub use crate::geometry::{cross, intersection_y, orient, orientation, Orientation, Point};
pub use crate::select::{find_median, select, SelectKey};
// Validation
pub use crate::validate::{compare_hulls, cross_validate, hull_contains, CrossCheck, HullComparison};
// Datasets
pub use crate::datasets::{generate as generate_dataset, Dataset, DatasetError, ReplayToken};
// Config and errors
pub use crate::cfg::{HullCfg, CONTAIN_EPS, DEFAULT_SHUFFLE_SEED, MATCH_EPS};
pub use crate::error::HullError;
