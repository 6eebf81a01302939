//! Tolerances and seeds (internal defaults plus a small config struct).
//!
//! Policy
//! - The hull algorithms themselves use exact sign tests and need no epsilon.
//! - Tolerances only appear where hulls are compared or points are tested for
//!   containment.

/// Seed of the bridge-search shuffle when the caller does not supply an RNG.
pub const DEFAULT_SHUFFLE_SEED: u64 = 0x5eed_0f_b41d;

/// Coordinate tolerance when matching vertices of two hulls.
pub const MATCH_EPS: f64 = 1e-12;

/// Slack for "on or inside" containment tests.
pub const CONTAIN_EPS: f64 = 1e-9;

/// Hull run configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Seed for the divide-and-conquer scan order.
    pub shuffle_seed: u64,
    /// Per-coordinate tolerance used by `validate::compare_hulls`.
    pub match_eps: f64,
    /// Slack used by `validate::hull_contains`.
    pub contain_eps: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            shuffle_seed: DEFAULT_SHUFFLE_SEED,
            match_eps: MATCH_EPS,
            contain_eps: CONTAIN_EPS,
        }
    }
}
