//! Print hull sizes for each dataset family and whether both algorithms agree.
//!
//! Usage:
//!   cargo run -p hullcheck --example compare_datasets -- 5000

use hullcheck::api::{cross_validate, generate_dataset, Dataset, HullCfg, ReplayToken};

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1000);
    let cfg = HullCfg::default();
    for (i, dataset) in Dataset::ALL.into_iter().enumerate() {
        let pts = generate_dataset(dataset, n, ReplayToken::new(2025, i as u64)).unwrap();
        let cc = cross_validate(&pts, &cfg).unwrap();
        println!(
            "{dataset:>8}: n={n}, monotone={}, dnc={}, match={}",
            cc.monotone.len(),
            cc.dnc.len(),
            cc.comparison.is_match()
        );
    }
}
