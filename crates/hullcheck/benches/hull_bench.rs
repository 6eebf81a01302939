//! Criterion benches for both hull constructions across dataset families.
//!
//! - `monotone`: sort + two sweeps.
//! - `dnc`: median-pivot divide and conquer (default shuffle seed).
//! - `cross_validate`: both plus the vertex-set comparison.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullcheck::api::{
    convex_hull_divide_and_conquer, convex_hull_monotone, cross_validate, generate_dataset,
    Dataset, HullCfg, ReplayToken,
};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn bench_hulls(c: &mut Criterion) {
    for dataset in Dataset::ALL {
        let mut group = c.benchmark_group(format!("hull/{dataset}"));
        for n in SIZES {
            let pts = generate_dataset(dataset, n, ReplayToken::new(42, n as u64)).unwrap();
            group.bench_with_input(BenchmarkId::new("monotone", n), &pts, |b, pts| {
                b.iter(|| convex_hull_monotone(pts).unwrap())
            });
            group.bench_with_input(BenchmarkId::new("dnc", n), &pts, |b, pts| {
                b.iter(|| convex_hull_divide_and_conquer(pts).unwrap())
            });
        }
        group.finish();
    }
}

fn bench_cross_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_validate");
    let cfg = HullCfg::default();
    group.bench_function(BenchmarkId::new("uniform", 10_000), |b| {
        b.iter_batched(
            || ReplayToken { seed: 7, index: 0 },
            |mut tok| {
                tok.index = tok.index.wrapping_add(1);
                let pts = generate_dataset(Dataset::Uniform, 10_000, tok).unwrap();
                let _ = cross_validate(&pts, &cfg);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_hulls, bench_cross_validate);
criterion_main!(benches);
