//! Criterion benches for median-of-medians selection.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullcheck::api::{find_median, generate_dataset, select, Dataset, ReplayToken};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    for n in [1_000usize, 10_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let keys: Vec<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();
        group.bench_with_input(BenchmarkId::new("f64_median", n), &keys, |b, keys| {
            b.iter(|| select(keys, n / 2 + 1).unwrap())
        });
        // heavy ties exercise the equal band of the partition
        let ties: Vec<f64> = (0..n).map(|i| (i % 7) as f64).collect();
        group.bench_with_input(BenchmarkId::new("f64_ties", n), &ties, |b, ties| {
            b.iter(|| select(ties, n / 3 + 1).unwrap())
        });
    }
    group.bench_function(BenchmarkId::new("find_median_points", 10_000), |b| {
        b.iter_batched(
            || generate_dataset(Dataset::Disk, 10_000, ReplayToken::new(3, 1)).unwrap(),
            |pts| {
                let _ = find_median(&pts);
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
