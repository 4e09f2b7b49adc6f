//! Benchmarks for burndown aggregation throughput

use burndown::generator::{generate_intervals, GeneratorConfig};
use burndown::{compute_burndown, IntervalSet};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};

fn dataset(count: usize) -> IntervalSet {
    let config = GeneratorConfig::new().with_anchor(1_700_000_000 * 1_000_000_000);
    let mut rng = StdRng::seed_from_u64(42);
    generate_intervals(count, &config, &mut rng)
}

fn benchmark_resolutions(c: &mut Criterion) {
    let mut group = c.benchmark_group("burndown_resolution");
    let set = dataset(100_000);
    group.throughput(Throughput::Elements(set.len() as u64));

    for unit in ["minutes", "hours", "days", "weeks"] {
        group.bench_with_input(BenchmarkId::from_parameter(unit), &unit, |b, unit| {
            b.iter(|| {
                compute_burndown(
                    unit,
                    1,
                    black_box(&set.start_timestamps),
                    black_box(&set.end_timestamps),
                )
            })
        });
    }

    group.finish();
}

fn benchmark_interval_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("burndown_intervals");

    for count in [1_000usize, 10_000, 1_000_000] {
        let set = dataset(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &set, |b, set| {
            b.iter(|| compute_burndown("hours", 1, &set.start_timestamps, &set.end_timestamps))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_resolutions, benchmark_interval_counts);
criterion_main!(benches);
