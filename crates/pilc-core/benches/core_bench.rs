//! Criterion benchmarks for pilc-core
//!
//! Run with: cargo bench -p pilc-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pilc_core::{ESeries, FilterFamily, FilterSpec, match_standard, sweep, synthesize};

const CUTOFF_HZ: f64 = 10e6;
const ORDERS: &[usize] = &[3, 5, 7, 9];

fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("Synthesis");

    for &order in ORDERS {
        for family in FilterFamily::ALL {
            let spec = FilterSpec {
                family,
                order,
                cutoff_hz: CUTOFF_HZ,
                impedance_ohm: 50.0,
                ripple_db: Some(0.5),
            };
            group.bench_with_input(BenchmarkId::new(family.name(), order), &spec, |b, spec| {
                b.iter(|| black_box(synthesize(black_box(spec))));
            });
        }
    }

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sweep");

    for &points in &[51usize, 201, 1001] {
        for family in FilterFamily::ALL {
            group.bench_with_input(BenchmarkId::new(family.name(), points), &points, |b, &n| {
                b.iter(|| black_box(sweep(family, CUTOFF_HZ, 7, Some(0.5), black_box(n))));
            });
        }
    }

    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("ESeries");

    // 1.41 forces the two-part search on every series
    for series in ESeries::ALL {
        group.bench_function(BenchmarkId::new("match_with_parallel", series.name()), |b| {
            b.iter(|| black_box(match_standard(black_box(1.41e-10), series)));
        });
        group.bench_function(BenchmarkId::new("match_exact", series.name()), |b| {
            b.iter(|| black_box(match_standard(black_box(4.7e-10), series)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_synthesis, bench_sweep, bench_match);
criterion_main!(benches);
