//! Benchmarks for the recompute hot path.
//!
//! Run with: cargo bench
//!
//! One interactive cycle regenerates, perturbs and filters a full grid, so
//! these measure the per-event cost a host UI pays on every slider move.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use harmolab_core::filters::{apply_filter, design_butterworth_lowpass, filtfilt, FilterSpec};
use harmolab_core::grid::TimeGrid;
use harmolab_core::noise::generate_noise;
use harmolab_core::signal::generate_harmonic;

/// Grid lengths around the default dashboard size (10 s at 100 Hz).
const GRID_LENS: &[usize] = &[250, 1000, 4000];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for &n in GRID_LENS {
        let grid = TimeGrid::new(n as f64 / 100.0, 100.0);
        group.bench_with_input(BenchmarkId::new("harmonic", n), &grid, |b, grid| {
            b.iter(|| generate_harmonic(black_box(grid), 1.0, 1.0, 0.0));
        });
        group.bench_function(BenchmarkId::new("noise", n), |b| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| generate_noise(black_box(n), 0.0, 0.1, &mut rng));
        });
    }
    group.finish();
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");
    for &n in GRID_LENS {
        let grid = TimeGrid::new(n as f64 / 100.0, 100.0);
        let xs = generate_harmonic(&grid, 1.0, 1.0, 0.0);
        let sections = design_butterworth_lowpass(5, 1.0, 100.0).unwrap();

        group.bench_with_input(BenchmarkId::new("filtfilt_order5", n), &xs, |b, xs| {
            b.iter(|| filtfilt(black_box(&sections), black_box(xs)));
        });
        group.bench_with_input(BenchmarkId::new("moving_average_15", n), &xs, |b, xs| {
            let spec = FilterSpec::MovingAverage { window: 15 };
            b.iter(|| apply_filter(black_box(xs), 100.0, &spec));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_filters);
criterion_main!(benches);
