//! Smoothing benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Individual 1D filters over a noisy sine signal
//! - Window-size scaling for the windowed averages
//! - Continuous versus list smoothing of the same chain
//! - Two-dimensional gaze-like traces through naive 2D filters

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::Normal;
use smoothie::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a sine wave with Gaussian noise.
fn generate_sine_signal(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();

    (0..size)
        .map(|i| (i as f64 * 10.0 / size as f64).sin() + noise_dist.sample(&mut rng))
        .collect()
}

/// Generate a 2D trace of fixations separated by saccades, with jitter.
fn generate_gaze_trace(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let jitter = Normal::new(0.0, 1.5).unwrap();

    let mut xs = Vec::with_capacity(size);
    let mut ys = Vec::with_capacity(size);
    let (mut cx, mut cy) = (500.0, 300.0);
    for i in 0..size {
        // Jump to a new fixation point every 50 samples.
        if i % 50 == 0 {
            cx = rng.random_range(0.0..1920.0);
            cy = rng.random_range(0.0..1080.0);
        }
        xs.push(cx + jitter.sample(&mut rng));
        ys.push(cy + jitter.sample(&mut rng));
    }
    (xs, ys)
}

fn run_1d(filter: impl Into<Filter<f64>>, signal: &[f64]) -> Vec<f64> {
    Smoother::<f64>::new()
        .one_dimensional()
        .list_based()
        .attach_filter(filter)
        .unwrap()
        .build()
        .apply_filter(signal)
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters_1d");
    group.sample_size(50);

    let size = 10_000;
    let signal = generate_sine_signal(size, 42);
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("simple", |b| {
        b.iter(|| run_1d(SimpleMovingAverage1D::new(10).unwrap(), black_box(&signal)))
    });
    group.bench_function("weighted", |b| {
        b.iter(|| run_1d(WeightedMovingAverage1D::new(10).unwrap(), black_box(&signal)))
    });
    group.bench_function("gaussian", |b| {
        b.iter(|| run_1d(GaussianAverage1D::new(10, None).unwrap(), black_box(&signal)))
    });
    group.bench_function("median", |b| {
        b.iter(|| run_1d(MedianAverage1D::new(10).unwrap(), black_box(&signal)))
    });
    group.bench_function("exponential", |b| {
        b.iter(|| run_1d(ExponentialMovingAverage1D::new(0.3).unwrap(), black_box(&signal)))
    });
    group.bench_function("cumulative", |b| {
        b.iter(|| run_1d(CumulativeMovingAverage1D::new(), black_box(&signal)))
    });
    group.bench_function("fixation", |b| {
        b.iter(|| run_1d(FixationSmoothFilter1D::new(10, 0.5).unwrap(), black_box(&signal)))
    });
    group.finish();
}

fn bench_window_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_size");
    group.sample_size(50);

    let signal = generate_sine_signal(5_000, 42);

    for window in [3, 10, 50, 200] {
        group.bench_with_input(BenchmarkId::new("simple", window), &window, |b, &w| {
            b.iter(|| run_1d(SimpleMovingAverage1D::new(w).unwrap(), black_box(&signal)))
        });
        group.bench_with_input(BenchmarkId::new("median", window), &window, |b, &w| {
            b.iter(|| run_1d(MedianAverage1D::new(w).unwrap(), black_box(&signal)))
        });
    }
    group.finish();
}

fn bench_multi_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_pass");
    group.sample_size(50);

    let signal = generate_sine_signal(5_000, 7);

    for passes in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("simple", passes), &passes, |b, &p| {
            b.iter(|| {
                run_1d(
                    MultiPassMovingAverage1D::new(10, p, Simple).unwrap(),
                    black_box(&signal),
                )
            })
        });
    }
    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");
    group.sample_size(50);

    for size in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(size as u64));
        let signal = generate_sine_signal(size, 42);

        group.bench_with_input(BenchmarkId::new("continuous", size), &size, |b, _| {
            b.iter(|| {
                let mut smoother = Smoother::<f64>::new()
                    .one_dimensional()
                    .continuous()
                    .attach_filter(MedianAverage1D::new(5).unwrap())
                    .unwrap()
                    .attach_filter(SimpleMovingAverage1D::new(10).unwrap())
                    .unwrap()
                    .build();
                black_box(&signal)
                    .iter()
                    .map(|&sample| smoother.add_and_get(sample))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("list", size), &size, |b, _| {
            b.iter(|| {
                Smoother::<f64>::new()
                    .one_dimensional()
                    .list_based()
                    .attach_filter(MedianAverage1D::new(5).unwrap())
                    .unwrap()
                    .attach_filter(SimpleMovingAverage1D::new(10).unwrap())
                    .unwrap()
                    .build()
                    .apply_filter(black_box(&signal))
            })
        });
    }
    group.finish();
}

fn bench_gaze(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaze_2d");
    group.sample_size(50);

    for size in [1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        let (xs, ys) = generate_gaze_trace(size, 42);

        group.bench_with_input(BenchmarkId::new("fixation", size), &size, |b, _| {
            b.iter(|| {
                Smoother::<f64>::new()
                    .two_dimensional()
                    .list_based()
                    .attach_filter(NaiveFixationSmoothFilter2D::new(10, 4.0, None, None).unwrap())
                    .unwrap()
                    .build()
                    .apply_filter(black_box(&xs), black_box(&ys))
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("gaussian", size), &size, |b, _| {
            b.iter(|| {
                Smoother::<f64>::new()
                    .two_dimensional()
                    .list_based()
                    .attach_filter(NaiveGaussianAverage2D::new(10, None, None, None).unwrap())
                    .unwrap()
                    .build()
                    .apply_filter(black_box(&xs), black_box(&ys))
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_filters,
    bench_window_size,
    bench_multi_pass,
    bench_modes,
    bench_gaze,
);

criterion_main!(benches);
