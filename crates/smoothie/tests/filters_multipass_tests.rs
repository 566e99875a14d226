//! Tests for multi-pass moving averages.
//!
//! ## Test Organization
//!
//! 1. **Outputs** - Reference series per kernel
//! 2. **Validation** - Passes and unsupported kinds
//! 3. **Structure** - Outer window, chain and reset

use approx::assert_relative_eq;

use smoothie::prelude::*;

fn run<F: Filter1D<f64>>(filter: &mut F, signal: &[f64]) -> Vec<f64> {
    signal.iter().map(|&x| filter.next(x)).collect()
}

fn assert_series(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(*a, *e, epsilon = 1e-9);
    }
}

// ============================================================================
// Output Tests
// ============================================================================

/// Test two simple passes over rising and falling ramps.
#[test]
fn test_multipass_simple() {
    let mut up = MultiPassMovingAverage1D::new(3, 2, Simple).unwrap();
    assert_series(
        &run(&mut up, &[10.0, 20.0, 30.0, 40.0, 50.0]),
        &[10.0, 12.5, 15.0, 65.0 / 3.0, 30.0],
    );

    let mut down = MultiPassMovingAverage1D::new(3, 2, Simple).unwrap();
    assert_series(
        &run(&mut down, &[50.0, 40.0, 30.0, 20.0, 10.0]),
        &[50.0, 47.5, 45.0, 115.0 / 3.0, 30.0],
    );
}

/// Test two median passes.
#[test]
fn test_multipass_median() {
    let mut filter = MultiPassMovingAverage1D::new(3, 2, Median).unwrap();
    assert_series(
        &run(&mut filter, &[10.0, 20.0, 30.0, 40.0, 50.0]),
        &[10.0, 12.5, 15.0, 20.0, 30.0],
    );
}

/// Test two weighted passes.
#[test]
fn test_multipass_weighted() {
    let mut filter = MultiPassMovingAverage1D::new(3, 2, Weighted).unwrap();
    assert_series(
        &run(&mut filter, &[10.0, 20.0, 30.0, 40.0]),
        &[0.0, 0.0, 10.0 / 3.0, 100.0 / 9.0],
    );
}

/// Test that a single pass equals the plain filter.
#[test]
fn test_multipass_single_pass_matches_filter() {
    let signal = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];

    let mut multi = MultiPassMovingAverage1D::new(4, 1, Gaussian).unwrap();
    let mut plain = GaussianAverage1D::new(4, Some(4.0 / 3.0)).unwrap();
    assert_series(&run(&mut multi, &signal), &run(&mut plain, &signal));
}

/// Test determinism under re-construction.
#[test]
fn test_multipass_deterministic() {
    let signal: Vec<f64> = (0..50).map(|i| ((i * 37) % 11) as f64).collect();

    let mut a = MultiPassMovingAverage1D::new(3, 2, Simple).unwrap();
    let mut b = MultiPassMovingAverage1D::new(3, 2, Simple).unwrap();
    assert_eq!(run(&mut a, &signal), run(&mut b, &signal));
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that zero passes are rejected.
#[test]
fn test_multipass_zero_passes() {
    assert_eq!(
        MultiPassMovingAverage1D::<f64>::new(3, 0, Simple).unwrap_err(),
        SmootherError::InvalidPasses(0)
    );
}

/// Test that recurrence kinds are rejected.
#[test]
fn test_multipass_unsupported_kinds() {
    for kind in [Exponential, Cumulative] {
        let err = MultiPassMovingAverage1D::<f64>::new(3, 2, kind).unwrap_err();
        assert_eq!(err, SmootherError::UnsupportedAverageType(kind.name()));
        assert!(err.is_invalid_configuration());
        assert!(!kind.supports_multi_pass());
    }
}

/// Test that an invalid pass window is rejected.
#[test]
fn test_multipass_zero_window() {
    assert_eq!(
        MultiPassMovingAverage1D::<f64>::new(0, 2, Median).unwrap_err(),
        SmootherError::InvalidWindowSize(0)
    );
}

// ============================================================================
// Structure Tests
// ============================================================================

/// Test the outer window and the inner chain.
#[test]
fn test_multipass_structure() {
    let filter = MultiPassMovingAverage1D::<f64>::new(5, 3, Weighted).unwrap();

    assert_eq!(filter.window_size(), 1);
    assert_eq!(filter.num_passes(), 3);
    assert_eq!(filter.pass_window_size(), 5);
    assert_eq!(filter.average_type(), Weighted);
    assert!(filter.passes().stages().iter().all(|pass| pass.window_size() == 5));
}

/// Test reset of every pass.
#[test]
fn test_multipass_reset() {
    let signal = [10.0, 20.0, 30.0, 40.0];
    let mut filter = MultiPassMovingAverage1D::new(3, 2, Simple).unwrap();
    let first = run(&mut filter, &signal);

    filter.reset();
    assert!(filter.passes().stages().iter().all(|pass| pass.window().is_empty()));
    assert_eq!(run(&mut filter, &signal), first);
}

/// Test the average type names and default.
#[test]
fn test_average_type_display() {
    assert_eq!(MovingAverageType::default(), Simple);
    assert_eq!(Gaussian.to_string(), "gaussian");
    assert_eq!(Cumulative.name(), "cumulative");
}
