//! Tests for the exponential and cumulative moving averages.
//!
//! ## Test Organization
//!
//! 1. **Exponential** - Recurrence, alpha bounds, zero-state re-seed
//! 2. **Cumulative** - Running mean and reset

use approx::assert_relative_eq;

use smoothie::prelude::*;

fn run<F: Filter1D<f64>>(filter: &mut F, signal: &[f64]) -> Vec<f64> {
    signal.iter().map(|&x| filter.next(x)).collect()
}

// ============================================================================
// Exponential Moving Average Tests
// ============================================================================

/// Test the reference recurrence with alpha 0.5.
#[test]
fn test_ema_half() {
    let mut ema = ExponentialMovingAverage1D::new(0.5).unwrap();
    assert_eq!(run(&mut ema, &[10.0, 20.0, 30.0]), vec![10.0, 15.0, 22.5]);
    assert_eq!(ema.state(), 22.5);
    assert_eq!(ema.alpha(), 0.5);
}

/// Test the extreme smoothing factors.
///
/// Verifies that alpha 1 tracks the input and alpha 0 holds the seed.
#[test]
fn test_ema_alpha_bounds() {
    let mut tracking = ExponentialMovingAverage1D::new(1.0).unwrap();
    assert_eq!(run(&mut tracking, &[3.0, 8.0, -2.0]), vec![3.0, 8.0, -2.0]);

    let mut holding = ExponentialMovingAverage1D::new(0.0).unwrap();
    assert_eq!(run(&mut holding, &[3.0, 8.0, -2.0]), vec![3.0, 3.0, 3.0]);
}

/// Test that alpha outside [0, 1] is rejected.
#[test]
fn test_ema_invalid_alpha() {
    assert_eq!(
        ExponentialMovingAverage1D::new(-0.1).unwrap_err(),
        SmootherError::InvalidAlpha(-0.1)
    );
    assert_eq!(
        ExponentialMovingAverage1D::new(1.1).unwrap_err(),
        SmootherError::InvalidAlpha(1.1)
    );
    assert_eq!(
        ExponentialMovingAverage1D::<f64>::new(1.1).unwrap_err().kind(),
        ErrorKind::InvalidConfiguration
    );
}

/// Test re-seeding after the state lands exactly on zero.
///
/// With alpha 0.5, `10 -> -10` gives a state of 0, so the next sample seeds
/// the average instead of being blended with it.
#[test]
fn test_ema_reseeds_on_zero_state() {
    let mut ema = ExponentialMovingAverage1D::new(0.5).unwrap();
    assert_eq!(run(&mut ema, &[10.0, -10.0, 8.0, 4.0]), vec![10.0, 0.0, 8.0, 6.0]);
}

/// Test a zero first sample.
///
/// Verifies the state stays unset, so the following sample seeds it.
#[test]
fn test_ema_zero_first_sample() {
    let mut ema = ExponentialMovingAverage1D::new(0.25).unwrap();
    assert_eq!(run(&mut ema, &[0.0, 12.0, 16.0]), vec![0.0, 12.0, 13.0]);
}

/// Test reset.
#[test]
fn test_ema_reset() {
    let mut ema = ExponentialMovingAverage1D::new(0.5).unwrap();
    run(&mut ema, &[10.0, 20.0]);

    ema.reset();
    assert_eq!(ema.state(), 0.0);
    assert_eq!(ema.next(30.0), 30.0);
    assert_eq!(ema.window_size(), 1);
}

// ============================================================================
// Cumulative Moving Average Tests
// ============================================================================

/// Test the reference running mean.
#[test]
fn test_cma_running_mean() {
    let mut cma = CumulativeMovingAverage1D::new();
    assert_eq!(
        run(&mut cma, &[10.0, 20.0, 30.0, 40.0]),
        vec![10.0, 15.0, 20.0, 25.0]
    );
    assert_eq!(cma.count(), 4);
    assert_eq!(cma.average(), 25.0);
}

/// Test that history is unbounded despite the one-sample window.
#[test]
fn test_cma_unbounded_history() {
    let mut cma = CumulativeMovingAverage1D::default();
    for i in 1..=100 {
        cma.next(i as f64);
        assert_eq!(cma.window().len(), 1);
    }
    assert_eq!(cma.count(), 100);
    assert_relative_eq!(cma.average(), 50.5, epsilon = 1e-9);
}

/// Test reset.
#[test]
fn test_cma_reset() {
    let mut cma = CumulativeMovingAverage1D::new();
    run(&mut cma, &[100.0, 200.0]);

    cma.reset();
    assert_eq!(cma.count(), 0);
    assert_eq!(cma.next(4.0), 4.0);
}
