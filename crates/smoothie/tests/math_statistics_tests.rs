#![cfg(feature = "dev")]
//! Tests for order and dispersion statistics.
//!
//! ## Test Organization
//!
//! 1. **Median** - Odd, even and degenerate inputs
//! 2. **Dispersion** - Population standard deviation
//! 3. **Weighted Mean** - Paired weights

use approx::assert_relative_eq;

use smoothie::internals::math::statistics::{median_inplace, std_dev, weighted_mean};

// ============================================================================
// Median Tests
// ============================================================================

/// Test odd-length input.
#[test]
fn test_median_odd() {
    let mut vals = vec![5.0, 1.0, 3.0];
    assert_eq!(median_inplace(&mut vals), 3.0);
}

/// Test even-length input.
///
/// Verifies that the two middle values are averaged.
#[test]
fn test_median_even() {
    let mut vals = vec![4.0, 1.0, 3.0, 2.0];
    assert_eq!(median_inplace(&mut vals), 2.5);

    let mut pair = vec![20.0, 10.0];
    assert_eq!(median_inplace(&mut pair), 15.0);
}

/// Test that NaN input gives the same median wherever it lands.
///
/// NaN orders above every number, so it acts as the largest value.
#[test]
fn test_median_nan_order_independent() {
    for mut vals in [
        vec![f64::NAN, 1.0, 2.0],
        vec![1.0, f64::NAN, 2.0],
        vec![2.0, 1.0, f64::NAN],
    ] {
        assert_eq!(median_inplace(&mut vals), 2.0);
    }

    for mut vals in [vec![f64::NAN, 3.0, 1.0, 2.0], vec![3.0, 2.0, 1.0, f64::NAN]] {
        assert_eq!(median_inplace(&mut vals), 2.5);
    }
}

/// Test degenerate input.
#[test]
fn test_median_degenerate() {
    let mut empty: Vec<f64> = Vec::new();
    assert_eq!(median_inplace(&mut empty), 0.0);

    let mut single = vec![7.0];
    assert_eq!(median_inplace(&mut single), 7.0);
}

// ============================================================================
// Dispersion Tests
// ============================================================================

/// Test the population standard deviation.
#[test]
fn test_std_dev_population() {
    let vals = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_relative_eq!(std_dev(vals, vals.len()), 2.0, epsilon = 1e-12);
}

/// Test constant and empty input.
#[test]
fn test_std_dev_degenerate() {
    assert_eq!(std_dev([3.0, 3.0, 3.0], 3), 0.0);
    assert_eq!(std_dev(Vec::<f64>::new(), 0), 0.0);
}

// ============================================================================
// Weighted Mean Tests
// ============================================================================

/// Test paired weights.
#[test]
fn test_weighted_mean() {
    let mean = weighted_mean([1.0, 2.0, 3.0], &[1.0, 1.0, 2.0]);
    assert_relative_eq!(mean, 2.25, epsilon = 1e-12);
}
