//! Tests for the continuous smoother.
//!
//! ## Test Organization
//!
//! 1. **Add and Get** - Single samples through a chain
//! 2. **Chaining** - Attachment order and late attachment
//! 3. **Dimension Checks** - `TypeMismatch` on attach
//! 4. **Two Dimensions** - X/Y pairs

use approx::assert_relative_eq;

use smoothie::prelude::*;

// ============================================================================
// Add and Get Tests
// ============================================================================

/// Test that `get` is zero before the first sample.
#[test]
fn test_continuous_get_before_add() {
    let smoother = Smoother::<f64>::new()
        .one_dimensional()
        .continuous()
        .attach_filter(SimpleMovingAverage1D::new(3).unwrap())
        .unwrap()
        .build();

    assert_eq!(smoother.get(), 0.0);
    assert_eq!(smoother.len(), 1);
    assert_eq!(smoother.dimension(), Dimension::One);
}

/// Test `add`, `get` and `add_and_get`.
#[test]
fn test_continuous_add_and_get() {
    let mut smoother = Smoother::<f64>::new()
        .one_dimensional()
        .continuous()
        .attach_filter(SimpleMovingAverage1D::new(2).unwrap())
        .unwrap()
        .build();

    smoother.add(10.0);
    assert_eq!(smoother.get(), 10.0);
    assert_eq!(smoother.add_and_get(20.0), 15.0);
    assert_eq!(smoother.get(), 15.0);
}

/// Test that a smoother without filters is the identity.
#[test]
fn test_continuous_empty_chain() {
    let mut smoother = Smoother::<f64>::new().one_dimensional().continuous().build();
    assert!(smoother.is_empty());
    assert_eq!(smoother.add_and_get(3.25), 3.25);
}

// ============================================================================
// Chaining Tests
// ============================================================================

/// Test that the output of one filter feeds the next.
#[test]
fn test_continuous_chain_order() {
    let mut smoother = Smoother::<f64>::new()
        .one_dimensional()
        .continuous()
        .attach_filter(SimpleMovingAverage1D::new(2).unwrap())
        .unwrap()
        .attach_filter(OffsetFilter1D::new(1.0))
        .unwrap()
        .build();

    let out: Vec<f64> = [10.0, 20.0, 30.0]
        .into_iter()
        .map(|x| smoother.add_and_get(x))
        .collect();
    assert_eq!(out, vec![11.0, 16.0, 26.0]);
}

/// Test that state persists and late filters start empty.
#[test]
fn test_continuous_attach_after_build() {
    let mut smoother = Smoother::<f64>::new()
        .one_dimensional()
        .continuous()
        .attach_filter(CumulativeMovingAverage1D::new())
        .unwrap()
        .build();

    smoother.add(10.0);
    smoother.add(20.0);

    smoother
        .attach_filter(ExponentialMovingAverage1D::new(0.5).unwrap())
        .unwrap();
    assert_eq!(smoother.len(), 2);

    // Cumulative mean is 20, which seeds the new exponential filter.
    assert_eq!(smoother.add_and_get(30.0), 20.0);
    // Cumulative mean 25, blended with 20.
    assert_eq!(smoother.add_and_get(40.0), 22.5);
}

/// Test reset of the whole chain.
#[test]
fn test_continuous_reset() {
    let mut smoother = Smoother::<f64>::new()
        .one_dimensional()
        .continuous()
        .attach_filter(MultiPassMovingAverage1D::new(3, 2, Simple).unwrap())
        .unwrap()
        .build();

    let first: Vec<f64> = [1.0, 2.0, 3.0].into_iter().map(|x| smoother.add_and_get(x)).collect();

    smoother.reset();
    assert_eq!(smoother.get(), 0.0);
    assert!(smoother.filters().stages()[0].window().is_empty());

    let second: Vec<f64> = [1.0, 2.0, 3.0].into_iter().map(|x| smoother.add_and_get(x)).collect();
    assert_eq!(first, second);
}

// ============================================================================
// Dimension Check Tests
// ============================================================================

/// Test attaching a 2D filter to a 1D smoother.
#[test]
fn test_continuous_type_mismatch_on_builder() {
    let err = Smoother::<f64>::new()
        .one_dimensional()
        .continuous()
        .attach_filter(NaiveSimpleMovingAverage2D::new(2, None).unwrap())
        .unwrap_err();

    assert_eq!(
        err,
        SmootherError::TypeMismatch {
            expected: Dimension::One,
            found: Dimension::Two,
        }
    );
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

/// Test attaching a 1D filter to a built 2D smoother.
///
/// Verifies the chain is left unchanged.
#[test]
fn test_continuous_type_mismatch_after_build() {
    let mut smoother = Smoother::<f64>::new().two_dimensional().continuous().build();

    let err = smoother.attach_filter(OffsetFilter1D::new(1.0)).unwrap_err();
    assert_eq!(
        err,
        SmootherError::TypeMismatch {
            expected: Dimension::Two,
            found: Dimension::One,
        }
    );
    assert!(smoother.is_empty());
}

// ============================================================================
// Two Dimension Tests
// ============================================================================

/// Test X/Y pairs through a 2D chain.
#[test]
fn test_continuous_two_dimensional() {
    let mut smoother = Smoother::<f64>::new()
        .two_dimensional()
        .continuous()
        .attach_filter(NaiveSimpleMovingAverage2D::new(2, Some(1)).unwrap())
        .unwrap()
        .attach_filter(OffsetFilter2D::new(1.0, Some(-1.0)))
        .unwrap()
        .build();

    assert_eq!(smoother.get(), (0.0, 0.0));
    assert_eq!(smoother.dimension(), Dimension::Two);

    smoother.add(10.0, 5.0);
    assert_eq!(smoother.get(), (11.0, 4.0));
    assert_eq!(smoother.add_and_get(20.0, 7.0), (16.0, 6.0));
}

/// Test that building a live continuous smoother keeps filter state.
#[test]
fn test_continuous_build_keeps_state() {
    let mut smoother = Smoother::<f64>::new()
        .one_dimensional()
        .continuous()
        .attach_filter(SimpleMovingAverage1D::new(2).unwrap())
        .unwrap()
        .build();

    smoother.add(10.0);
    smoother.build();
    assert_eq!(smoother.get(), 10.0);
    assert_eq!(smoother.add_and_get(20.0), 15.0);
}

/// Test a boxed filter handle.
#[test]
fn test_continuous_accepts_boxed_filter() {
    let boxed: Box<dyn Filter1D<f64>> = Box::new(GaussianAverage1D::new(3, Some(1.0)).unwrap());
    let mut smoother = Smoother::<f64>::new()
        .one_dimensional()
        .continuous()
        .attach_filter(boxed)
        .unwrap()
        .build();

    smoother.add(1.0);
    assert_relative_eq!(smoother.add_and_get(2.0), 1.7549149868676284, epsilon = 1e-9);
}
