//! Tests for the fluent smoother builder and the prelude.
//!
//! ## Test Organization
//!
//! 1. **Selectors** - Named methods and marker types
//! 2. **Attach Errors** - Immediate failure on the builder
//! 3. **Prelude** - Exports usable without qualification

use smoothie::prelude::*;

// ============================================================================
// Selector Tests
// ============================================================================

/// Test that marker selectors build the same smoothers as named ones.
#[test]
fn test_builder_marker_selectors() {
    let signal = [10.0, 20.0, 30.0, 40.0, 50.0];

    let mut named = Smoother::<f64>::new()
        .one_dimensional()
        .list_based()
        .attach_filter(SimpleMovingAverage1D::new(2).unwrap())
        .unwrap()
        .build();

    let mut marked = Smoother::<f64>::new()
        .dimension(OneDimensional)
        .mode(List)
        .attach_filter(SimpleMovingAverage1D::new(2).unwrap())
        .unwrap()
        .build();

    assert_eq!(named.apply_filter(&signal), marked.apply_filter(&signal));
}

/// Test the continuous marker.
#[test]
fn test_builder_continuous_marker() {
    let mut smoother = Smoother::<f64>::default()
        .dimension(TwoDimensional)
        .mode(Continuous)
        .attach_filter(OffsetFilter2D::new(2.0, None))
        .unwrap()
        .build();

    assert_eq!(smoother.add_and_get(1.0, 2.0), (3.0, 4.0));
}

/// Test the builder attach count.
#[test]
fn test_builder_len() {
    let builder = Smoother::<f32>::new().one_dimensional().continuous();
    assert!(builder.is_empty());

    let builder = builder
        .attach_filter(OffsetFilter1D::new(1.0))
        .unwrap()
        .attach_filter(CumulativeMovingAverage1D::new())
        .unwrap();
    assert_eq!(builder.len(), 2);
    assert_eq!(builder.build().len(), 2);
}

// ============================================================================
// Attach Error Tests
// ============================================================================

/// Test that a wrong-dimension filter fails immediately.
#[test]
fn test_builder_attach_type_mismatch() {
    let err = Smoother::<f64>::new()
        .two_dimensional()
        .list_based()
        .attach_filter(MedianAverage1D::new(3).unwrap())
        .unwrap_err();

    assert_eq!(
        err,
        SmootherError::TypeMismatch {
            expected: Dimension::Two,
            found: Dimension::One,
        }
    );
    assert_eq!(
        err.to_string(),
        "Filter dimension mismatch: smoother expects a 2D filter, got 1D"
    );
}

/// Test error messages of configuration errors.
#[test]
fn test_error_messages() {
    assert_eq!(
        SimpleMovingAverage1D::<f64>::new(0).unwrap_err().to_string(),
        "Invalid window_size: 0 (must be greater than 0)"
    );
    assert_eq!(
        MultiPassMovingAverage1D::<f64>::new(3, 1, Exponential)
            .unwrap_err()
            .to_string(),
        "Unsupported average filter type for multi-pass filtering: exponential"
    );
}

// ============================================================================
// Prelude Tests
// ============================================================================

/// Test that every filter converts into the erased handle.
#[test]
fn test_prelude_filters_convert() {
    let one: Vec<Filter<f64>> = vec![
        OffsetFilter1D::new(1.0).into(),
        SimpleMovingAverage1D::new(2).unwrap().into(),
        WeightedMovingAverage1D::new(2).unwrap().into(),
        GaussianAverage1D::new(2, None).unwrap().into(),
        MedianAverage1D::new(2).unwrap().into(),
        ExponentialMovingAverage1D::new(0.5).unwrap().into(),
        CumulativeMovingAverage1D::new().into(),
        FixationSmoothFilter1D::new(2, 1.0).unwrap().into(),
        MultiPassMovingAverage1D::new(2, 2, Weighted).unwrap().into(),
    ];
    assert!(one.iter().all(|f| f.dimension() == Dimension::One));

    let two: Vec<Filter<f64>> = vec![
        OffsetFilter2D::new(1.0, None).into(),
        NaiveSimpleMovingAverage2D::new(2, None).unwrap().into(),
        NaiveWeightedMovingAverage2D::new(2, None).unwrap().into(),
        NaiveGaussianAverage2D::new(2, None, None, None).unwrap().into(),
        NaiveMedianAverage2D::new(2, None).unwrap().into(),
        NaiveExponentialMovingAverage2D::new(0.5, None).unwrap().into(),
        NaiveCumulativeMovingAverage2D::new().into(),
        NaiveFixationSmoothFilter2D::new(2, 1.0, None, None).unwrap().into(),
        NaiveMultiPassMovingAverage2D::new(2, 2, Gaussian, None, None, None)
            .unwrap()
            .into(),
    ];
    assert!(two.iter().all(|f| f.dimension() == Dimension::Two));
}

/// Test a full workflow using only prelude names.
#[test]
fn test_prelude_workflow() {
    let mut smoother: ContinuousSmoother<f64, OneDimensional> = Smoother::new()
        .one_dimensional()
        .continuous()
        .attach_filter(MultiPassMovingAverage1D::new(3, 2, Median).unwrap())
        .unwrap()
        .build();

    let window: &SampleWindow<f64> = smoother.filters().stages()[0].window();
    assert_eq!(window.capacity(), 1);

    let out: Vec<f64> = [10.0, 20.0, 30.0, 40.0, 50.0]
        .into_iter()
        .map(|x| smoother.add_and_get(x))
        .collect();
    assert_eq!(out, vec![10.0, 12.5, 15.0, 20.0, 30.0]);
}

/// Test that every intermediate builder and the chain type are nameable.
#[test]
fn test_prelude_names_builder_stages() {
    fn chain_len<T: Scalar, D: Dimensionality<T>>(chain: &FilterChain<T, D>) -> usize {
        chain.len()
    }

    let selected: DimensionBuilder<f64, OneDimensional> = Smoother::new().one_dimensional();
    let builder: ListSmootherBuilder<f64, OneDimensional> = selected
        .list_based()
        .attach_filter(OffsetFilter1D::new(1.0))
        .unwrap();
    let mut list: ListSmoother<f64, OneDimensional> = builder.build();
    assert_eq!(chain_len(list.filters()), 1);
    assert_eq!(list.apply_filter(&[1.0, 2.0]), vec![2.0, 3.0]);

    let builder: ContinuousSmootherBuilder<f64, TwoDimensional> =
        Smoother::<f64>::new().two_dimensional().mode(Continuous);
    let smoother = builder.build();
    assert_eq!(chain_len(smoother.filters()), 0);
}
