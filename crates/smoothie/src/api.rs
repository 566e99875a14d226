//! High-level API for signal smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder that selects the dimensionality and input mode of a smoother,
//! collects its filters and builds it.
//!
//! ## Design notes
//!
//! * **Typestate**: Each step returns a new builder type, so a smoother can
//!   only be used after `build()`.
//! * **Polymorphic**: Marker types select the dimension and the mode, as an
//!   alternative to the named selector methods.
//! * **Validated**: Filters are checked for dimensionality as they are
//!   attached.
//!
//! ## Key concepts
//!
//! * **Dimensions**: [`OneDimensional`] (scalar samples) or
//!   [`TwoDimensional`] (X/Y pairs).
//! * **Modes**: [`Continuous`] (`add`/`get`) or [`List`] (`apply_filter`).
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SmootherBuilder`] via `Smoother::new()`.
//! 2. Select a dimension via `.one_dimensional()` or `.two_dimensional()`.
//! 3. Select a mode via `.continuous()` or `.list_based()`.
//! 4. Attach filters with `.attach_filter(filter)?` and finish with `.build()`.

// External dependencies
use core::marker::PhantomData;

// Publicly re-exported types
pub use crate::adapters::continuous::{ContinuousSmoother, ContinuousSmootherBuilder};
pub use crate::adapters::list::{ListSmoother, ListSmootherBuilder};
pub use crate::engine::chain::{Dimensionality, FilterChain, OneDimensional, TwoDimensional};
pub use crate::engine::filter::{Filter, Filter1D, Filter2D, Scalar};
pub use crate::filters::fixation::FixationSmoothFilter1D;
pub use crate::filters::kernel::{GaussianAverage1D, SimpleMovingAverage1D, WeightedMovingAverage1D};
pub use crate::filters::median::MedianAverage1D;
pub use crate::filters::multipass::{MovingAverageType, MultiPassMovingAverage1D};
pub use crate::filters::offset::OffsetFilter1D;
pub use crate::filters::recurrence::{CumulativeMovingAverage1D, ExponentialMovingAverage1D};
pub use crate::filters2d::naive::{
    Naive2D, NaiveCumulativeMovingAverage2D, NaiveExponentialMovingAverage2D,
    NaiveFixationSmoothFilter2D, NaiveGaussianAverage2D, NaiveMedianAverage2D,
    NaiveMultiPassMovingAverage2D, NaiveSimpleMovingAverage2D, NaiveWeightedMovingAverage2D,
};
pub use crate::filters2d::offset::OffsetFilter2D;
pub use crate::primitives::dimension::Dimension;
pub use crate::primitives::errors::{ErrorKind, SmootherError};
pub use crate::primitives::window::SampleWindow;

/// Marker types for selecting input modes.
#[allow(non_snake_case)]
pub mod Mode {
    pub use super::{Continuous, List};
}

// ============================================================================
// Smoother Builder
// ============================================================================

/// Entry point of the fluent smoother builder.
///
/// # Example
///
/// ```
/// use smoothie::prelude::*;
///
/// let mut smoother = Smoother::<f64>::new()
///     .two_dimensional()
///     .list_based()
///     .attach_filter(NaiveSimpleMovingAverage2D::new(2, None)?)?
///     .build();
///
/// let (xs, ys) = smoother.apply_filter(&[10.0, 20.0], &[1.0, 3.0])?;
/// assert_eq!(xs, vec![10.0, 15.0]);
/// assert_eq!(ys, vec![1.0, 2.0]);
/// # Result::<(), SmootherError>::Ok(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SmootherBuilder<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T: Scalar> Default for SmootherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> SmootherBuilder<T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }

    /// Select scalar samples.
    pub fn one_dimensional(self) -> DimensionBuilder<T, OneDimensional> {
        self.dimension(OneDimensional)
    }

    /// Select X/Y sample pairs.
    pub fn two_dimensional(self) -> DimensionBuilder<T, TwoDimensional> {
        self.dimension(TwoDimensional)
    }

    /// Select the dimension by marker.
    pub fn dimension<D: Dimensionality<T>>(self, _dimension: D) -> DimensionBuilder<T, D> {
        DimensionBuilder {
            marker: PhantomData,
        }
    }
}

// ============================================================================
// Dimension Builder
// ============================================================================

/// Builder step with the dimension fixed and the mode still open.
#[derive(Debug, Clone, Copy)]
pub struct DimensionBuilder<T, D> {
    marker: PhantomData<fn() -> (T, D)>,
}

impl<T: Scalar, D: Dimensionality<T>> DimensionBuilder<T, D> {
    /// Select sample-by-sample input.
    pub fn continuous(self) -> ContinuousSmootherBuilder<T, D> {
        self.mode(Continuous)
    }

    /// Select whole-signal input.
    pub fn list_based(self) -> ListSmootherBuilder<T, D> {
        self.mode(List)
    }

    /// Select the mode by marker to transition to a mode builder.
    pub fn mode<M>(self, _mode: M) -> M::Output
    where
        M: SmootherMode<T, D>,
    {
        M::convert(self)
    }
}

// ============================================================================
// Modes
// ============================================================================

/// Trait for transitioning from a dimension builder to a mode builder.
pub trait SmootherMode<T: Scalar, D: Dimensionality<T>> {
    /// The mode-specific builder type.
    type Output;

    /// Convert the dimension builder into a mode builder.
    fn convert(builder: DimensionBuilder<T, D>) -> Self::Output;
}

/// Marker for sample-by-sample smoothing.
#[derive(Debug, Clone, Copy)]
pub struct Continuous;

impl<T: Scalar, D: Dimensionality<T>> SmootherMode<T, D> for Continuous {
    type Output = ContinuousSmootherBuilder<T, D>;

    fn convert(_builder: DimensionBuilder<T, D>) -> Self::Output {
        ContinuousSmootherBuilder::new()
    }
}

/// Marker for whole-signal smoothing.
#[derive(Debug, Clone, Copy)]
pub struct List;

impl<T: Scalar, D: Dimensionality<T>> SmootherMode<T, D> for List {
    type Output = ListSmootherBuilder<T, D>;

    fn convert(_builder: DimensionBuilder<T, D>) -> Self::Output {
        ListSmootherBuilder::new()
    }
}
