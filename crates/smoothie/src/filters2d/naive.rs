//! Independent per-axis pairings of 1D filters.
//!
//! ## Purpose
//!
//! This module provides [`Naive2D`], a 2D filter that feeds X through one 1D
//! filter and Y through another, plus one alias and constructor per 1D
//! filter kind.
//!
//! ## Design notes
//!
//! * **No coupling**: The axes never see each other's samples.
//! * **Y defaults from X**: Every constructor takes the X parameters and an
//!   `Option` override per Y parameter.
//!
//! ## Invariants
//!
//! * Both component filters advance exactly once per `next`.
//! * `reset` resets both components.

// Internal dependencies
use crate::engine::filter::{Filter, Filter1D, Filter2D, Scalar};
use crate::filters::fixation::FixationSmoothFilter1D;
use crate::filters::kernel::{GaussianAverage1D, SimpleMovingAverage1D, WeightedMovingAverage1D};
use crate::filters::median::MedianAverage1D;
use crate::filters::multipass::{MovingAverageType, MultiPassMovingAverage1D};
use crate::filters::recurrence::{CumulativeMovingAverage1D, ExponentialMovingAverage1D};
use crate::primitives::errors::SmootherError;
use crate::primitives::window::SampleWindow;

// ============================================================================
// Naive Pairing
// ============================================================================

/// Pair of independent 1D filters, one per axis.
///
/// # Example
///
/// ```
/// use smoothie::prelude::*;
///
/// let mut filter = NaiveSimpleMovingAverage2D::<f64>::new(2, Some(1)).unwrap();
/// assert_eq!(filter.next(10.0, 1.0), (10.0, 1.0));
/// assert_eq!(filter.next(20.0, 2.0), (15.0, 2.0));
/// ```
#[derive(Debug, Clone)]
pub struct Naive2D<F> {
    filter_x: F,
    filter_y: F,
}

impl<F> Naive2D<F> {
    /// Pair two already built filters.
    pub fn from_filters(filter_x: F, filter_y: F) -> Self {
        Self { filter_x, filter_y }
    }

    /// Filter applied to the X channel.
    pub fn filter_x(&self) -> &F {
        &self.filter_x
    }

    /// Filter applied to the Y channel.
    pub fn filter_y(&self) -> &F {
        &self.filter_y
    }

    /// Split back into the X and Y filters.
    pub fn into_filters(self) -> (F, F) {
        (self.filter_x, self.filter_y)
    }
}

impl<T: Scalar, F: Filter1D<T>> Filter2D<T> for Naive2D<F> {
    #[inline]
    fn next(&mut self, x: T, y: T) -> (T, T) {
        (self.filter_x.next(x), self.filter_y.next(y))
    }

    fn reset(&mut self) {
        self.filter_x.reset();
        self.filter_y.reset();
    }

    fn windows(&self) -> (&SampleWindow<T>, &SampleWindow<T>) {
        (self.filter_x.window(), self.filter_y.window())
    }
}

impl<T: Scalar, F: Filter1D<T> + 'static> From<Naive2D<F>> for Filter<T> {
    fn from(filter: Naive2D<F>) -> Self {
        Filter::two_dimensional(filter)
    }
}

// ============================================================================
// Aliases
// ============================================================================

/// Simple moving average per axis.
pub type NaiveSimpleMovingAverage2D<T> = Naive2D<SimpleMovingAverage1D<T>>;

/// Weighted moving average per axis.
pub type NaiveWeightedMovingAverage2D<T> = Naive2D<WeightedMovingAverage1D<T>>;

/// Gaussian average per axis.
pub type NaiveGaussianAverage2D<T> = Naive2D<GaussianAverage1D<T>>;

/// Median average per axis.
pub type NaiveMedianAverage2D<T> = Naive2D<MedianAverage1D<T>>;

/// Exponential moving average per axis.
pub type NaiveExponentialMovingAverage2D<T> = Naive2D<ExponentialMovingAverage1D<T>>;

/// Cumulative moving average per axis.
pub type NaiveCumulativeMovingAverage2D<T> = Naive2D<CumulativeMovingAverage1D<T>>;

/// Fixation smoothing per axis.
pub type NaiveFixationSmoothFilter2D<T> = Naive2D<FixationSmoothFilter1D<T>>;

/// Multi-pass moving average per axis.
pub type NaiveMultiPassMovingAverage2D<T> = Naive2D<MultiPassMovingAverage1D<T>>;

// ============================================================================
// Constructors
// ============================================================================

impl<T: Scalar> Naive2D<SimpleMovingAverage1D<T>> {
    /// Simple moving averages; `window_size_y` defaults to `window_size`.
    pub fn new(window_size: usize, window_size_y: Option<usize>) -> Result<Self, SmootherError> {
        Ok(Self::from_filters(
            SimpleMovingAverage1D::new(window_size)?,
            SimpleMovingAverage1D::new(window_size_y.unwrap_or(window_size))?,
        ))
    }
}

impl<T: Scalar> Naive2D<WeightedMovingAverage1D<T>> {
    /// Weighted moving averages; `window_size_y` defaults to `window_size`.
    pub fn new(window_size: usize, window_size_y: Option<usize>) -> Result<Self, SmootherError> {
        Ok(Self::from_filters(
            WeightedMovingAverage1D::new(window_size)?,
            WeightedMovingAverage1D::new(window_size_y.unwrap_or(window_size))?,
        ))
    }
}

impl<T: Scalar> Naive2D<GaussianAverage1D<T>> {
    /// Gaussian averages.
    ///
    /// `window_size_y` defaults to `window_size` and `std_dev_y` to
    /// `std_dev`. An axis left without a standard deviation uses a third of
    /// its own window size.
    pub fn new(
        window_size: usize,
        std_dev: Option<T>,
        window_size_y: Option<usize>,
        std_dev_y: Option<T>,
    ) -> Result<Self, SmootherError> {
        Ok(Self::from_filters(
            GaussianAverage1D::new(window_size, std_dev)?,
            GaussianAverage1D::new(window_size_y.unwrap_or(window_size), std_dev_y.or(std_dev))?,
        ))
    }
}

impl<T: Scalar> Naive2D<MedianAverage1D<T>> {
    /// Median averages; `window_size_y` defaults to `window_size`.
    pub fn new(window_size: usize, window_size_y: Option<usize>) -> Result<Self, SmootherError> {
        Ok(Self::from_filters(
            MedianAverage1D::new(window_size)?,
            MedianAverage1D::new(window_size_y.unwrap_or(window_size))?,
        ))
    }
}

impl<T: Scalar> Naive2D<ExponentialMovingAverage1D<T>> {
    /// Exponential moving averages; `alpha_y` defaults to `alpha`.
    pub fn new(alpha: T, alpha_y: Option<T>) -> Result<Self, SmootherError> {
        Ok(Self::from_filters(
            ExponentialMovingAverage1D::new(alpha)?,
            ExponentialMovingAverage1D::new(alpha_y.unwrap_or(alpha))?,
        ))
    }
}

impl<T: Scalar> Naive2D<CumulativeMovingAverage1D<T>> {
    /// Cumulative moving averages.
    pub fn new() -> Self {
        Self::from_filters(
            CumulativeMovingAverage1D::new(),
            CumulativeMovingAverage1D::new(),
        )
    }
}

impl<T: Scalar> Default for Naive2D<CumulativeMovingAverage1D<T>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Naive2D<FixationSmoothFilter1D<T>> {
    /// Fixation filters; each Y parameter defaults to its X counterpart.
    pub fn new(
        window_size: usize,
        threshold: T,
        window_size_y: Option<usize>,
        threshold_y: Option<T>,
    ) -> Result<Self, SmootherError> {
        Ok(Self::from_filters(
            FixationSmoothFilter1D::new(window_size, threshold)?,
            FixationSmoothFilter1D::new(
                window_size_y.unwrap_or(window_size),
                threshold_y.unwrap_or(threshold),
            )?,
        ))
    }
}

impl<T: Scalar> Naive2D<MultiPassMovingAverage1D<T>> {
    /// Multi-pass averages; each Y parameter defaults to its X counterpart.
    pub fn new(
        window_size: usize,
        num_passes: usize,
        average_type: MovingAverageType,
        window_size_y: Option<usize>,
        num_passes_y: Option<usize>,
        average_type_y: Option<MovingAverageType>,
    ) -> Result<Self, SmootherError> {
        Ok(Self::from_filters(
            MultiPassMovingAverage1D::new(window_size, num_passes, average_type)?,
            MultiPassMovingAverage1D::new(
                window_size_y.unwrap_or(window_size),
                num_passes_y.unwrap_or(num_passes),
                average_type_y.unwrap_or(average_type),
            )?,
        ))
    }
}
