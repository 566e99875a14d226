//! Multi-pass moving averages.
//!
//! ## Purpose
//!
//! This module provides [`MultiPassMovingAverage1D`], which runs a sample
//! through `num_passes` identical kernel averages in series to strengthen
//! smoothing, and the [`MovingAverageType`] selector for that kernel.
//!
//! ## Design notes
//!
//! * **Owned chain**: The passes live in a private one-dimensional
//!   [`FilterChain`] built once at construction.
//! * **Outer window**: The filter presents a window of one sample; all real
//!   windowing happens inside the passes.
//!
//! ## Invariants
//!
//! * The chain always holds exactly `num_passes` filters of one kind.
//! * Gaussian passes use `std_dev = window_size / 3`.
//!
//! ## Non-goals
//!
//! * Exponential and cumulative averages cannot be used as passes.

// External dependencies
use core::fmt::{self, Display, Formatter};

// Internal dependencies
use crate::engine::chain::{FilterChain, OneDimensional};
use crate::engine::filter::{Filter, Filter1D, Scalar};
use crate::engine::validator::Validator;
use crate::filters::kernel::{GaussianAverage1D, SimpleMovingAverage1D, WeightedMovingAverage1D};
use crate::filters::median::MedianAverage1D;
use crate::primitives::errors::SmootherError;
use crate::primitives::window::SampleWindow;

// ============================================================================
// Average Type
// ============================================================================

/// Kind of moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovingAverageType {
    /// Uniform weights.
    #[default]
    Simple,

    /// Linear weights.
    Weighted,

    /// Gaussian weights.
    Gaussian,

    /// Median of the window.
    Median,

    /// Exponential recurrence.
    Exponential,

    /// Running mean.
    Cumulative,
}

impl MovingAverageType {
    /// Lowercase name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Weighted => "weighted",
            Self::Gaussian => "gaussian",
            Self::Median => "median",
            Self::Exponential => "exponential",
            Self::Cumulative => "cumulative",
        }
    }

    /// Whether this kind can be used as a multi-pass stage.
    pub fn supports_multi_pass(self) -> bool {
        !matches!(self, Self::Exponential | Self::Cumulative)
    }

    /// Build one pass of this kind over `window_size` samples.
    fn pass<T: Scalar>(self, window_size: usize) -> Result<Filter<T>, SmootherError> {
        Ok(match self {
            Self::Simple => SimpleMovingAverage1D::new(window_size)?.into(),
            Self::Weighted => WeightedMovingAverage1D::new(window_size)?.into(),
            Self::Gaussian => GaussianAverage1D::new(window_size, None)?.into(),
            Self::Median => MedianAverage1D::new(window_size)?.into(),
            Self::Exponential | Self::Cumulative => {
                return Err(SmootherError::UnsupportedAverageType(self.name()));
            }
        })
    }
}

impl Display for MovingAverageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Multi-Pass Moving Average
// ============================================================================

/// A kernel average applied `num_passes` times in series.
///
/// # Example
///
/// ```
/// use smoothie::prelude::*;
///
/// let mut filter =
///     MultiPassMovingAverage1D::<f64>::new(3, 2, MovingAverageType::Median).unwrap();
/// let out: Vec<f64> = [10.0, 20.0, 30.0].into_iter().map(|x| filter.next(x)).collect();
/// assert_eq!(out, vec![10.0, 12.5, 15.0]);
///
/// assert!(MultiPassMovingAverage1D::<f64>::new(3, 2, MovingAverageType::Cumulative).is_err());
/// ```
#[derive(Debug)]
pub struct MultiPassMovingAverage1D<T: Scalar> {
    window: SampleWindow<T>,
    passes: FilterChain<T, OneDimensional>,
    average_type: MovingAverageType,
    pass_window_size: usize,
}

impl<T: Scalar> MultiPassMovingAverage1D<T> {
    /// Create `num_passes` chained averages of `average_type`, each over
    /// `window_size` samples.
    pub fn new(
        window_size: usize,
        num_passes: usize,
        average_type: MovingAverageType,
    ) -> Result<Self, SmootherError> {
        Validator::validate_passes(num_passes)?;
        if !average_type.supports_multi_pass() {
            return Err(SmootherError::UnsupportedAverageType(average_type.name()));
        }

        let mut passes = FilterChain::new();
        for _ in 0..num_passes {
            passes.attach(average_type.pass(window_size)?)?;
        }

        Ok(Self {
            window: SampleWindow::new(1),
            passes,
            average_type,
            pass_window_size: window_size,
        })
    }

    /// Number of chained passes.
    pub fn num_passes(&self) -> usize {
        self.passes.len()
    }

    /// Kind of every pass.
    pub fn average_type(&self) -> MovingAverageType {
        self.average_type
    }

    /// Window size of each pass.
    pub fn pass_window_size(&self) -> usize {
        self.pass_window_size
    }

    /// The chained passes, first pass first.
    pub fn passes(&self) -> &FilterChain<T, OneDimensional> {
        &self.passes
    }
}

impl<T: Scalar> Filter1D<T> for MultiPassMovingAverage1D<T> {
    fn next(&mut self, sample: T) -> T {
        self.window.push(sample);
        self.passes.pipe(sample)
    }

    fn reset(&mut self) {
        self.window.clear();
        self.passes.reset();
    }

    fn window(&self) -> &SampleWindow<T> {
        &self.window
    }
}
