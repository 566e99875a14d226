//! Exponential and cumulative moving averages.
//!
//! ## Purpose
//!
//! This module provides the two filters whose output is an O(1) recurrence
//! over their own state rather than a function of the window.
//!
//! ## Key concepts
//!
//! * **Exponential**: `s = alpha * x + (1 - alpha) * s`, seeded with the first
//!   sample.
//! * **Cumulative**: running mean of every sample seen since the last reset.
//!
//! ## Invariants
//!
//! * The exponential state is re-seeded whenever it is exactly zero, so a
//!   recurrence that lands on `0.0` restarts from the next sample.
//! * Both windows hold a single sample; history lives in the accumulators.

// Internal dependencies
use crate::engine::filter::{Filter1D, Scalar};
use crate::engine::validator::Validator;
use crate::math::cast;
use crate::primitives::errors::SmootherError;
use crate::primitives::window::SampleWindow;

// ============================================================================
// Exponential Moving Average
// ============================================================================

/// Exponentially weighted moving average with smoothing factor `alpha`.
///
/// # Example
///
/// ```
/// use smoothie::prelude::*;
///
/// let mut ema = ExponentialMovingAverage1D::<f64>::new(0.5).unwrap();
/// assert_eq!(ema.next(10.0), 10.0);
/// assert_eq!(ema.next(20.0), 15.0);
/// assert_eq!(ema.next(30.0), 22.5);
/// ```
#[derive(Debug, Clone)]
pub struct ExponentialMovingAverage1D<T> {
    window: SampleWindow<T>,
    alpha: T,
    state: T,
}

impl<T: Scalar> ExponentialMovingAverage1D<T> {
    /// Create an exponential moving average; `alpha` must lie in `[0, 1]`.
    pub fn new(alpha: T) -> Result<Self, SmootherError> {
        Validator::validate_alpha(alpha)?;
        Ok(Self {
            window: SampleWindow::new(1),
            alpha,
            state: T::zero(),
        })
    }

    /// Smoothing factor applied to each new sample.
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Current smoothed value (zero before the first sample).
    pub fn state(&self) -> T {
        self.state
    }
}

impl<T: Scalar> Filter1D<T> for ExponentialMovingAverage1D<T> {
    fn next(&mut self, sample: T) -> T {
        self.window.push(sample);

        if self.state == T::zero() {
            log::trace!("exponential average seeded with {sample:?}");
            self.state = sample;
        } else {
            self.state = self.alpha * sample + (T::one() - self.alpha) * self.state;
        }
        self.state
    }

    fn reset(&mut self) {
        self.window.clear();
        self.state = T::zero();
    }

    fn window(&self) -> &SampleWindow<T> {
        &self.window
    }
}

// ============================================================================
// Cumulative Moving Average
// ============================================================================

/// Running mean of every sample since construction or the last reset.
#[derive(Debug, Clone)]
pub struct CumulativeMovingAverage1D<T> {
    window: SampleWindow<T>,
    average: T,
    count: usize,
}

impl<T: Scalar> CumulativeMovingAverage1D<T> {
    /// Create an empty cumulative average.
    pub fn new() -> Self {
        Self {
            window: SampleWindow::new(1),
            average: T::zero(),
            count: 0,
        }
    }

    /// Number of samples averaged so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Current running mean.
    pub fn average(&self) -> T {
        self.average
    }
}

impl<T: Scalar> Default for CumulativeMovingAverage1D<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Filter1D<T> for CumulativeMovingAverage1D<T> {
    fn next(&mut self, sample: T) -> T {
        self.window.push(sample);
        self.count += 1;
        self.average = self.average + (sample - self.average) / cast(self.count);
        self.average
    }

    fn reset(&mut self) {
        self.window.clear();
        self.average = T::zero();
        self.count = 0;
    }

    fn window(&self) -> &SampleWindow<T> {
        &self.window
    }
}
