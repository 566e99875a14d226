//! Kernel-weighted moving averages.
//!
//! ## Purpose
//!
//! This module provides the three filters that average their window with a
//! fixed weight sequence: [`SimpleMovingAverage1D`] (uniform weights),
//! [`WeightedMovingAverage1D`] (linear weights) and [`GaussianAverage1D`]
//! (Gaussian weights).
//!
//! ## Design notes
//!
//! * **Shared algorithm**: All three delegate to one windowed kernel average;
//!   they differ only in the weights built at construction.
//! * **Partial windows**: Until the window fills, only the last `L` weights
//!   are used and normalized by their own sum.
//!
//! ## Key concepts
//!
//! * **Weighted ordering**: `linspace(1, 0, W)` gives the *oldest* retained
//!   sample the highest weight and the newest sample weight zero.
//! * **Gaussian default**: `std_dev = window_size / 3` when not given.
//!
//! ## Invariants
//!
//! * `weights().len() == window_size()`.
//! * Output is `sum(window[i] * w[i]) / sum(w)` over the weights in use.

// Internal dependencies
use crate::engine::filter::{Filter1D, Scalar};
use crate::engine::validator::Validator;
use crate::math::cast;
use crate::math::kernel::KernelWeights;
use crate::primitives::errors::SmootherError;
use crate::primitives::window::SampleWindow;

// ============================================================================
// Shared Kernel Average
// ============================================================================

/// Window plus the immutable weights applied to it.
#[derive(Debug, Clone)]
struct KernelAverage<T> {
    window: SampleWindow<T>,
    weights: KernelWeights<T>,
}

impl<T: Scalar> KernelAverage<T> {
    fn new(weights: KernelWeights<T>) -> Self {
        Self {
            window: SampleWindow::new(weights.len()),
            weights,
        }
    }

    #[inline]
    fn next(&mut self, sample: T) -> T {
        self.window.push(sample);
        self.weights
            .weighted_average(self.window.iter(), self.window.len())
    }
}

/// Implement `Filter1D` and weight accessors for a `KernelAverage` wrapper.
macro_rules! kernel_filter {
    ($filter:ident) => {
        impl<T: Scalar> $filter<T> {
            /// Kernel weights, oldest sample first.
            #[inline]
            pub fn weights(&self) -> &[T] {
                self.inner.weights.as_slice()
            }

            /// Sum of all kernel weights.
            #[inline]
            pub fn weights_sum(&self) -> T {
                self.inner.weights.sum()
            }
        }

        impl<T: Scalar> Filter1D<T> for $filter<T> {
            #[inline]
            fn next(&mut self, sample: T) -> T {
                self.inner.next(sample)
            }

            fn reset(&mut self) {
                self.inner.window.clear();
            }

            fn window(&self) -> &SampleWindow<T> {
                &self.inner.window
            }
        }
    };
}

// ============================================================================
// Simple Moving Average
// ============================================================================

/// Arithmetic mean of the window.
///
/// # Example
///
/// ```
/// use smoothie::prelude::*;
///
/// let mut sma = SimpleMovingAverage1D::<f64>::new(2).unwrap();
/// assert_eq!(sma.next(10.0), 10.0);
/// assert_eq!(sma.next(20.0), 15.0);
/// assert_eq!(sma.next(30.0), 25.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage1D<T> {
    inner: KernelAverage<T>,
}

impl<T: Scalar> SimpleMovingAverage1D<T> {
    /// Create a simple moving average over `window_size` samples.
    pub fn new(window_size: usize) -> Result<Self, SmootherError> {
        Validator::validate_window_size(window_size)?;
        Ok(Self {
            inner: KernelAverage::new(KernelWeights::uniform(window_size)),
        })
    }
}

kernel_filter!(SimpleMovingAverage1D);

// ============================================================================
// Weighted Moving Average
// ============================================================================

/// Linearly weighted average with weights `linspace(1, 0, window_size)`.
///
/// The oldest retained sample carries weight 1 and the newest weight 0. A
/// window of one sample therefore returns its input, and partial windows
/// whose weights sum to zero return zero.
#[derive(Debug, Clone)]
pub struct WeightedMovingAverage1D<T> {
    inner: KernelAverage<T>,
}

impl<T: Scalar> WeightedMovingAverage1D<T> {
    /// Create a weighted moving average over `window_size` samples.
    pub fn new(window_size: usize) -> Result<Self, SmootherError> {
        Validator::validate_window_size(window_size)?;
        Ok(Self {
            inner: KernelAverage::new(KernelWeights::linear(T::one(), T::zero(), window_size)),
        })
    }
}

kernel_filter!(WeightedMovingAverage1D);

// ============================================================================
// Gaussian Average
// ============================================================================

/// Gaussian-weighted average of the window.
///
/// Weight `i` is `exp(-0.5 * (d_i / std_dev)^2)` with distances
/// `d = linspace(window_size, 0, window_size)`, so the newest sample has
/// weight 1.
#[derive(Debug, Clone)]
pub struct GaussianAverage1D<T> {
    inner: KernelAverage<T>,
    std_dev: T,
}

impl<T: Scalar> GaussianAverage1D<T> {
    /// Create a Gaussian average over `window_size` samples.
    ///
    /// `std_dev` defaults to `window_size / 3` and must be positive.
    pub fn new(window_size: usize, std_dev: Option<T>) -> Result<Self, SmootherError> {
        Validator::validate_window_size(window_size)?;
        let std_dev = std_dev.unwrap_or_else(|| cast::<T, _>(window_size) / cast(3.0));
        Validator::validate_std_dev(std_dev)?;

        Ok(Self {
            inner: KernelAverage::new(KernelWeights::gaussian(window_size, std_dev)),
            std_dev,
        })
    }

    /// Standard deviation of the kernel.
    pub fn std_dev(&self) -> T {
        self.std_dev
    }
}

kernel_filter!(GaussianAverage1D);
