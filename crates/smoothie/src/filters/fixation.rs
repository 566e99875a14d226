//! Fixation (deadband) smoothing.
//!
//! ## Purpose
//!
//! This module provides [`FixationSmoothFilter1D`], which holds its output at
//! a settled "fixation" value while the signal jitters around it and lets
//! real movement through unfiltered.
//!
//! ## Key concepts
//!
//! Per sample, with `sd` the population standard deviation of the window:
//!
//! 1. If `|sd| <= threshold` and `|fixation - sample| <= threshold`, the
//!    current fixation is returned unchanged.
//! 2. Otherwise the fixation is recomputed as the weighted mean of the window
//!    (weights `linspace(0.2, 1.0, window_size)`, newest heaviest) and the raw
//!    sample is returned.
//!
//! ## Invariants
//!
//! * The fixation starts at zero.
//! * A negative threshold never freezes, so every sample passes through.

// Internal dependencies
use crate::engine::filter::{Filter1D, Scalar};
use crate::engine::validator::Validator;
use crate::math::cast;
use crate::math::kernel::KernelWeights;
use crate::math::statistics::{std_dev, weighted_mean};
use crate::primitives::errors::SmootherError;
use crate::primitives::window::SampleWindow;

/// Deadband filter freezing its output within `threshold` of a fixation.
#[derive(Debug, Clone)]
pub struct FixationSmoothFilter1D<T> {
    window: SampleWindow<T>,
    weights: KernelWeights<T>,
    threshold: T,
    fixation: T,
}

impl<T: Scalar> FixationSmoothFilter1D<T> {
    /// Create a fixation filter over `window_size` samples.
    ///
    /// Any `threshold` is accepted.
    pub fn new(window_size: usize, threshold: T) -> Result<Self, SmootherError> {
        Validator::validate_window_size(window_size)?;
        Ok(Self {
            window: SampleWindow::new(window_size),
            weights: KernelWeights::linear(cast(0.2), T::one(), window_size),
            threshold,
            fixation: T::zero(),
        })
    }

    /// Deadband half-width.
    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// Current fixation value.
    pub fn fixation(&self) -> T {
        self.fixation
    }

    /// Weights used to recompute the fixation, oldest sample first.
    pub fn weights(&self) -> &[T] {
        self.weights.as_slice()
    }
}

impl<T: Scalar> Filter1D<T> for FixationSmoothFilter1D<T> {
    fn next(&mut self, sample: T) -> T {
        self.window.push(sample);

        let len = self.window.len();
        let spread = std_dev(self.window.iter(), len);
        if spread.abs() <= self.threshold && (self.fixation - sample).abs() <= self.threshold {
            return self.fixation;
        }

        self.fixation = weighted_mean(self.window.iter(), self.weights.tail(len));
        sample
    }

    fn reset(&mut self) {
        self.window.clear();
        self.fixation = T::zero();
    }

    fn window(&self) -> &SampleWindow<T> {
        &self.window
    }
}
