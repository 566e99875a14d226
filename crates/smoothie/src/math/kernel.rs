//! Kernel weights for windowed moving averages.
//!
//! ## Purpose
//!
//! This module builds the immutable weight sequences used by kernel-weighted
//! filters and applies them to a (possibly partially filled) sample window.
//!
//! ## Design notes
//!
//! * **Alignment**: Index 0 weights the oldest retained sample, the last
//!   index weights the most recent one.
//! * **Normalization**: Weights need not sum to 1; every average divides by
//!   the sum of the weights actually used.
//! * **Partial windows**: A window holding `L < n` samples uses the last `L`
//!   weights only, normalized by their own sum.
//!
//! ## Key concepts
//!
//! * **Uniform**: `1 / n` everywhere (simple moving average).
//! * **Linear**: inclusive `linspace(start, stop, n)` (weighted and fixation filters).
//! * **Gaussian**: `exp(-0.5 * (linspace(n, 0, n)[i] / std_dev)^2)`.
//!
//! ## Invariants
//!
//! * `weights.len() == n` and `sum == weights.iter().sum()`.
//! * Weights are never mutated after construction.
//!
//! ## Non-goals
//!
//! * This module does not validate `n` or `std_dev` (see the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::cast;

// ============================================================================
// Linear Spacing
// ============================================================================

/// `n` evenly spaced values from `start` to `stop`, both endpoints included.
///
/// A single point yields `[start]`.
pub fn linspace<T: Float>(start: T, stop: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / cast(n - 1);
            let mut values: Vec<T> = (0..n).map(|i| start + step * cast(i)).collect();
            // Pin the endpoint against accumulated rounding.
            values[n - 1] = stop;
            values
        }
    }
}

// ============================================================================
// Kernel Weights
// ============================================================================

/// Immutable weight sequence with its precomputed sum.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelWeights<T> {
    weights: Vec<T>,
    sum: T,
}

impl<T: Float> KernelWeights<T> {
    /// Wrap an arbitrary weight sequence.
    pub fn from_weights(weights: Vec<T>) -> Self {
        let sum = weights.iter().fold(T::zero(), |acc, &w| acc + w);
        Self { weights, sum }
    }

    /// Uniform weights `1 / n`.
    pub fn uniform(n: usize) -> Self {
        let w = T::one() / cast(n);
        Self::from_weights(vec![w; n])
    }

    /// Linearly spaced weights from `start` (oldest) to `stop` (newest).
    pub fn linear(start: T, stop: T, n: usize) -> Self {
        Self::from_weights(linspace(start, stop, n))
    }

    /// Gaussian weights over the distances `linspace(n, 0, n)`.
    pub fn gaussian(n: usize, std_dev: T) -> Self {
        let half = cast::<T, _>(0.5);
        let weights = linspace(cast(n), T::zero(), n)
            .into_iter()
            .map(|d| {
                let z = d / std_dev;
                (-half * z * z).exp()
            })
            .collect();
        Self::from_weights(weights)
    }

    /// All weights, oldest first.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.weights
    }

    /// Sum of all weights.
    #[inline]
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Number of weights (the window size).
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// The last `len` weights, aligned with a window holding `len` samples.
    #[inline]
    pub fn tail(&self, len: usize) -> &[T] {
        let offset = self.weights.len().saturating_sub(len);
        &self.weights[offset..]
    }

    /// Normalized weighted average of `samples` (oldest first).
    ///
    /// `len` is the number of samples yielded by the iterator. A partial
    /// window whose weights sum to zero averages to zero.
    pub fn weighted_average<I>(&self, samples: I, len: usize) -> T
    where
        I: IntoIterator<Item = T>,
    {
        let n = self.weights.len();
        debug_assert!(len <= n, "weighted_average: more samples than weights");

        let (weights, weights_sum) = if len < n {
            let tail = self.tail(len);
            let partial = tail.iter().fold(T::zero(), |acc, &w| acc + w);
            if partial == T::zero() {
                return T::zero();
            }
            (tail, partial)
        } else {
            (self.weights.as_slice(), self.sum)
        };

        let weighted_sum = samples
            .into_iter()
            .zip(weights.iter())
            .fold(T::zero(), |acc, (s, &w)| acc + s * w);

        weighted_sum / weights_sum
    }
}
