//! List adapter for whole-signal smoothing.
//!
//! ## Purpose
//!
//! This module provides the list execution adapter: `apply_filter` runs an
//! entire signal through the attached filters and returns every output in
//! input order.
//!
//! ## Design notes
//!
//! * **Delegate**: Samples flow through an owned [`ContinuousSmoother`].
//! * **Build resets**: `build()` resets every filter in the chain, so a
//!   signal filtered right after `build()` always yields the same output.
//! * **Late attach**: Filters attached after `build()` join the live chain
//!   without resetting the others.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Results are produced strictly in input order.
//! * State carries over between `apply_filter` calls until the next `build()`.
//!
//! ## Non-goals
//!
//! * This adapter does not process signals in parallel or out of order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Debug, Formatter};

// Internal dependencies
use crate::adapters::continuous::ContinuousSmoother;
use crate::engine::chain::{Dimensionality, FilterChain, OneDimensional, TwoDimensional};
use crate::engine::filter::{Filter, Scalar};
use crate::engine::validator::Validator;
use crate::primitives::dimension::Dimension;
use crate::primitives::errors::SmootherError;

// ============================================================================
// List Smoother Builder
// ============================================================================

/// Builder for a list smoother.
pub struct ListSmootherBuilder<T: Scalar, D: Dimensionality<T>> {
    /// Filters attached so far, in order.
    chain: FilterChain<T, D>,
}

impl<T: Scalar, D: Dimensionality<T>> ListSmootherBuilder<T, D> {
    /// Create a builder with no filters.
    pub(crate) fn new() -> Self {
        Self {
            chain: FilterChain::new(),
        }
    }

    /// Append a filter to the chain.
    ///
    /// Fails with `TypeMismatch` if the filter's dimensionality differs from
    /// the smoother's.
    pub fn attach_filter<F>(mut self, filter: F) -> Result<Self, SmootherError>
    where
        F: Into<Filter<T>>,
    {
        self.chain.attach(filter.into())?;
        Ok(self)
    }

    /// Number of filters attached so far.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Check if no filter has been attached yet.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Build the list smoother, resetting every attached filter.
    pub fn build(self) -> ListSmoother<T, D> {
        let mut smoother = ListSmoother {
            delegate: ContinuousSmoother::from_chain(self.chain),
        };
        smoother.build();
        smoother
    }
}

impl<T: Scalar, D: Dimensionality<T>> Debug for ListSmootherBuilder<T, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSmootherBuilder")
            .field("chain", &self.chain)
            .finish()
    }
}

// ============================================================================
// List Smoother
// ============================================================================

/// Smoother processing whole signals.
///
/// # Example
///
/// ```
/// use smoothie::prelude::*;
///
/// let mut smoother = Smoother::<f64>::new()
///     .one_dimensional()
///     .list_based()
///     .attach_filter(MedianAverage1D::new(3)?)?
///     .build();
///
/// let signal = [10.0, 20.0, 30.0, 40.0, 50.0];
/// assert_eq!(smoother.apply_filter(&signal), vec![10.0, 15.0, 20.0, 30.0, 40.0]);
///
/// // Rebuilding resets the filters, so the run is reproduced exactly.
/// smoother.build();
/// assert_eq!(smoother.apply_filter(&signal), vec![10.0, 15.0, 20.0, 30.0, 40.0]);
/// # Result::<(), SmootherError>::Ok(())
/// ```
pub struct ListSmoother<T: Scalar, D: Dimensionality<T>> {
    delegate: ContinuousSmoother<T, D>,
}

impl<T: Scalar, D: Dimensionality<T>> ListSmoother<T, D> {
    /// Reset every attached filter and the last value.
    ///
    /// Calling `build()` before each `apply_filter` makes runs independent.
    pub fn build(&mut self) {
        self.delegate.reset();
        log::debug!(
            "built list {} smoother with {} filter(s); chain reset",
            D::DIMENSION,
            self.delegate.len()
        );
    }

    /// Append a filter to the live chain without resetting the others.
    pub fn attach_filter<F>(&mut self, filter: F) -> Result<(), SmootherError>
    where
        F: Into<Filter<T>>,
    {
        self.delegate.attach_filter(filter)
    }

    /// Reset every filter and forget the last value.
    pub fn reset(&mut self) {
        self.delegate.reset();
    }

    /// The attached filters, in order.
    pub fn filters(&self) -> &FilterChain<T, D> {
        self.delegate.filters()
    }

    /// Number of attached filters.
    pub fn len(&self) -> usize {
        self.delegate.len()
    }

    /// Check if no filter is attached.
    pub fn is_empty(&self) -> bool {
        self.delegate.is_empty()
    }

    /// Dimensionality of the accepted signals.
    pub fn dimension(&self) -> Dimension {
        D::DIMENSION
    }
}

impl<T: Scalar> ListSmoother<T, OneDimensional> {
    /// Filter every sample of `signal` in order.
    pub fn apply_filter(&mut self, signal: &[T]) -> Vec<T> {
        signal
            .iter()
            .map(|&sample| self.delegate.add_and_get(sample))
            .collect()
    }

    /// Output for the last sample filtered (zero before any).
    pub fn get(&self) -> T {
        self.delegate.get()
    }
}

impl<T: Scalar> ListSmoother<T, TwoDimensional> {
    /// Filter every `(signal_x[i], signal_y[i])` pair in order.
    ///
    /// Returns the filtered X and Y signals. Fails with `MismatchedInputs`
    /// before touching any filter when the lengths differ.
    pub fn apply_filter(
        &mut self,
        signal_x: &[T],
        signal_y: &[T],
    ) -> Result<(Vec<T>, Vec<T>), SmootherError> {
        Validator::validate_signal_lengths(signal_x, signal_y)?;

        Ok(signal_x
            .iter()
            .zip(signal_y.iter())
            .map(|(&x, &y)| self.delegate.add_and_get(x, y))
            .unzip())
    }

    /// Output for the last pair filtered (zeros before any).
    pub fn get(&self) -> (T, T) {
        self.delegate.get()
    }
}

impl<T: Scalar, D: Dimensionality<T>> Debug for ListSmoother<T, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSmoother")
            .field("delegate", &self.delegate)
            .finish()
    }
}
