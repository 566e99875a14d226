//! Continuous adapter for sample-by-sample smoothing.
//!
//! ## Purpose
//!
//! This module provides the continuous execution adapter: every call to
//! `add` pipes one sample through the attached filters in order and keeps the
//! result available via `get`. Filter state persists between calls.
//!
//! ## Design notes
//!
//! * **Builder**: [`ContinuousSmootherBuilder`] collects filters and yields a
//!   ready [`ContinuousSmoother`]; no smoother exists before `build()`.
//! * **No reset on build**: Building only hands the chain over; filters keep
//!   whatever state they already had.
//! * **Dimension**: The marker `D` fixes the sample type: `add(x)` for
//!   [`OneDimensional`], `add(x, y)` for [`TwoDimensional`].
//!
//! ## Key concepts
//!
//! * **Chaining**: Output of filter *i* is the input of filter *i + 1*.
//! * **Last value**: `get` returns the output of the most recent `add`, or
//!   zero before any sample.
//!
//! ## Invariants
//!
//! * Filters run in attachment order.
//! * Filters attached after `build()` start from their current state.
//!
//! ## Non-goals
//!
//! * This adapter does not buffer input or produce whole output sequences.
//! * This adapter does not validate sample values.

// External dependencies
use core::fmt::{self, Debug, Formatter};

// Internal dependencies
use crate::engine::chain::{Dimensionality, FilterChain, OneDimensional, TwoDimensional};
use crate::engine::filter::{Filter, Scalar};
use crate::primitives::dimension::Dimension;
use crate::primitives::errors::SmootherError;

// ============================================================================
// Continuous Smoother Builder
// ============================================================================

/// Builder for a continuous smoother.
pub struct ContinuousSmootherBuilder<T: Scalar, D: Dimensionality<T>> {
    /// Filters attached so far, in order.
    chain: FilterChain<T, D>,
}

impl<T: Scalar, D: Dimensionality<T>> ContinuousSmootherBuilder<T, D> {
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

    /// Build the continuous smoother.
    pub fn build(self) -> ContinuousSmoother<T, D> {
        log::debug!(
            "built continuous {} smoother with {} filter(s)",
            D::DIMENSION,
            self.chain.len()
        );
        ContinuousSmoother::from_chain(self.chain)
    }
}

impl<T: Scalar, D: Dimensionality<T>> Debug for ContinuousSmootherBuilder<T, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContinuousSmootherBuilder")
            .field("chain", &self.chain)
            .finish()
    }
}

// ============================================================================
// Continuous Smoother
// ============================================================================

/// Smoother processing one sample (or X/Y pair) per call.
///
/// # Example
///
/// ```
/// use smoothie::prelude::*;
///
/// let mut smoother = Smoother::<f64>::new()
///     .one_dimensional()
///     .continuous()
///     .attach_filter(SimpleMovingAverage1D::new(2)?)?
///     .attach_filter(OffsetFilter1D::new(1.0))?
///     .build();
///
/// assert_eq!(smoother.add_and_get(10.0), 11.0);
/// smoother.add(20.0);
/// assert_eq!(smoother.get(), 16.0);
/// # Result::<(), SmootherError>::Ok(())
/// ```
pub struct ContinuousSmoother<T: Scalar, D: Dimensionality<T>> {
    chain: FilterChain<T, D>,
    last: D::Sample,
}

impl<T: Scalar, D: Dimensionality<T>> ContinuousSmoother<T, D> {
    pub(crate) fn from_chain(chain: FilterChain<T, D>) -> Self {
        Self {
            chain,
            last: D::origin(),
        }
    }

    /// Mark the smoother built.
    ///
    /// Continuous smoothers are already live once built, so this leaves every
    /// filter's state untouched.
    pub fn build(&mut self) {
        log::debug!(
            "continuous {} smoother rebuilt with {} filter(s); state kept",
            D::DIMENSION,
            self.chain.len()
        );
    }

    /// Append a filter after the current last filter.
    ///
    /// The new filter starts empty; the existing filters keep their state.
    pub fn attach_filter<F>(&mut self, filter: F) -> Result<(), SmootherError>
    where
        F: Into<Filter<T>>,
    {
        self.chain.attach(filter.into())
    }

    /// Reset every filter and forget the last value.
    pub fn reset(&mut self) {
        self.chain.reset();
        self.last = D::origin();
    }

    /// The attached filters, in order.
    pub fn filters(&self) -> &FilterChain<T, D> {
        &self.chain
    }

    /// Number of attached filters.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Check if no filter is attached.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Dimensionality of the accepted samples.
    pub fn dimension(&self) -> Dimension {
        D::DIMENSION
    }

    /// Pipe one sample through the chain and remember the result.
    #[inline]
    pub(crate) fn feed(&mut self, sample: D::Sample) -> D::Sample {
        self.last = self.chain.pipe(sample);
        self.last
    }

    /// Output of the most recent sample.
    #[inline]
    pub(crate) fn last(&self) -> D::Sample {
        self.last
    }
}

impl<T: Scalar> ContinuousSmoother<T, OneDimensional> {
    /// Feed one sample through every filter.
    pub fn add(&mut self, sample: T) {
        self.feed(sample);
    }

    /// Output of the most recent `add` (zero before the first).
    pub fn get(&self) -> T {
        self.last()
    }

    /// Feed one sample and return the filtered value.
    pub fn add_and_get(&mut self, sample: T) -> T {
        self.feed(sample)
    }
}

impl<T: Scalar> ContinuousSmoother<T, TwoDimensional> {
    /// Feed one `(x, y)` pair through every filter.
    pub fn add(&mut self, x: T, y: T) {
        self.feed((x, y));
    }

    /// Output of the most recent `add` (zeros before the first).
    pub fn get(&self) -> (T, T) {
        self.last()
    }

    /// Feed one `(x, y)` pair and return the filtered pair.
    pub fn add_and_get(&mut self, x: T, y: T) -> (T, T) {
        self.feed((x, y))
    }
}

impl<T: Scalar, D: Dimensionality<T>> Debug for ContinuousSmoother<T, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContinuousSmoother")
            .field("chain", &self.chain)
            .field("last", &self.last)
            .finish()
    }
}
