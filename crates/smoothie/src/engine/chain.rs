//! Ordered filter chains and dimension markers.
//!
//! ## Purpose
//!
//! This module provides the ordered sequence of filters a smoother drives:
//! the output of filter *i* is the input of filter *i + 1*. The chain is
//! parameterized by a dimension marker that fixes the sample type and the
//! filter contract its stages implement.
//!
//! ## Design notes
//!
//! * **Sealed markers**: [`OneDimensional`] and [`TwoDimensional`] are the
//!   only implementors of [`Dimensionality`].
//! * **Attach-time check**: A [`Filter`] of the wrong dimensionality is
//!   rejected by `attach` with `SmootherError::TypeMismatch`.
//! * **Exclusive ownership**: Stages are boxed and owned by the chain.
//!
//! ## Invariants
//!
//! * Stages run in attachment order.
//! * `reset` resets every stage; it never reorders or drops stages.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
#[cfg(feature = "std")]
use std::{boxed::Box, vec::Vec};

// External dependencies
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;

// Internal dependencies
use crate::engine::filter::{Filter, Filter1D, Filter2D, Scalar};
use crate::primitives::dimension::Dimension;
use crate::primitives::errors::SmootherError;

mod sealed {
    pub trait Sealed {}
}

// ============================================================================
// Dimension Markers
// ============================================================================

/// Compile-time dimensionality of a smoother.
pub trait Dimensionality<T: Scalar>: sealed::Sealed + Copy + Debug + 'static {
    /// Value fed into and produced by one step.
    type Sample: Copy + Debug + PartialEq;

    /// Filter contract of a chain stage.
    type Stage: ?Sized + Debug;

    /// Runtime tag of this dimensionality.
    const DIMENSION: Dimension;

    /// Unbox a filter of this dimensionality or report a mismatch.
    fn accept(filter: Filter<T>) -> Result<Box<Self::Stage>, SmootherError>;

    /// Feed one sample through one stage.
    fn advance(stage: &mut Self::Stage, sample: Self::Sample) -> Self::Sample;

    /// Reset one stage.
    fn reset(stage: &mut Self::Stage);

    /// Value reported before any sample was fed.
    fn origin() -> Self::Sample;
}

/// Marker for scalar smoothers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OneDimensional;

/// Marker for X/Y smoothers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TwoDimensional;

impl sealed::Sealed for OneDimensional {}
impl sealed::Sealed for TwoDimensional {}

impl<T: Scalar> Dimensionality<T> for OneDimensional {
    type Sample = T;
    type Stage = dyn Filter1D<T>;
    const DIMENSION: Dimension = Dimension::One;

    fn accept(filter: Filter<T>) -> Result<Box<Self::Stage>, SmootherError> {
        match filter {
            Filter::OneD(stage) => Ok(stage),
            Filter::TwoD(_) => Err(SmootherError::TypeMismatch {
                expected: Dimension::One,
                found: Dimension::Two,
            }),
        }
    }

    #[inline]
    fn advance(stage: &mut Self::Stage, sample: T) -> T {
        stage.next(sample)
    }

    fn reset(stage: &mut Self::Stage) {
        stage.reset();
    }

    fn origin() -> T {
        T::zero()
    }
}

impl<T: Scalar> Dimensionality<T> for TwoDimensional {
    type Sample = (T, T);
    type Stage = dyn Filter2D<T>;
    const DIMENSION: Dimension = Dimension::Two;

    fn accept(filter: Filter<T>) -> Result<Box<Self::Stage>, SmootherError> {
        match filter {
            Filter::TwoD(stage) => Ok(stage),
            Filter::OneD(_) => Err(SmootherError::TypeMismatch {
                expected: Dimension::Two,
                found: Dimension::One,
            }),
        }
    }

    #[inline]
    fn advance(stage: &mut Self::Stage, (x, y): (T, T)) -> (T, T) {
        stage.next(x, y)
    }

    fn reset(stage: &mut Self::Stage) {
        stage.reset();
    }

    fn origin() -> (T, T) {
        (T::zero(), T::zero())
    }
}

// ============================================================================
// Filter Chain
// ============================================================================

/// Ordered, exclusively owned sequence of filters of one dimensionality.
pub struct FilterChain<T: Scalar, D: Dimensionality<T>> {
    stages: Vec<Box<D::Stage>>,
    marker: PhantomData<fn() -> (T, D)>,
}

impl<T: Scalar, D: Dimensionality<T>> FilterChain<T, D> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            marker: PhantomData,
        }
    }

    /// Append a filter after the current last stage.
    pub fn attach(&mut self, filter: Filter<T>) -> Result<(), SmootherError> {
        let found = filter.dimension();
        let stage = D::accept(filter).inspect_err(|_| {
            log::trace!("rejected {found} filter for {} chain", D::DIMENSION);
        })?;

        log::trace!(
            "attached {} filter as stage {}",
            D::DIMENSION,
            self.stages.len()
        );
        self.stages.push(stage);
        Ok(())
    }

    /// Feed `sample` through every stage in order.
    #[inline]
    pub fn pipe(&mut self, sample: D::Sample) -> D::Sample {
        self.stages
            .iter_mut()
            .fold(sample, |acc, stage| D::advance(stage.as_mut(), acc))
    }

    /// Reset every stage to its freshly constructed state.
    pub fn reset(&mut self) {
        for stage in self.stages.iter_mut() {
            D::reset(stage.as_mut());
        }
    }

    /// Attached stages, in order.
    pub fn stages(&self) -> &[Box<D::Stage>] {
        &self.stages
    }

    /// Number of attached stages.
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if no filter is attached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<T: Scalar, D: Dimensionality<T>> Default for FilterChain<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, D: Dimensionality<T>> Debug for FilterChain<T, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("dimension", &D::DIMENSION)
            .field("stages", &self.stages)
            .finish()
    }
}
