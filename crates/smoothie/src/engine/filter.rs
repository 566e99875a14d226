//! Filter contracts.
//!
//! ## Purpose
//!
//! This module defines the capability interfaces every filter implements:
//! [`Filter1D`] for scalar streams and [`Filter2D`] for lockstep X/Y streams,
//! plus the dimension-erased [`Filter`] handle smoothers accept.
//!
//! ## Design notes
//!
//! * **Capabilities, not hierarchy**: Each filter is an independent type that
//!   owns exactly the state it needs (window, weights, accumulators).
//! * **Dynamic dimension check**: Smoothers receive filters as [`Filter`] so a
//!   wrong-dimension attach can be reported as an error.
//!
//! ## Invariants
//!
//! * A filter's window never holds more than `window_size` samples.
//! * `next` always processes the window *after* the new sample is appended.
//! * `reset` returns a filter to its freshly constructed state.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;
use num_traits::float::TotalOrder;

// Internal dependencies
use crate::primitives::dimension::Dimension;
use crate::primitives::window::SampleWindow;

// ============================================================================
// Scalar
// ============================================================================

/// Sample type accepted by filters: `f32`, `f64`, or any other `Float`.
pub trait Scalar: Float + TotalOrder + Debug + 'static {}

impl<T: Float + TotalOrder + Debug + 'static> Scalar for T {}

// ============================================================================
// Filter Contracts
// ============================================================================

/// Stateful windowed transform over a stream of scalars.
pub trait Filter1D<T: Scalar>: Debug {
    /// Buffer `sample` and return the filtered value.
    fn next(&mut self, sample: T) -> T;

    /// Clear the window and every accumulator.
    fn reset(&mut self);

    /// Window of the most recent samples.
    fn window(&self) -> &SampleWindow<T>;

    /// Maximum number of buffered samples.
    fn window_size(&self) -> usize {
        self.window().capacity()
    }
}

/// Stateful windowed transform over lockstep X and Y streams.
pub trait Filter2D<T: Scalar>: Debug {
    /// Buffer one `(x, y)` pair and return the filtered pair.
    fn next(&mut self, x: T, y: T) -> (T, T);

    /// Clear both windows and every accumulator.
    fn reset(&mut self);

    /// Windows of the X and Y channels.
    fn windows(&self) -> (&SampleWindow<T>, &SampleWindow<T>);

    /// Window sizes of the X and Y channels.
    fn window_sizes(&self) -> (usize, usize) {
        let (x, y) = self.windows();
        (x.capacity(), y.capacity())
    }
}

impl<T: Scalar, F: Filter1D<T> + ?Sized> Filter1D<T> for Box<F> {
    fn next(&mut self, sample: T) -> T {
        (**self).next(sample)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn window(&self) -> &SampleWindow<T> {
        (**self).window()
    }
}

// ============================================================================
// Dimension-Erased Handle
// ============================================================================

/// A boxed filter of either dimensionality.
#[derive(Debug)]
pub enum Filter<T: Scalar> {
    /// Scalar filter.
    OneD(Box<dyn Filter1D<T>>),

    /// X/Y filter.
    TwoD(Box<dyn Filter2D<T>>),
}

impl<T: Scalar> Filter<T> {
    /// Box a 1D filter.
    pub fn one_dimensional<F: Filter1D<T> + 'static>(filter: F) -> Self {
        Self::OneD(Box::new(filter))
    }

    /// Box a 2D filter.
    pub fn two_dimensional<F: Filter2D<T> + 'static>(filter: F) -> Self {
        Self::TwoD(Box::new(filter))
    }

    /// Dimensionality of the wrapped filter.
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::OneD(_) => Dimension::One,
            Self::TwoD(_) => Dimension::Two,
        }
    }
}

impl<T: Scalar> From<Box<dyn Filter1D<T>>> for Filter<T> {
    fn from(filter: Box<dyn Filter1D<T>>) -> Self {
        Self::OneD(filter)
    }
}

impl<T: Scalar> From<Box<dyn Filter2D<T>>> for Filter<T> {
    fn from(filter: Box<dyn Filter2D<T>>) -> Self {
        Self::TwoD(filter)
    }
}
