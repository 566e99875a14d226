//! Layer 4: 1D Filters
//!
//! # Purpose
//!
//! This layer provides every scalar filter:
//! - Offset shifting
//! - Kernel-weighted averages (simple, weighted, Gaussian)
//! - Median average
//! - Exponential and cumulative recurrences
//! - Fixation (deadband) smoothing
//! - Multi-pass composition of a kernel average
//!
//! Each filter owns its window and accumulators and implements
//! [`Filter1D`](crate::engine::filter::Filter1D).
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: 2D Filters
//!   ↓
//! Layer 4: 1D Filters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// Internal dependencies
use crate::engine::filter::{Filter, Scalar};

/// Constant offset filter.
pub mod offset;

/// Simple, weighted and Gaussian moving averages.
pub mod kernel;

/// Median moving average.
pub mod median;

/// Exponential and cumulative moving averages.
pub mod recurrence;

/// Fixation (deadband) smoothing.
pub mod fixation;

/// Multi-pass moving averages.
pub mod multipass;

use fixation::FixationSmoothFilter1D;
use kernel::{GaussianAverage1D, SimpleMovingAverage1D, WeightedMovingAverage1D};
use median::MedianAverage1D;
use multipass::MultiPassMovingAverage1D;
use offset::OffsetFilter1D;
use recurrence::{CumulativeMovingAverage1D, ExponentialMovingAverage1D};

/// Implement `From<$filter<T>> for Filter<T>` for concrete 1D filters.
macro_rules! impl_into_filter {
    ($($filter:ident),+ $(,)?) => {
        $(
            impl<T: Scalar> From<$filter<T>> for Filter<T> {
                fn from(filter: $filter<T>) -> Self {
                    Filter::one_dimensional(filter)
                }
            }
        )+
    };
}

impl_into_filter!(
    OffsetFilter1D,
    SimpleMovingAverage1D,
    WeightedMovingAverage1D,
    GaussianAverage1D,
    MedianAverage1D,
    ExponentialMovingAverage1D,
    CumulativeMovingAverage1D,
    FixationSmoothFilter1D,
    MultiPassMovingAverage1D,
);
