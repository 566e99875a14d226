//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the filters:
//! - Kernel weight construction and normalized window averaging
//! - Median, mean, standard deviation and weighted mean
//!
//! These are reusable building blocks with no filter-specific state.
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
//! Layer 4: 1D Filters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use num_traits::{Float, ToPrimitive};

/// Kernel weights for windowed averages.
pub mod kernel;

/// Order and dispersion statistics.
pub mod statistics;

/// Convert a primitive number into `T`.
///
/// Every primitive is representable by a `Float` (possibly as infinity), so
/// the NaN fallback is never observed for `f32`/`f64`.
#[inline]
pub(crate) fn cast<T: Float, N: ToPrimitive>(value: N) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
