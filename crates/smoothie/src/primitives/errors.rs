//! Error types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions raised while configuring filters
//! and smoothers: out-of-domain construction parameters, filters of the wrong
//! dimensionality, and mismatched batch inputs.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value (window size, alpha, ...).
//! * **Immediate**: Errors are returned by the constructor or attach call that
//!   violates the contract, never deferred to a later `next`/`add`.
//! * **No-std**: Derived with `thiserror`, which works without `std`.
//!
//! ## Key concepts
//!
//! 1. **Invalid configuration**: window size, standard deviation, alpha,
//!    number of passes, unsupported multi-pass kernel.
//! 2. **Type mismatch**: attaching a 1D filter to a 2D smoother or vice versa.
//! 3. **Invalid input**: X and Y signals of different lengths in 2D list mode.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Numeric input is never checked for finiteness.

// External dependencies
use thiserror::Error;

// Internal dependencies
use crate::primitives::dimension::Dimension;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for filter construction and smoother configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmootherError {
    /// Window size must be at least 1.
    #[error("Invalid window_size: {0} (must be greater than 0)")]
    InvalidWindowSize(usize),

    /// Gaussian standard deviation must be strictly positive.
    #[error("Invalid std_dev: {0} (must be > 0)")]
    InvalidStdDev(f64),

    /// Exponential smoothing factor must lie in [0, 1].
    #[error("Invalid alpha: {0} (must be between 0 and 1)")]
    InvalidAlpha(f64),

    /// Multi-pass filters need at least one pass.
    #[error("Invalid num_passes: {0} (must be greater than 0)")]
    InvalidPasses(usize),

    /// The requested average kind cannot be used as a multi-pass stage.
    #[error("Unsupported average filter type for multi-pass filtering: {0}")]
    UnsupportedAverageType(&'static str),

    /// Filter dimensionality does not match the smoother.
    #[error("Filter dimension mismatch: smoother expects a {expected} filter, got {found}")]
    TypeMismatch {
        /// Dimensionality declared by the smoother.
        expected: Dimension,
        /// Dimensionality of the rejected filter.
        found: Dimension,
    },

    /// `x` and `y` signals must have the same number of samples.
    #[error("Length mismatch: x has {x_len} samples, y has {y_len}")]
    MismatchedInputs {
        /// Number of samples in the `x` signal.
        x_len: usize,
        /// Number of samples in the `y` signal.
        y_len: usize,
    },
}

// ============================================================================
// Error Classification
// ============================================================================

/// Coarse classification of a [`SmootherError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Out-of-domain construction parameter.
    InvalidConfiguration,

    /// Filter of the wrong dimensionality.
    TypeMismatch,

    /// Malformed batch input.
    InvalidInput,
}

impl SmootherError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidWindowSize(_)
            | Self::InvalidStdDev(_)
            | Self::InvalidAlpha(_)
            | Self::InvalidPasses(_)
            | Self::UnsupportedAverageType(_) => ErrorKind::InvalidConfiguration,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::MismatchedInputs { .. } => ErrorKind::InvalidInput,
        }
    }

    /// Whether this error reports an invalid construction parameter.
    pub fn is_invalid_configuration(&self) -> bool {
        self.kind() == ErrorKind::InvalidConfiguration
    }
}
