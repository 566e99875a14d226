//! Parameter validation for filter construction.
//!
//! ## Purpose
//!
//! This module checks filter and smoother parameters against their domains
//! before any state is allocated. Every check returns the precise
//! [`SmootherError`] variant carrying the offending value.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Each constructor validates before building state.
//! * **Generics**: Float checks are generic over `Float` types and report the
//!   offending value as `f64`.
//!
//! ## Key concepts
//!
//! * **Window size**: at least one sample.
//! * **Standard deviation**: strictly positive (NaN rejected).
//! * **Alpha**: closed interval `[0, 1]` (NaN rejected).
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * Sample values are never validated; NaN and infinity propagate.
//! * Offsets and fixation thresholds accept any value.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmootherError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for filter parameters.
///
/// Provides static methods returning `Result<(), SmootherError>`.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Window Validation
    // ========================================================================

    /// Validate the number of samples a filter buffers.
    pub fn validate_window_size(window_size: usize) -> Result<(), SmootherError> {
        if window_size == 0 {
            return Err(SmootherError::InvalidWindowSize(window_size));
        }
        Ok(())
    }

    /// Validate the number of chained passes of a multi-pass filter.
    pub fn validate_passes(num_passes: usize) -> Result<(), SmootherError> {
        if num_passes == 0 {
            return Err(SmootherError::InvalidPasses(num_passes));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a Gaussian kernel standard deviation.
    pub fn validate_std_dev<T: Float>(std_dev: T) -> Result<(), SmootherError> {
        if std_dev.is_nan() || std_dev <= T::zero() {
            return Err(SmootherError::InvalidStdDev(
                std_dev.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the exponential smoothing factor.
    pub fn validate_alpha<T: Float>(alpha: T) -> Result<(), SmootherError> {
        if alpha.is_nan() || alpha < T::zero() || alpha > T::one() {
            return Err(SmootherError::InvalidAlpha(
                alpha.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate that paired X/Y signals have the same length.
    pub fn validate_signal_lengths<T>(x: &[T], y: &[T]) -> Result<(), SmootherError> {
        if x.len() != y.len() {
            return Err(SmootherError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(())
    }
}
