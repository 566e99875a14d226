//! Reusable scratch space for filters.
//!
//! ## Purpose
//!
//! Some filters (median) need a mutable copy of their window on every sample.
//! This module provides a slot that keeps its allocation between samples so
//! the steady state performs no allocation at all.
//!
//! ## Design notes
//!
//! * **Lazy Expansion**: Capacity grows to the largest window seen and is never shrunk.
//! * **Logical Clearing**: Slots are truncated with `clear()`, never deallocated.
//!
//! ## Non-goals
//!
//! * Sharing scratch space between filters (each filter owns its slots).

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Slot - Reusable Vector
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Clear the slot (sets length to 0, preserves capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Replace the slot contents with `values`, reusing capacity.
    #[inline]
    pub fn refill<I: IntoIterator<Item = T>>(&mut self, values: I) -> &mut [T] {
        self.0.clear();
        self.0.extend(values);
        &mut self.0
    }
}
