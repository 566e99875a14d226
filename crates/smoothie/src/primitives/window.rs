//! Bounded sample windows for filters.
//!
//! This module provides the FIFO window every filter buffers its most recent
//! samples in. The window never grows beyond its capacity: pushing into a
//! full window evicts the oldest sample first.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::{VecDeque, vec_deque::Iter};
#[cfg(feature = "std")]
use std::collections::{VecDeque, vec_deque::Iter};

// External dependencies
use core::iter::Copied;
use num_traits::Float;

/// Fixed-capacity FIFO of the most recent samples, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleWindow<T> {
    samples: VecDeque<T>,
    capacity: usize,
    latest_removed: T,
}

impl<T: Float> SampleWindow<T> {
    /// Create an empty window holding at most `capacity` samples.
    ///
    /// Callers validate `capacity >= 1` beforehand.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "SampleWindow: capacity must be at least 1");

        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            latest_removed: T::zero(),
        }
    }

    /// Append `sample`, evicting the oldest sample if the window is full.
    ///
    /// Before the insertion, `latest_removed` is set to the current oldest
    /// sample, or zero when the window is empty.
    #[inline]
    pub fn push(&mut self, sample: T) {
        self.latest_removed = self.samples.front().copied().unwrap_or_else(T::zero);

        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Oldest sample seen by the most recent `push`.
    #[inline]
    pub fn latest_removed(&self) -> T {
        self.latest_removed
    }

    /// Most recently pushed sample.
    #[inline]
    pub fn latest(&self) -> Option<T> {
        self.samples.back().copied()
    }

    /// Iterate over the buffered samples, oldest first.
    #[inline]
    pub fn iter(&self) -> Copied<Iter<'_, T>> {
        self.samples.iter().copied()
    }

    /// Number of buffered samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if no sample has been buffered yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Check if the window holds `capacity` samples.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    /// Maximum number of samples (the filter's window size).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every buffered sample and forget the last eviction.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.latest_removed = T::zero();
    }
}

