//! Constant offset filter.

// Internal dependencies
use crate::engine::filter::{Filter1D, Scalar};
use crate::primitives::window::SampleWindow;

/// Shifts every sample by a constant `offset`.
#[derive(Debug, Clone)]
pub struct OffsetFilter1D<T> {
    window: SampleWindow<T>,
    offset: T,
}

impl<T: Scalar> OffsetFilter1D<T> {
    /// Create a filter adding `offset` to every sample.
    pub fn new(offset: T) -> Self {
        Self {
            window: SampleWindow::new(1),
            offset,
        }
    }

    /// The constant added to every sample.
    pub fn offset(&self) -> T {
        self.offset
    }
}

impl<T: Scalar> Filter1D<T> for OffsetFilter1D<T> {
    #[inline]
    fn next(&mut self, sample: T) -> T {
        self.window.push(sample);
        sample + self.offset
    }

    fn reset(&mut self) {
        self.window.clear();
    }

    fn window(&self) -> &SampleWindow<T> {
        &self.window
    }
}
