//! Median moving average.

// Internal dependencies
use crate::engine::filter::{Filter1D, Scalar};
use crate::engine::validator::Validator;
use crate::math::statistics::median_inplace;
use crate::primitives::buffer::Slot;
use crate::primitives::errors::SmootherError;
use crate::primitives::window::SampleWindow;

/// Median of the window; even-length windows average the two middle values.
#[derive(Debug, Clone)]
pub struct MedianAverage1D<T> {
    window: SampleWindow<T>,
    // Reused selection buffer; the window itself stays in arrival order.
    scratch: Slot<T>,
}

impl<T: Scalar> MedianAverage1D<T> {
    /// Create a median filter over `window_size` samples.
    pub fn new(window_size: usize) -> Result<Self, SmootherError> {
        Validator::validate_window_size(window_size)?;
        Ok(Self {
            window: SampleWindow::new(window_size),
            scratch: Slot::new(window_size),
        })
    }
}

impl<T: Scalar> Filter1D<T> for MedianAverage1D<T> {
    fn next(&mut self, sample: T) -> T {
        self.window.push(sample);
        median_inplace(self.scratch.refill(self.window.iter()))
    }

    fn reset(&mut self) {
        self.window.clear();
        self.scratch.clear();
    }

    fn window(&self) -> &SampleWindow<T> {
        &self.window
    }
}
