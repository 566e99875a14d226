//! Constant per-axis offset filter.

// Internal dependencies
use crate::engine::filter::{Filter, Filter2D, Scalar};
use crate::primitives::window::SampleWindow;

/// Shifts every `(x, y)` pair by `(offset_x, offset_y)`.
#[derive(Debug, Clone)]
pub struct OffsetFilter2D<T> {
    window_x: SampleWindow<T>,
    window_y: SampleWindow<T>,
    offset_x: T,
    offset_y: T,
}

impl<T: Scalar> OffsetFilter2D<T> {
    /// Create an offset filter; `offset_y` defaults to `offset`.
    pub fn new(offset: T, offset_y: Option<T>) -> Self {
        Self {
            window_x: SampleWindow::new(1),
            window_y: SampleWindow::new(1),
            offset_x: offset,
            offset_y: offset_y.unwrap_or(offset),
        }
    }

    /// Offsets applied to the X and Y channels.
    pub fn offsets(&self) -> (T, T) {
        (self.offset_x, self.offset_y)
    }
}

impl<T: Scalar> Filter2D<T> for OffsetFilter2D<T> {
    #[inline]
    fn next(&mut self, x: T, y: T) -> (T, T) {
        self.window_x.push(x);
        self.window_y.push(y);
        (x + self.offset_x, y + self.offset_y)
    }

    fn reset(&mut self) {
        self.window_x.clear();
        self.window_y.clear();
    }

    fn windows(&self) -> (&SampleWindow<T>, &SampleWindow<T>) {
        (&self.window_x, &self.window_y)
    }
}

impl<T: Scalar> From<OffsetFilter2D<T>> for Filter<T> {
    fn from(filter: OffsetFilter2D<T>) -> Self {
        Filter::two_dimensional(filter)
    }
}
