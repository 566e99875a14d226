//! Signal dimensionality tags.

// External dependencies
use core::fmt::{Display, Formatter, Result};

/// Number of parallel channels a filter or smoother processes per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// One scalar channel.
    One,

    /// Two lockstep channels (X and Y).
    Two,
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::One => write!(f, "1D"),
            Self::Two => write!(f, "2D"),
        }
    }
}
