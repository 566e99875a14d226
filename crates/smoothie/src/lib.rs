//! # Smoothie: Composable Signal Smoothing for Rust
//!
//! A library of one- and two-dimensional signal filters (moving averages of
//! several kinds, offsets, fixation/deadband filters, multi-pass averages)
//! that are chained into a smoother and fed either one sample at a time or
//! as whole signals.
//!
//! ## Quick Start
//!
//! ### Continuous Smoothing
//!
//! ```rust
//! use smoothie::prelude::*;
//!
//! let mut smoother = Smoother::<f64>::new()
//!     .one_dimensional()
//!     .continuous()
//!     .attach_filter(SimpleMovingAverage1D::new(2)?)?
//!     .build();
//!
//! let smoothed: Vec<f64> = [10.0, 20.0, 30.0, 40.0, 50.0]
//!     .into_iter()
//!     .map(|sample| smoother.add_and_get(sample))
//!     .collect();
//!
//! assert_eq!(smoothed, vec![10.0, 15.0, 25.0, 35.0, 45.0]);
//! # Result::<(), SmootherError>::Ok(())
//! ```
//!
//! ### List Smoothing
//!
//! ```rust
//! use smoothie::prelude::*;
//!
//! let mut smoother = Smoother::<f64>::new()
//!     .one_dimensional()
//!     .list_based()
//!     .attach_filter(MultiPassMovingAverage1D::new(3, 2, Median)?)?
//!     .attach_filter(OffsetFilter1D::new(-10.0))?
//!     .build();
//!
//! let result = smoother.apply_filter(&[10.0, 20.0, 30.0]);
//! assert_eq!(result, vec![0.0, 2.5, 5.0]);
//! # Result::<(), SmootherError>::Ok(())
//! ```
//!
//! ### Two Dimensions
//!
//! ```rust
//! use smoothie::prelude::*;
//!
//! let mut smoother = Smoother::<f64>::new()
//!     .two_dimensional()
//!     .continuous()
//!     .attach_filter(NaiveFixationSmoothFilter2D::new(3, 4.0, None, None)?)?
//!     .attach_filter(OffsetFilter2D::new(0.5, Some(-0.5)))?
//!     .build();
//!
//! assert_eq!(smoother.add_and_get(500.0, 300.0), (500.5, 299.5));
//! assert_eq!(smoother.add_and_get(501.0, 301.0), (500.5, 299.5));
//! # Result::<(), SmootherError>::Ok(())
//! ```
//!
//! ### Error Handling
//!
//! Invalid parameters are rejected by the constructor, and filters of the
//! wrong dimensionality by `attach_filter`:
//!
//! ```rust
//! use smoothie::prelude::*;
//!
//! assert!(matches!(
//!     ExponentialMovingAverage1D::new(1.1),
//!     Err(SmootherError::InvalidAlpha(_))
//! ));
//!
//! let err = Smoother::<f64>::new()
//!     .one_dimensional()
//!     .continuous()
//!     .attach_filter(OffsetFilter2D::new(1.0, None))
//!     .unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TypeMismatch);
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! smoothie = { version = "0.3", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade. Building
//! a smoother logs at `debug`, attaching filters at `trace`. No logger is
//! installed by the library.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Engine - filter contracts, chaining and validation.
mod engine;

// Layer 4: 1D Filters - scalar filters.
mod filters;

// Layer 5: 2D Filters - X/Y filters.
mod filters2d;

// Layer 6: Adapters - continuous and list smoothers.
mod adapters;

// High-level fluent API for building smoothers.
mod api;

// Standard smoothing prelude.
pub mod prelude {
    pub use crate::api::{
        ContinuousSmoother, ContinuousSmootherBuilder, CumulativeMovingAverage1D, Dimension,
        DimensionBuilder, Dimensionality, ErrorKind, ExponentialMovingAverage1D, Filter,
        Filter1D, Filter2D, FilterChain, FixationSmoothFilter1D, GaussianAverage1D,
        ListSmoother, ListSmootherBuilder, MedianAverage1D, Mode::Continuous, Mode::List,
        MovingAverageType, MovingAverageType::Cumulative, MovingAverageType::Exponential,
        MovingAverageType::Gaussian, MovingAverageType::Median, MovingAverageType::Simple,
        MovingAverageType::Weighted, MultiPassMovingAverage1D, Naive2D,
        NaiveCumulativeMovingAverage2D, NaiveExponentialMovingAverage2D,
        NaiveFixationSmoothFilter2D, NaiveGaussianAverage2D, NaiveMedianAverage2D,
        NaiveMultiPassMovingAverage2D, NaiveSimpleMovingAverage2D,
        NaiveWeightedMovingAverage2D, OffsetFilter1D, OffsetFilter2D, OneDimensional,
        SampleWindow, Scalar, SimpleMovingAverage1D, SmootherBuilder as Smoother,
        SmootherError, SmootherMode, TwoDimensional, WeightedMovingAverage1D,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod filters {
        pub use crate::filters::*;
    }
    pub mod filters2d {
        pub use crate::filters2d::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
