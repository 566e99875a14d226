//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides the smoothers that drive a filter chain in one of two
//! input modes:
//!
//! - **Continuous**: One sample (or X/Y pair) per call, state persists
//! - **List**: Whole signals per call, state reset on `build()`
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: 2D Filters
//!   ↓
//! Layer 4: 1D Filters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sample-by-sample smoothing.
pub mod continuous;

/// Whole-signal smoothing.
pub mod list;
