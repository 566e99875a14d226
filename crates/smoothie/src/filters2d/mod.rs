//! Layer 5: 2D Filters
//!
//! # Purpose
//!
//! This layer provides filters over lockstep X/Y streams:
//! - A constant per-axis offset
//! - Naive pairings running one independent 1D filter per axis
//!
//! Every filter implements [`Filter2D`](crate::engine::filter::Filter2D).
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: 2D Filters ← You are here
//!   ↓
//! Layer 4: 1D Filters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Constant per-axis offset filter.
pub mod offset;

/// Independent per-axis pairings of 1D filters.
pub mod naive;
