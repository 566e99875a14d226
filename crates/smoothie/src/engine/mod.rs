//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer defines how filters are driven: the [`Filter1D`](filter::Filter1D)
//! and [`Filter2D`](filter::Filter2D) contracts, the ordered filter chain with
//! its compile-time dimension markers, and parameter validation shared by
//! every filter constructor.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: 2D Filters
//!   ↓
//! Layer 4: 1D Filters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Filter contracts and the dimension-erased filter handle.
pub mod filter;

/// Ordered filter chains and dimension markers.
pub mod chain;

/// Validation utilities.
pub mod validator;
