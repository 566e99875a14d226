//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures used throughout the
//! crate: the error type, the bounded sample window and reusable scratch
//! slots. It has zero internal dependencies on the filter layers.
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
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Bounded FIFO sample windows.
pub mod window;

/// Shared error types.
pub mod errors;

/// Scratch buffer management.
pub mod buffer;

/// Signal dimensionality tags.
pub mod dimension;
