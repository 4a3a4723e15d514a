//! Composite Components
//!
//! Components assembled from primitives.

pub mod modal;
