//! Layout Components
//!
//! Window-level structure.

pub mod shell;
