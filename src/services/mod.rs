//! Services - Background Execution
//!
//! Bridges GPUI's executor to the tokio runtime used by send handlers.

pub mod runtime;
