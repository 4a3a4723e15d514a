//! Primitive Components
//!
//! Basic building blocks like buttons and inputs.

pub mod button;
pub mod text_input;
