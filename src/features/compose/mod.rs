//! Compose Feature
//!
//! The email composition form.

pub mod controller;
pub mod page;
