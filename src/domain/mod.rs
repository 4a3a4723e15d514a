//! Domain - Plain Data Types
//!
//! Types shared by the compose core and the UI, free of GPUI.

pub mod config;
pub mod draft;
