//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state held
//! in a GPUI entity.

pub mod compose_state;
