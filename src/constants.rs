//! UI Constants
//!
//! Centralized constants for layout and compose timing.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 720.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;

/// Width of the field label column
pub const FIELD_LABEL_WIDTH: f32 = 80.0;

/// Stand-in delay when no send collaborator is configured
pub const SIMULATED_SEND_MS: u64 = 1500;

/// Lifetime of the "sent" banner
pub const SENT_BANNER_MS: u64 = 3000;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "composer.toml";
