//! Colors - Mail Composer Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Composer color palette - All colors are accessed via associated functions
pub struct MailColors;

impl MailColors {
    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xffffff) }
    /// Toolbar background
    pub fn toolbar_bg() -> Rgba { rgb(0xf3f4f6) }
    /// Footer background
    pub fn footer_bg() -> Rgba { rgb(0xf9fafb) }
    /// Modal backdrop
    pub fn backdrop() -> Rgba { rgba(0x00000088) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text (field labels)
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on colored buttons)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success banner background
    pub fn success_bg() -> Rgba { rgb(0xdcfce7) }
    /// Success banner border
    pub fn success_border() -> Rgba { rgb(0xbbf7d0) }
    /// Success banner text
    pub fn success_text() -> Rgba { rgb(0x15803d) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x3b82f6) }

    // Button colors
    /// Send button background
    pub fn button_primary_bg() -> Rgba { rgb(0x3b82f6) }
    /// Send button hover
    pub fn button_primary_hover() -> Rgba { rgb(0x2563eb) }
    /// Disabled button background
    pub fn button_disabled_bg() -> Rgba { rgb(0xd1d5db) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x4b5563) }
    /// Ghost button hover
    pub fn button_ghost_hover() -> Rgba { rgb(0xe5e7eb) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgba(0x00000000) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
}
