//! Colors - Greeter Theme Colors

use gpui::{rgb, Rgba};

/// Greeter color palette - All colors are accessed via associated functions
pub struct GreeterColors;

impl GreeterColors {
    // Background colors
    /// Main window background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }

    // Text colors
    /// Heading text
    pub fn heading() -> Rgba { rgb(0x1f2937) }
}
