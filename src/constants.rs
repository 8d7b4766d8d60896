//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 640.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 360.0;

/// Heading text size in pixels
pub const HEADING_TEXT_SIZE: f32 = 28.0;

/// The subject the root view greets
pub const DEFAULT_SUBJECT_NAME: &str = "Phil";

/// The language label shown in the greeting
pub const DEFAULT_SPOKEN_LANGUAGE: &str = "Scottish";
