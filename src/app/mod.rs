//! Application Layer
//!
//! Contains app initialization and window management.

pub mod application;
