//! Greeter GUI Library
//!
//! This crate provides the application logic for the Greeter GUI, a
//! single-window demo that renders one greeting card for a fixed subject.

pub mod app;
pub mod components;
pub mod constants;
pub mod theme;
pub mod views;
