//! Views - Window-Level Views

pub mod root;
