//! Formatting and rendering of host reports

pub mod format;
pub mod render;
