//! Utility modules for the emitter configuration

pub mod duration_serde;

pub use duration_serde::{format_duration, parse_duration};
