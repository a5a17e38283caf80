//! Time model module
//!
//! Parsing, validation and the lamp counts derived from a time.

pub mod lighting;
pub mod time;

// Re-export main types
pub use lighting::LightingScheme;
pub use time::{parse_time_string, validate_range, Time};
