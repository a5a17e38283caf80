//! Rendering module
//!
//! Turns a lighting scheme into rows of lamps and prints them.

pub mod face;
pub mod lamp;

// Re-export main types
pub use face::{BerlinClock, ROW_SEPARATOR};
pub use lamp::{Lamp, LampRow};
