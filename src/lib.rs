//! Berlin Clock - converts a time of day into Berlin Clock lamp rows
//!
//! The clock shows the time on five rows of lamps: a blinking seconds lamp,
//! two rows of hours (five-hour and one-hour blocks) and two rows of minutes
//! (five-minute and one-minute blocks). This library parses `HH:mm:ss` strings
//! and renders the matching lamp pattern.

pub mod clock;
pub mod config;
pub mod converter;
pub mod error;
pub mod output;
pub mod render;

// Re-export commonly used types
pub use clock::{LightingScheme, Time};
pub use config::Config;
pub use converter::{build_clock, convert, convert_time};
pub use error::ClockError;
pub use output::{ConversionReport, OutputFormat};
pub use render::{BerlinClock, Lamp, LampRow};
