//! Time string to Berlin Clock conversion

use crate::{
    clock::{LightingScheme, Time},
    error::Result,
    render::BerlinClock,
};

/// Convert an `HH:mm:ss` string into the five CRLF-separated lamp rows.
///
/// ```
/// let lamps = berlin_clock::convert("13:17:01").unwrap();
/// assert_eq!(lamps, "O\r\nRROO\r\nRRRO\r\nYYROOOOOOOO\r\nYYOO");
/// ```
pub fn convert(time: &str) -> Result<String> {
    let time: Time = time.parse()?;
    Ok(convert_time(&time))
}

/// Render an already validated time
pub fn convert_time(time: &Time) -> String {
    build_clock(time).to_string()
}

pub fn build_clock(time: &Time) -> BerlinClock {
    BerlinClock::from_scheme(&LightingScheme::from_time(time))
}
