//! Lamp counts derived from a time

use serde::{Deserialize, Serialize};

use super::Time;

/// How many lamps each row of the clock has switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightingScheme {
    /// The top lamp blinks: on for even seconds
    pub second_lamp_on: bool,
    pub five_hour_count: usize,
    pub one_hour_count: usize,
    pub five_minute_count: usize,
    /// Completed quarters of the hour, marked red in the five-minute row
    pub quarter_count: usize,
    pub one_minute_count: usize,
}

impl LightingScheme {
    pub fn from_time(time: &Time) -> Self {
        let hours = usize::from(time.hours());
        let minutes = usize::from(time.minutes());

        Self {
            second_lamp_on: time.seconds() % 2 == 0,
            five_hour_count: hours / 5,
            one_hour_count: hours % 5,
            five_minute_count: minutes / 5,
            quarter_count: minutes / 15,
            one_minute_count: minutes % 5,
        }
    }
}

impl From<&Time> for LightingScheme {
    fn from(time: &Time) -> Self {
        Self::from_time(time)
    }
}
