//! The full five-row clock face

use std::fmt;

use crate::clock::LightingScheme;

use super::lamp::{Lamp, LampRow};

pub const SECONDS_ROW_LEN: usize = 1;
pub const FIVE_HOUR_ROW_LEN: usize = 4;
pub const ONE_HOUR_ROW_LEN: usize = 4;
pub const FIVE_MINUTE_ROW_LEN: usize = 11;
pub const ONE_MINUTE_ROW_LEN: usize = 4;

/// Separator placed between rows when the face is printed
pub const ROW_SEPARATOR: &str = "\r\n";

/// A rendered Berlin Clock, top row first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BerlinClock {
    seconds: LampRow,
    five_hours: LampRow,
    one_hours: LampRow,
    five_minutes: LampRow,
    one_minutes: LampRow,
}

impl BerlinClock {
    pub fn from_scheme(scheme: &LightingScheme) -> Self {
        let seconds = if scheme.second_lamp_on {
            LampRow::switch_on(1, Lamp::Yellow, SECONDS_ROW_LEN)
        } else {
            LampRow::dark(SECONDS_ROW_LEN)
        };

        Self {
            seconds,
            five_hours: LampRow::switch_on(scheme.five_hour_count, Lamp::Red, FIVE_HOUR_ROW_LEN),
            one_hours: LampRow::switch_on(scheme.one_hour_count, Lamp::Red, ONE_HOUR_ROW_LEN),
            five_minutes: five_minute_row(scheme),
            one_minutes: LampRow::switch_on(scheme.one_minute_count, Lamp::Yellow, ONE_MINUTE_ROW_LEN),
        }
    }

    pub fn seconds(&self) -> &LampRow {
        &self.seconds
    }

    pub fn five_hours(&self) -> &LampRow {
        &self.five_hours
    }

    pub fn one_hours(&self) -> &LampRow {
        &self.one_hours
    }

    pub fn five_minutes(&self) -> &LampRow {
        &self.five_minutes
    }

    pub fn one_minutes(&self) -> &LampRow {
        &self.one_minutes
    }

    /// All rows in display order
    pub fn rows(&self) -> [&LampRow; 5] {
        [
            &self.seconds,
            &self.five_hours,
            &self.one_hours,
            &self.five_minutes,
            &self.one_minutes,
        ]
    }
}

// Every third lamp closes a quarter and is red, even if the yellow fill
// did not reach it.
fn five_minute_row(scheme: &LightingScheme) -> LampRow {
    let mut row = LampRow::switch_on(scheme.five_minute_count, Lamp::Yellow, FIVE_MINUTE_ROW_LEN);
    for quarter in 1..=scheme.quarter_count {
        row.set(3 * quarter - 1, Lamp::Red);
    }
    row
}

impl From<&LightingScheme> for BerlinClock {
    fn from(scheme: &LightingScheme) -> Self {
        Self::from_scheme(scheme)
    }
}

impl fmt::Display for BerlinClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                f.write_str(ROW_SEPARATOR)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
