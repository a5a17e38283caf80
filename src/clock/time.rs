//! Wall-clock time parsing and range validation

use std::{fmt, str::FromStr};

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ClockError, Result};

const FIELD_SEPARATOR: char = ':';

/// Upper bound is inclusive so that "24:00:00" is a valid input
pub const MAX_HOURS: i32 = 24;
pub const MAX_MINUTES: i32 = 59;
pub const MAX_SECONDS: i32 = 59;

/// A validated time of day as shown on a Berlin Clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTime")]
pub struct Time {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl Time {
    /// Build a time from raw fields, rejecting anything outside the clock's range
    pub fn new(hours: i32, minutes: i32, seconds: i32) -> Result<Self> {
        validate_range(hours, minutes, seconds)?;

        Ok(Self {
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
        })
    }

    /// Take the hour, minute and second of a chrono time. Sub-second
    /// precision (including leap-second nanos) is dropped.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
            seconds: time.second() as u8,
        }
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }
}

/// Unchecked fields as they arrive from a serialized `Time`
#[derive(Deserialize)]
struct RawTime {
    hours: i32,
    minutes: i32,
    seconds: i32,
}

impl TryFrom<RawTime> for Time {
    type Error = ClockError;

    fn try_from(raw: RawTime) -> Result<Self> {
        Time::new(raw.hours, raw.minutes, raw.seconds)
    }
}

impl FromStr for Time {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self> {
        let (hours, minutes, seconds) = parse_time_string(s)?;
        Time::new(hours, minutes, seconds)
    }
}

impl From<NaiveTime> for Time {
    fn from(time: NaiveTime) -> Self {
        Self::from_naive_time(time)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Split `input` on ':' into exactly three integer fields.
///
/// Fields are signed so that "-1:00:00" gets past parsing and is reported as
/// a range problem instead of a format problem.
pub fn parse_time_string(input: &str) -> Result<(i32, i32, i32)> {
    let fields: Vec<&str> = input.split(FIELD_SEPARATOR).collect();
    if fields.len() != 3 {
        return Err(ClockError::format(
            input,
            format!("expected 3 fields, found {}", fields.len()),
        ));
    }

    let parse_field = |name: &str, field: &str| {
        trim_field(field).parse::<i32>().map_err(|e| {
            ClockError::format(input, format!("{} field '{}' is not an integer: {}", name, field, e))
        })
    };

    let hours = parse_field("hours", fields[0])?;
    let minutes = parse_field("minutes", fields[1])?;
    let seconds = parse_field("seconds", fields[2])?;

    Ok((hours, minutes, seconds))
}

// Only ASCII whitespace (tab through carriage return, and space) surrounds a field
fn trim_field(field: &str) -> &str {
    field.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B')
}

/// Check raw fields against the clock's range
pub fn validate_range(hours: i32, minutes: i32, seconds: i32) -> Result<()> {
    let valid = (0..=MAX_HOURS).contains(&hours)
        && (0..=MAX_MINUTES).contains(&minutes)
        && (0..=MAX_SECONDS).contains(&seconds);

    if valid {
        Ok(())
    } else {
        Err(ClockError::OutOfRange { hours, minutes, seconds })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_padded_fields() {
        assert_eq!(parse_time_string("13:17:01").unwrap(), (13, 17, 1));
    }

    #[test]
    fn test_parse_unpadded_fields() {
        assert_eq!(parse_time_string("9:5:5").unwrap(), (9, 5, 5));
    }

    #[test]
    fn test_parse_signed_fields() {
        assert_eq!(parse_time_string("-1:+5:0").unwrap(), (-1, 5, 0));
    }

    #[test]
    fn test_parse_tolerates_whitespace_in_fields() {
        assert_eq!(parse_time_string(" 12 : 30 :00 ").unwrap(), (12, 30, 0));
    }

    #[test]
    fn test_parse_tolerates_vertical_tab() {
        assert_eq!(parse_time_string("\x0B12:00:00\t").unwrap(), (12, 0, 0));
    }

    #[test]
    fn test_parse_rejects_unicode_whitespace() {
        for input in ["\u{a0}12:00:00", "12:\u{2003}00:00", "12:00:00\u{3000}"] {
            let err = parse_time_string(input).unwrap_err();
            assert!(err.is_format(), "{:?} should be a format error", input);
        }
    }

    #[test]
    fn test_parse_wrong_field_count() {
        for input in ["notatime", "12:00", "12:00:00:00", ""] {
            let err = parse_time_string(input).unwrap_err();
            assert!(err.is_format(), "{} should be a format error", input);
        }
    }

    #[test]
    fn test_parse_non_integer_fields() {
        for input in ["ab:cd:ef", "12:00:", "12::00", "1.5:00:00", "99999999999:00:00"] {
            let err = parse_time_string(input).unwrap_err();
            assert!(err.is_format(), "{} should be a format error", input);
        }
    }

    #[test]
    fn test_validate_boundaries() {
        assert!(validate_range(0, 0, 0).is_ok());
        assert!(validate_range(24, 59, 59).is_ok());
        assert!(validate_range(25, 0, 0).unwrap_err().is_out_of_range());
        assert!(validate_range(24, 60, 0).unwrap_err().is_out_of_range());
        assert!(validate_range(0, 0, 60).unwrap_err().is_out_of_range());
        assert!(validate_range(-1, 0, 0).unwrap_err().is_out_of_range());
        assert!(validate_range(0, -1, 0).unwrap_err().is_out_of_range());
        assert!(validate_range(0, 0, -1).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_from_str_validates() {
        let time: Time = "24:00:00".parse().unwrap();
        assert_eq!((time.hours(), time.minutes(), time.seconds()), (24, 0, 0));

        let err = "24:60:00".parse::<Time>().unwrap_err();
        assert_eq!(err, ClockError::OutOfRange { hours: 24, minutes: 60, seconds: 0 });
    }

    #[test]
    fn test_display_is_zero_padded() {
        let time: Time = "9:5:5".parse().unwrap();
        assert_eq!(time.to_string(), "09:05:05");
    }

    #[test]
    fn test_deserialize_validates() {
        let time: Time = serde_json::from_str(r#"{"hours":24,"minutes":0,"seconds":0}"#).unwrap();
        assert_eq!(time, Time::new(24, 0, 0).unwrap());

        for json in [
            r#"{"hours":25,"minutes":0,"seconds":0}"#,
            r#"{"hours":200,"minutes":250,"seconds":99}"#,
            r#"{"hours":-1,"minutes":0,"seconds":0}"#,
        ] {
            let err = serde_json::from_str::<Time>(json).unwrap_err();
            assert!(err.to_string().contains("time value out of range"), "{}", json);
        }
    }

    #[test]
    fn test_serialize_round_trips_through_validation() {
        let time: Time = "13:17:01".parse().unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, r#"{"hours":13,"minutes":17,"seconds":1}"#);
        assert_eq!(serde_json::from_str::<Time>(&json).unwrap(), time);
    }

    #[test]
    fn test_from_naive_time() {
        let naive = NaiveTime::from_hms_opt(23, 59, 58).unwrap();
        let time = Time::from(naive);
        assert_eq!(time, Time::new(23, 59, 58).unwrap());
    }
}
