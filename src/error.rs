//! Error types for time parsing and validation

/// Errors returned when a time string cannot be turned into a Berlin Clock
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// The input is not three `:`-separated integers
    #[error("'{input}' is not in HH:mm:ss format: {reason}")]
    Format { input: String, reason: String },

    /// The fields parsed but fall outside the clock's range
    #[error("time value out of range: {hours}:{minutes}:{seconds} (expected 0 <= hours <= 24, 0 <= minutes <= 59, 0 <= seconds <= 59)")]
    OutOfRange { hours: i32, minutes: i32, seconds: i32 },
}

impl ClockError {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// True for malformed input, false for out-of-range values
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// True when the fields parsed but fall outside the clock's range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, ClockError>;
