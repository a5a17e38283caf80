//! Output formats for the command line front end

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    clock::{LightingScheme, Time},
    render::BerlinClock,
};

/// How the converted clock is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Lamp rows, one per line
    #[default]
    Text,
    /// A JSON conversion report
    Json,
}

/// Structured record of a single conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub input: String,
    pub time: Time,
    pub scheme: LightingScheme,
    /// Rows top to bottom, one character per lamp
    pub rows: Vec<String>,
    pub lamps: String,
    pub generated_at: DateTime<Utc>,
}

impl ConversionReport {
    pub fn new(input: String, time: Time) -> Self {
        let scheme = LightingScheme::from_time(&time);
        let clock = BerlinClock::from_scheme(&scheme);

        Self {
            input,
            time,
            scheme,
            rows: clock.rows().iter().map(|row| row.to_string()).collect(),
            lamps: clock.to_string(),
            generated_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
