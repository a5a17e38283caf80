//! Configuration and CLI argument handling

use clap::{ArgGroup, Parser};

use crate::output::OutputFormat;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "berlin-clock")]
#[command(about = "Show a time of day as Berlin Clock lamp rows")]
#[command(version)]
#[command(group(ArgGroup::new("source").required(true).args(["time", "now"])))]
pub struct Config {
    /// Time to convert, as HH:mm:ss
    #[arg(allow_hyphen_values = true)]
    pub time: Option<String>,

    /// Convert the current local time instead
    #[arg(long)]
    pub now: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_argument() {
        let config = Config::try_parse_from(["berlin-clock", "13:17:01"]).unwrap();
        assert_eq!(config.time.as_deref(), Some("13:17:01"));
        assert!(!config.now);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_now_with_json_and_verbose() {
        let config = Config::try_parse_from(["berlin-clock", "--now", "-f", "json", "-v"]).unwrap();
        assert!(config.now);
        assert!(config.time.is_none());
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_negative_time_reaches_converter() {
        let config = Config::try_parse_from(["berlin-clock", "-1:00:00"]).unwrap();
        assert_eq!(config.time.as_deref(), Some("-1:00:00"));
    }

    #[test]
    fn test_source_is_required_and_exclusive() {
        assert!(Config::try_parse_from(["berlin-clock"]).is_err());
        assert!(Config::try_parse_from(["berlin-clock", "--now", "12:00:00"]).is_err());
    }
}
