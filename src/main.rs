//! Berlin Clock - converts a time of day into Berlin Clock lamp rows
//!
//! This is the command line entry point for the berlin-clock library.

use anyhow::Context;
use chrono::Local;
use tracing::{debug, info};

use berlin_clock::{
    config::Config,
    convert_time,
    output::{ConversionReport, OutputFormat},
    Time,
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing on stderr so stdout only carries the clock
    tracing_subscriber::fmt()
        .with_env_filter(format!("berlin_clock={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let (input, time) = match config.time.as_deref() {
        Some(input) => {
            match input.parse::<Time>() {
                Ok(time) => (input.to_string(), time),
                Err(e) => {
                    tracing::error!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            let now = Local::now().time();
            info!("Using current local time {}", now.format("%H:%M:%S"));
            (now.format("%H:%M:%S").to_string(), Time::from_naive_time(now))
        }
    };

    debug!("Converting {} (input '{}')", time, input);

    match config.format {
        OutputFormat::Text => println!("{}", convert_time(&time)),
        OutputFormat::Json => {
            let report = ConversionReport::new(input, time);
            let json = report.to_json().context("Failed to serialize conversion report")?;
            println!("{}", json);
        }
    }

    Ok(())
}
