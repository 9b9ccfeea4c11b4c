//! Command-line arguments and their translation into generator settings.

use anyhow::{ensure, Context};
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use log_core::{end_of_day, GeneratorSettings, OutputFormat};
use std::path::PathBuf;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` day.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .with_context(|| format!("Invalid date format: {value}. Use YYYY-MM-DD format"))
}

#[derive(Parser, Debug, Clone)]
#[command(name = "fake-logs")]
#[command(about = "Generate fake HTTP access log entries for testing and development")]
#[command(after_help = "Examples:
  # 100 JSON log entries to stdout
  fake-logs 100

  # 1000 CSV log entries to a file
  fake-logs 1000 --format csv --output logs.csv

  # 500 entries in traditional log-line format
  fake-logs 500 --format log

  # Entries within a custom date range
  fake-logs 100 --start-date 2024-01-01 --end-date 2024-01-31")]
pub struct Cli {
    /// Number of log entries to generate
    #[arg(allow_negative_numbers = true)]
    pub count: i64,

    /// Output format: json, csv or log
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// First day of the timestamp window (YYYY-MM-DD, default: 3 years ago)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Last day of the timestamp window, inclusive (YYYY-MM-DD, default: now)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Seed for reproducible output
    #[arg(long, env = "FAKE_LOGS_SEED")]
    pub seed: Option<u64>,

    /// Sort generated entries by timestamp
    #[arg(long)]
    pub sorted: bool,

    /// YAML settings file
    #[arg(long, env = "FAKE_LOGS_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Check the arguments before anything is generated.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.count > 0, "Count must be a positive integer");

        if let (Some(start), Some(end)) = (self.start_day()?, self.end_day()?) {
            ensure!(end > start, "End date must be after start date");
        }

        Ok(())
    }

    /// `--start-date`, parsed.
    pub fn start_day(&self) -> anyhow::Result<Option<NaiveDate>> {
        self.start_date.as_deref().map(parse_date).transpose()
    }

    /// `--end-date`, parsed.
    pub fn end_day(&self) -> anyhow::Result<Option<NaiveDate>> {
        self.end_date.as_deref().map(parse_date).transpose()
    }

    /// Validated entry count.
    pub fn entry_count(&self) -> anyhow::Result<usize> {
        self.validate()?;
        usize::try_from(self.count).context("Count does not fit in memory")
    }

    /// Settings from the config file (if any) with command-line overrides.
    pub fn settings(&self) -> anyhow::Result<GeneratorSettings> {
        let mut settings = match &self.config {
            Some(path) => GeneratorSettings::from_file(path)
                .with_context(|| format!("Failed to load settings from {path:?}"))?,
            None => GeneratorSettings::default(),
        };

        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(start) = self.start_day()? {
            settings.start = Some(start.and_time(NaiveTime::MIN).and_utc());
        }
        if let Some(end) = self.end_day()? {
            settings.end = Some(end_of_day(end));
        }

        Ok(settings)
    }

    /// Level used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
