//! Command-line interface for fake-logs
//!
//! ```bash
//! fake-logs 100
//! fake-logs 1000 --format csv --output logs.csv
//! fake-logs 500 --format log --start-date 2024-01-01 --end-date 2024-01-31
//! ```

use anyhow::Context;
use clap::Parser;
use fake_logs::{write_output, Cli};
use log_generator::LogGenerator;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for generated entries
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let count = cli.entry_count()?;
    let settings = cli.settings()?;
    let (start_day, end_day) = (cli.start_day()?, cli.end_day()?);

    info!(
        "Generating {} log entries in {} format...",
        count,
        cli.format.as_str().to_uppercase()
    );
    if let Some(start) = start_day {
        info!("Start date: {start}");
    }
    if let Some(end) = end_day {
        info!("End date: {end}");
    }

    let mut generator = LogGenerator::new(settings).with_chronological(cli.sorted);
    let entries = generator
        .entries(count)
        .context("Error generating log entries")?;

    let written = write_output(&entries, cli.format, cli.output.as_deref())?;

    if let Some(path) = &cli.output {
        info!("Generated {} log entries to {}", written, path.display());
    }

    Ok(())
}
