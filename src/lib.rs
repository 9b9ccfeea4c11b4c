//! fake-logs library
//!
//! Generates realistic fake HTTP access-log entries for testing and
//! development, and writes them as JSON lines, CSV or traditional log lines.
//!
//! # Workspace crates
//!
//! - `log_core` - Log entry model, values, settings
//! - `log_generator` - Weighted field generators and record assembly
//! - `log_format` - JSON / CSV / log-line rendering
//! - `log_export_csv` - Delimited file exporter with header row
//! - `log_postgresql` - `log_entries` DDL, INSERT template, value conversion
//!
//! # CLI Usage
//!
//! ```bash
//! # 100 JSON entries to stdout
//! fake-logs 100
//!
//! # 1000 CSV entries to a file, reproducible
//! fake-logs 1000 --format csv --output logs/out.csv --seed 42
//!
//! # Log lines within January 2024, sorted by time
//! fake-logs 500 -f log --start-date 2024-01-01 --end-date 2024-01-31 --sorted
//! ```

pub mod cli;
pub mod output;

pub use cli::{parse_date, Cli};
pub use output::{generate_log_lines, write_entries, write_output, write_to_file};
