//! Delimited-file exporter for log records.
//!
//! Writes a batch of [`LogRecord`](log_core::LogRecord)s as CSV: one header
//! row followed by one row per record. Values are converted with
//! [`log_format::CsvValue`], so timestamps get millisecond precision plus
//! `Z` and absent or null fields become empty strings.
//!
//! # Example
//!
//! ```ignore
//! use log_export_csv::export_to_csv;
//!
//! let records: Vec<_> = entries.iter().map(|e| e.to_record()).collect();
//! let rows = export_to_csv(&records, "logs/output.csv", None)?;
//! ```

mod error;
mod exporter;

pub use error::ExportError;
pub use exporter::{
    export_to_csv, header_for, record_to_row, write_csv, CsvExporter, ExportMetrics,
    DEFAULT_BUFFER_SIZE,
};
