//! Text renderings of fake access log entries.
//!
//! Every entry can be rendered into one single-line representation per
//! [`OutputFormat`]:
//!
//! - [`json`] - one JSON object carrying every field
//! - [`csv`] - a fixed 7-column comma-separated row, no header
//! - [`log_line`] - `YYYY-MM-DD HH:MM:SS [LEVEL] request_id ip method path status`
//!
//! [`CsvValue`] is also used by the CSV exporter for arbitrary field/value
//! records.
//!
//! # Example
//!
//! ```ignore
//! use log_core::OutputFormat;
//! use log_format::format_entry;
//!
//! let line = format_entry(&entry, OutputFormat::Log)?;
//! ```

pub mod csv;
pub mod json;
pub mod log_line;

pub use csv::{entry_to_csv_line, escape_csv, CsvValue, CSV_LINE_FIELDS, CSV_TIMESTAMP_FORMAT};
pub use json::entry_to_json;
pub use log_line::{entry_to_log_line, LOG_LINE_TIMESTAMP_FORMAT};

use log_core::{LogEntry, OutputFormat};

/// Error type for rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Unsupported format type: {0}")]
    UnsupportedFormat(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render one entry in the given format.
///
/// The entry is never modified, so the same entry can be rendered into
/// several formats.
pub fn format_entry(entry: &LogEntry, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => entry_to_json(entry),
        OutputFormat::Csv => Ok(entry_to_csv_line(entry)),
        OutputFormat::Log => Ok(entry_to_log_line(entry)),
    }
}

/// Render one entry in the format named by `format`.
///
/// Accepts the identifiers understood by [`OutputFormat`]'s `FromStr`;
/// anything else fails with [`FormatError::UnsupportedFormat`].
pub fn format_entry_as(entry: &LogEntry, format: &str) -> Result<String, FormatError> {
    let parsed: OutputFormat = format
        .parse()
        .map_err(|_| FormatError::UnsupportedFormat(format.to_string()))?;
    format_entry(entry, parsed)
}

/// Render a batch of entries, one line per entry, in input order.
pub fn format_lines(entries: &[LogEntry], format: OutputFormat) -> Result<Vec<String>, FormatError> {
    entries
        .iter()
        .map(|entry| format_entry(entry, format))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::{sample_entry, REQUEST_ID};
    use super::*;

    #[test]
    fn test_format_entry_dispatch() {
        let entry = sample_entry();

        assert!(format_entry(&entry, OutputFormat::Json)
            .unwrap()
            .starts_with('{'));
        assert!(format_entry(&entry, OutputFormat::Csv)
            .unwrap()
            .starts_with("2024-01-15T10:30:45.123Z,"));
        assert!(format_entry(&entry, OutputFormat::Log)
            .unwrap()
            .starts_with("2024-01-15 10:30:45 [WARN]"));
    }

    #[test]
    fn test_format_entry_as_names() {
        let entry = sample_entry();

        for name in ["json", "structured", "csv", "delimited", "log", "log-line"] {
            let line = format_entry_as(&entry, name).unwrap();
            assert!(line.contains(REQUEST_ID), "{name}: {line}");
        }
    }

    #[test]
    fn test_unsupported_format() {
        let err = format_entry_as(&sample_entry(), "xml").unwrap_err();

        assert!(matches!(err, FormatError::UnsupportedFormat(ref f) if f == "xml"));
        assert_eq!(err.to_string(), "Unsupported format type: xml");
    }

    #[test]
    fn test_rendering_leaves_entry_untouched() {
        let entry = sample_entry();
        let before = entry.clone();

        for format in OutputFormat::ALL {
            format_entry(&entry, format).unwrap();
        }
        assert_eq!(entry, before);
    }

    #[test]
    fn test_format_lines() {
        let entries = vec![sample_entry(), sample_entry()];
        let lines = format_lines(&entries, OutputFormat::Log).unwrap();

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| !line.contains('\n')));
        assert!(format_lines(&[], OutputFormat::Json).unwrap().is_empty());
    }
}
