//! Error types shared across the workspace.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised by core types.
#[derive(Error, Debug)]
pub enum LogCoreError {
    /// Output format identifier outside the supported set
    #[error("Unsupported format type: {0}")]
    UnsupportedFormat(String),

    /// End bound earlier than start bound
    #[error("end ({end}) cannot be before start ({start})")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Rolling window length that is negative or out of the representable range
    #[error("window_days must be between 0 and the representable date range, got {0}")]
    InvalidWindow(i64),

    /// Error reading a settings file
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML settings
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
