//! Core types for the fake-logs access log generator.
//!
//! This crate provides the foundational types shared by every other crate
//! in the workspace:
//!
//! - [`LogEntry`] - One synthesized HTTP access-log event
//! - [`LogRecord`] - Ordered field/value view of an entry (or any row)
//! - [`LogValue`] - In-memory value of a single field
//! - [`LogLevel`], [`HttpMethod`], [`HttpProtocol`] - Closed label sets
//! - [`OutputFormat`] - Supported text representations
//! - [`TimeRange`] - Validated timestamp window
//! - [`GeneratorSettings`] - Settings loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! log-core (this crate)
//!    │
//!    ├─── log-generator     (samplers, field generators, record assembly)
//!    ├─── log-format        (json / csv / log-line serialization)
//!    ├─── log-export-csv    (delimited file exporter)
//!    └─── log-postgresql    (DDL, INSERT template, value conversion)
//! ```

pub mod entry;
pub mod error;
pub mod range;
pub mod settings;
pub mod types;
pub mod values;

pub use entry::{
    LogEntry, LogRecord, DEFAULT_ENVIRONMENT, DEFAULT_RESPONSE_TIME_MS, DEFAULT_SERVICE_NAME,
    DEFAULT_STATUS_CODE, FIELD_NAMES,
};
pub use error::LogCoreError;
pub use range::{end_of_day, window_start, TimeRange, DEFAULT_WINDOW_DAYS};
pub use settings::GeneratorSettings;
pub use types::{HttpMethod, HttpProtocol, LogLevel, OutputFormat};
pub use values::LogValue;
