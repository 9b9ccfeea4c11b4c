//! Data generator for fake HTTP access-log entries.
//!
//! This crate provides the [`LogGenerator`], which assembles complete
//! [`log_core::LogEntry`] records from a set of independent field generators.
//! Every field generator draws from an explicit RNG, so a seeded generator
//! produces the same entries on every run.
//!
//! # Architecture
//!
//! ```text
//!  GeneratorSettings
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  LogGenerator   │  batch driver + record assembler
//! │                 │
//! │  - rng (StdRng) │
//! │  - settings     │
//! │  - index        │
//! └────────┬────────┘
//!          │ one call per field
//!          ▼
//!   field generators ──► WeightedChoice (categorical sampler)
//!          │
//!          ▼
//!      LogEntry
//! ```
//!
//! # Example
//!
//! ```rust
//! use log_generator::LogGenerator;
//!
//! let mut generator = LogGenerator::with_seed(42);
//! let entries = generator.entries(10).unwrap();
//! assert_eq!(entries.len(), 10);
//! ```
//!
//! # Field distributions
//!
//! - `log_level` - INFO 70, WARN 15, ERROR 10, DEBUG 5
//! - `method` - GET 25, POST 60, PUT 10, DELETE 5
//! - `protocol` - HTTP/1.1 60, HTTP/2 35, HTTP/3 5
//! - `path` - 19 `/api/v1/...` templates, `{id}` replaced by a number, UUID or slug
//! - `query_parameters` - none 40, pagination 25, filtering 20, sorting 10, search 5
//! - `source_ip` - public IPv4 70, public IPv6 20, RFC-1918 IPv4 10
//! - `referer` - URL 60, empty 40
//! - `user_id` - UUID 50, username 30, email 15, empty 5
//! - `session_id` - UUID 70, 6 hex digits 20, empty 10

pub mod generator;
pub mod generators;
pub mod sampler;

// Re-exports for convenience
pub use generator::{generate_log_entry, GeneratorError, LogEntryIterator, LogGenerator};
pub use sampler::{SamplerError, WeightedChoice};
