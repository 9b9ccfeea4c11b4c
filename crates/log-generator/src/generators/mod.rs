//! Individual field generators.
//!
//! Each generator produces one attribute of a log entry. All of them take
//! the RNG explicitly so callers can substitute a seeded one.

pub mod client;
pub mod http;
pub mod path;
pub mod query;
pub mod timestamp;
pub mod uuid;

pub use client::{
    generate_referer, generate_session_id, generate_source_ip, generate_user_agent,
    generate_user_id,
};
pub use http::{generate_log_level, generate_method, generate_protocol};
pub use path::generate_path;
pub use query::generate_query_parameters;
pub use timestamp::{generate_timestamp, generate_timestamp_in, generate_timestamps};
pub use self::uuid::{generate_request_id, generate_uuid_v4};
