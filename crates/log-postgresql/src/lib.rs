//! PostgreSQL support for log records.
//!
//! Provides the `log_entries` table definition, its INSERT template and the
//! conversion of record values into PostgreSQL-compatible parameters. The
//! crate does not open connections; callers bind the produced rows with
//! their client of choice.
//!
//! # Modules
//!
//! - [`ddl`] - table, index and INSERT statements
//! - [`forward`] - LogValue → PostgreSQL value conversion
//!
//! # Example
//!
//! ```ignore
//! use log_postgresql::{create_table_sql, insert_sql, insert_values, column_names};
//!
//! client.batch_execute(&create_table_sql()).await?;
//! let rows = insert_values(&records, &column_names());
//! ```

pub mod ddl;
pub mod forward;

pub use ddl::{
    column_names, create_indexes_sql, create_table_sql, insert_sql, Column, PgColumnType,
    COLUMNS, INDEXED_COLUMNS, TABLE_NAME,
};
pub use forward::{insert_values, PostgreSQLValue};
