//! DDL and DML for the `log_entries` table.

pub const TABLE_NAME: &str = "log_entries";

/// PostgreSQL column types used by `log_entries`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PgColumnType {
    TimestampTz,
    Uuid,
    VarChar(u32),
    Text,
    Jsonb,
    Inet,
    Integer,
}

impl PgColumnType {
    /// DDL type string.
    pub fn to_ddl(&self) -> String {
        match self {
            PgColumnType::TimestampTz => "TIMESTAMPTZ".to_string(),
            PgColumnType::Uuid => "UUID".to_string(),
            PgColumnType::VarChar(length) => format!("VARCHAR({length})"),
            PgColumnType::Text => "TEXT".to_string(),
            PgColumnType::Jsonb => "JSONB".to_string(),
            PgColumnType::Inet => "INET".to_string(),
            PgColumnType::Integer => "INTEGER".to_string(),
        }
    }
}

/// One column of `log_entries`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub column_type: PgColumnType,
    pub nullable: bool,
}

const fn col(name: &'static str, column_type: PgColumnType) -> Column {
    Column {
        name,
        column_type,
        nullable: true,
    }
}

const fn required(name: &'static str, column_type: PgColumnType) -> Column {
    Column {
        name,
        column_type,
        nullable: false,
    }
}

/// Table columns in DDL and INSERT order.
///
/// `content_length` has no generated counterpart and is inserted as NULL.
pub const COLUMNS: [Column; 23] = [
    required("timestamp", PgColumnType::TimestampTz),
    required("request_id", PgColumnType::Uuid),
    col("method", PgColumnType::VarChar(10)),
    col("path", PgColumnType::Text),
    col("query_parameters", PgColumnType::Jsonb),
    col("protocol", PgColumnType::VarChar(10)),
    col("source_ip", PgColumnType::Inet),
    col("user_agent", PgColumnType::Text),
    col("referer", PgColumnType::Text),
    col("user_id", PgColumnType::VarChar(50)),
    col("session_id", PgColumnType::VarChar(50)),
    col("request_headers", PgColumnType::Jsonb),
    col("request_body", PgColumnType::Text),
    col("content_length", PgColumnType::Integer),
    col("status_code", PgColumnType::Integer),
    col("response_time_ms", PgColumnType::Integer),
    col("response_headers", PgColumnType::Jsonb),
    col("response_body", PgColumnType::Text),
    col("log_level", PgColumnType::VarChar(10)),
    col("service_name", PgColumnType::VarChar(50)),
    col("env", PgColumnType::VarChar(20)),
    col("error_message", PgColumnType::Text),
    col("stack_trace", PgColumnType::Text),
];

/// Columns that get a `idx_log_entries_<column>` index.
pub const INDEXED_COLUMNS: [&str; 4] = ["timestamp", "log_level", "status_code", "service_name"];

/// Column names in INSERT order.
pub fn column_names() -> Vec<&'static str> {
    COLUMNS.iter().map(|c| c.name).collect()
}

/// `CREATE TABLE IF NOT EXISTS log_entries (...)` followed by the index
/// statements.
pub fn create_table_sql() -> String {
    let column_defs: Vec<String> = COLUMNS
        .iter()
        .map(|c| {
            let null_clause = if c.nullable { "" } else { " NOT NULL" };
            format!("    {} {}{}", c.name, c.column_type.to_ddl(), null_clause)
        })
        .collect();

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n);\n\n{}\n",
        TABLE_NAME,
        column_defs.join(",\n"),
        create_indexes_sql().join("\n")
    )
}

pub fn create_indexes_sql() -> Vec<String> {
    INDEXED_COLUMNS
        .iter()
        .map(|column| {
            format!(
                "CREATE INDEX IF NOT EXISTS idx_{TABLE_NAME}_{column} ON {TABLE_NAME}({column});"
            )
        })
        .collect()
}

/// INSERT template with `$1`..`$23` placeholders in [`COLUMNS`] order.
pub fn insert_sql() -> String {
    let placeholders: Vec<String> = (1..=COLUMNS.len()).map(|i| format!("${i}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        TABLE_NAME,
        column_names().join(", "),
        placeholders.join(", ")
    )
}
