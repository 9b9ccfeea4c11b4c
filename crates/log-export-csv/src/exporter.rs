//! CSV exporter for log records.

use crate::error::ExportError;
use csv::{Terminator, WriterBuilder};
use log_core::LogRecord;
use log_format::CsvValue;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from an export operation.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl ExportMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes record batches as CSV with a header row.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    fieldnames: Option<Vec<String>>,
    include_header: bool,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvExporter {
    /// Exporter whose columns are the first record's fields, in order.
    pub fn new() -> Self {
        Self {
            fieldnames: None,
            include_header: true,
        }
    }

    /// Restrict and order the columns.
    ///
    /// Fields outside this list are dropped from every row; listed fields a
    /// record lacks are written as empty strings.
    pub fn with_fieldnames<I, S>(mut self, fieldnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fieldnames = Some(fieldnames.into_iter().map(Into::into).collect());
        self
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Export records to a file.
    ///
    /// An empty batch writes nothing: the file is neither created nor
    /// truncated.
    pub fn export<P: AsRef<Path>>(
        &self,
        records: &[LogRecord],
        output_path: P,
    ) -> Result<ExportMetrics, ExportError> {
        let output_path = output_path.as_ref();

        if records.is_empty() {
            debug!(
                "No records to export, leaving '{}' untouched",
                output_path.display()
            );
            return Ok(ExportMetrics::default());
        }

        let start_time = Instant::now();
        info!(
            "Exporting {} records to CSV file '{}'",
            records.len(),
            output_path.display()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let rows_written = self.write(records, buf_writer)?;

        let metrics = ExportMetrics {
            rows_written,
            file_size_bytes: std::fs::metadata(output_path)?.len(),
            total_duration: start_time.elapsed(),
        };

        info!(
            "CSV export complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Write records as CSV to any writer. Returns the number of data rows.
    pub fn write<W: Write>(&self, records: &[LogRecord], writer: W) -> Result<u64, ExportError> {
        if records.is_empty() {
            return Ok(0);
        }

        let header = header_for(records, self.fieldnames.as_deref());
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);

        if self.include_header {
            writer.write_record(&header)?;
        }

        let mut rows_written = 0u64;
        for record in records {
            writer.write_record(record_to_row(record, &header))?;
            rows_written += 1;

            if rows_written % 10000 == 0 {
                debug!("Written {} rows", rows_written);
            }
        }

        writer.flush()?;
        Ok(rows_written)
    }
}

/// Export records to a CSV file with a header row.
///
/// Columns default to the first record's fields. Returns the number of data
/// rows written; `Ok(0)` for an empty batch, which leaves `path` untouched.
pub fn export_to_csv<P: AsRef<Path>>(
    records: &[LogRecord],
    path: P,
    fieldnames: Option<&[&str]>,
) -> Result<u64, ExportError> {
    let exporter = match fieldnames {
        Some(names) => CsvExporter::new().with_fieldnames(names.iter().copied()),
        None => CsvExporter::new(),
    };
    Ok(exporter.export(records, path)?.rows_written)
}

/// Write records as CSV with a header row to any writer.
pub fn write_csv<W: Write>(
    records: &[LogRecord],
    writer: W,
    fieldnames: Option<&[&str]>,
) -> Result<u64, ExportError> {
    let exporter = match fieldnames {
        Some(names) => CsvExporter::new().with_fieldnames(names.iter().copied()),
        None => CsvExporter::new(),
    };
    exporter.write(records, writer)
}

/// Column names for a batch: the explicit list, or the first record's fields.
pub fn header_for(records: &[LogRecord], fieldnames: Option<&[String]>) -> Vec<String> {
    match fieldnames {
        Some(names) => names.to_vec(),
        None => records
            .first()
            .map(|record| {
                record
                    .field_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Convert a record to CSV cells in `header` order.
pub fn record_to_row(record: &LogRecord, header: &[String]) -> Vec<String> {
    header
        .iter()
        .map(|name| {
            record
                .get(name)
                .map(|value| CsvValue::from(value).into_inner())
                .unwrap_or_default()
        })
        .collect()
}
