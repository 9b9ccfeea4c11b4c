//! Writing generated entries to a file or to stdout.

use anyhow::Context;
use log_core::{LogEntry, LogRecord, OutputFormat};
use log_export_csv::{write_csv, CsvExporter};
use log_format::{format_entry, format_lines};
use log_generator::LogGenerator;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Generate `count` entries and render each as one line.
///
/// CSV lines carry the 7-column row only; use [`write_entries`] for a
/// headed CSV document.
pub fn generate_log_lines(
    generator: &mut LogGenerator,
    count: usize,
    format: OutputFormat,
) -> anyhow::Result<Vec<String>> {
    let entries = generator.entries(count)?;
    Ok(format_lines(&entries, format)?)
}

/// Write entries to `writer`. Returns the number of entries written.
///
/// CSV goes through the exporter so the header row is always present.
/// Other formats write one line plus `\n` per entry.
pub fn write_entries<W: Write>(
    entries: &[LogEntry],
    format: OutputFormat,
    mut writer: W,
) -> anyhow::Result<u64> {
    if format == OutputFormat::Csv {
        let records: Vec<LogRecord> = entries.iter().map(LogEntry::to_record).collect();
        return Ok(write_csv(&records, writer, None)?);
    }

    for entry in entries {
        writeln!(writer, "{}", format_entry(entry, format)?)?;
    }
    writer.flush()?;

    Ok(entries.len() as u64)
}

/// Write entries to `path`, creating missing parent directories.
pub fn write_to_file(entries: &[LogEntry], format: OutputFormat, path: &Path) -> anyhow::Result<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {parent:?}"))?;
    }

    if format == OutputFormat::Csv {
        let records: Vec<LogRecord> = entries.iter().map(LogEntry::to_record).collect();
        let metrics = CsvExporter::new()
            .export(&records, path)
            .with_context(|| format!("Failed to write {path:?}"))?;
        return Ok(metrics.rows_written);
    }

    let file = File::create(path).with_context(|| format!("Failed to create {path:?}"))?;
    let written = write_entries(entries, format, BufWriter::new(file))
        .with_context(|| format!("Failed to write {path:?}"))?;
    debug!("Wrote {} {} lines to {:?}", written, format, path);

    Ok(written)
}

/// Write entries to `output`, or to stdout when no path is given.
pub fn write_output(
    entries: &[LogEntry],
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<u64> {
    match output {
        Some(path) => write_to_file(entries, format, path),
        None => {
            let stdout = std::io::stdout();
            write_entries(entries, format, BufWriter::new(stdout.lock()))
                .context("Failed to write to stdout")
        }
    }
}
