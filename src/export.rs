// 💾 Export - One-shot CSV / JSON writers
//
// write_* propagate errors with context; save_* are the demo-facing wrappers
// that log the failure and report a plain success flag.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write records as CSV with a header row taken from the field names.
/// Returns the number of data rows written.
pub fn write_csv<T: Serialize>(records: &[T], path: &Path) -> Result<usize> {
    if records.is_empty() {
        bail!("No records to write");
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {:?}", path))?;

    for record in records {
        writer
            .serialize(record)
            .context("Failed to serialize record")?;
    }
    writer.flush().context("Failed to flush CSV file")?;

    Ok(records.len())
}

/// Write any serializable value as pretty-printed JSON (2-space indent)
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value).context("Failed to encode JSON")?;
    writer.flush().context("Failed to flush JSON file")?;

    Ok(())
}

pub fn save_to_csv<T: Serialize>(records: &[T], path: &Path) -> bool {
    if records.is_empty() {
        tracing::warn!(path = ?path, "skipping CSV export: no records");
        return false;
    }

    match write_csv(records, path) {
        Ok(rows) => {
            tracing::info!(path = ?path, rows, "saved CSV");
            true
        }
        Err(e) => {
            tracing::error!(path = ?path, "Error saving to CSV: {:#}", e);
            false
        }
    }
}

pub fn save_to_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> bool {
    match write_json(value, path) {
        Ok(()) => {
            tracing::info!(path = ?path, "saved JSON");
            true
        }
        Err(e) => {
            tracing::error!(path = ?path, "Error saving to JSON: {:#}", e);
            false
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
