//! Backing store I/O
//!
//! The ledger lives in a comma-separated file with a `Date,Category,Amount,
//! Description` header. Loads read the whole file; saves rewrite the whole
//! file through a temporary sibling so a failed save leaves the previous
//! contents intact.

use std::fs::{self, File};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use log::{debug, trace};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseRecord, FIELDNAMES};

/// Read every row of the store, creating an empty store if it doesn't exist
///
/// Rows are kept as text. Short rows read their missing columns as empty
/// strings, which marks them invalid for pruning rather than failing the load.
pub fn load_records<P: AsRef<Path>>(path: P) -> TrackerResult<Vec<ExpenseRecord>> {
    let path = path.as_ref();

    if !path.exists() {
        create_empty_store(path)?;
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: ExpenseRecord = row.map_err(|e| {
            TrackerError::Csv(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        trace!("loaded row {:?}", record);
        records.push(record);
    }

    debug!("loaded {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Overwrite the store with a header row followed by `records` in order
pub fn save_records<P: AsRef<Path>>(path: P, records: &[ExpenseRecord]) -> TrackerResult<()> {
    let path = path.as_ref();

    ensure_parent(path)?;

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(FIELDNAMES)?;
    for record in records {
        writer.serialize(record)?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    debug!("saved {} rows to {}", records.len(), path.display());
    Ok(())
}

fn create_empty_store(path: &Path) -> TrackerResult<()> {
    ensure_parent(path)?;

    File::create(path).map_err(|e| {
        TrackerError::Storage(format!("Failed to create {}: {}", path.display(), e))
    })?;

    debug!("created empty store at {}", path.display());
    Ok(())
}

fn ensure_parent(path: &Path) -> TrackerResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| {
                TrackerError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })
        }
        _ => Ok(()),
    }
}
