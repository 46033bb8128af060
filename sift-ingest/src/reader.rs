//! Read a messy transaction CSV into raw rows.
//!
//! Expected header: `date`, `merchant`, `amount` (any order, extra
//! columns ignored). Cells stay untyped strings here; all cleanup happens
//! in sift-core.

use std::fs;
use std::path::Path;

use sift_core::{RawAmount, RawTransaction};

use crate::error::LoadError;

/// Column names that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 3] = ["date", "merchant", "amount"];

/// Load a transaction CSV.
///
/// Fails with a distinct kind for a missing file, an empty file, or a
/// header lacking required columns; a header-only file is a valid empty
/// table. Cells that are blank after trimming load as absent fields.
pub fn read_transactions_csv(path: impl AsRef<Path>) -> Result<Vec<RawTransaction>, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    if fs::metadata(path)?.len() == 0 {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    let mut missing = Vec::new();
    let mut indices = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
        match headers.iter().position(|h| h.trim() == *name) {
            Some(pos) => indices[slot] = pos,
            None => missing.push((*name).to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }
    let [date_idx, merchant_idx, amount_idx] = indices;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(RawTransaction {
            date: field(&record, date_idx),
            merchant: field(&record, merchant_idx),
            amount: field(&record, amount_idx).map(RawAmount::Text),
        });
    }

    Ok(rows)
}

/// Cell at `idx`, or `None` when the cell is missing or blank.
fn field(record: &csv::StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .filter(|cell| !cell.trim().is_empty())
        .map(str::to_string)
}
