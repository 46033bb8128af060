//! Error kinds for loading transaction tables.
//!
//! Per-value parse failures are not errors; the normalizer drops those
//! rows silently. These variants cover what makes a run unrecoverable:
//! missing file, empty file, wrong schema.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("CSV file not found: {0}")]
    NotFound(PathBuf),

    #[error("CSV file is empty: {0}")]
    Empty(PathBuf),

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
