//! sift-ingest: the tabular boundary. CSV in, cleaned CSV out.
//!
//! Reading validates the schema and surfaces distinct load-error kinds;
//! per-cell messiness is passed through untouched for sift-core to
//! resolve.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::LoadError;
pub use reader::{read_transactions_csv, REQUIRED_COLUMNS};
pub use writer::write_clean_csv;
