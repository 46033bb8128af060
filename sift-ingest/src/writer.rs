//! Write the cleaned transaction table back out as CSV.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use sift_core::CategorizedTransaction;

/// Output row for the cleaned CSV: ISO date, canonical merchant, parsed
/// amount, category label.
#[derive(Debug, Serialize)]
struct CleanRow<'a> {
    date: String,
    merchant_canonical: &'a str,
    amount: f64,
    category: &'a str,
}

/// Serialize the cleaned table to `path`, creating parent directories as
/// needed.
pub fn write_clean_csv(rows: &[CategorizedTransaction], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }

    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    for row in rows {
        wtr.serialize(CleanRow {
            date: row.date.format("%Y-%m-%d").to_string(),
            merchant_canonical: &row.merchant_canonical,
            amount: row.amount,
            category: row.category.as_str(),
        })
        .with_context(|| format!("writing {}", path.display()))?;
    }

    wtr.flush().with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
