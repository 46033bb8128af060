//! Transaction row types: raw as-read, normalized, and categorized.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw amount field as it appears in the input: usually free text like
/// `"$1,200.00"`, sometimes already numeric (JSON-shaped sources).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

/// A transaction as read from the input table. Any field may be absent or
/// malformed; nothing is validated at this stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub date: Option<String>,
    pub merchant: Option<String>,
    pub amount: Option<RawAmount>,
}

/// A transaction whose date and amount both parsed successfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Raw merchant string, still unnormalized (may be absent).
    pub merchant: Option<String>,
    pub amount: f64,
}

/// A normalized transaction extended with its canonical merchant and
/// category. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedTransaction {
    pub date: NaiveDate,
    pub merchant: Option<String>,
    /// Uppercase, single-spaced merchant key ("UNKNOWN" when absent).
    pub merchant_canonical: String,
    pub amount: f64,
    pub category: Category,
}

/// Spending categories. Closed set; merchants matching no keyword group
/// fall back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Transport,
    Coffee,
    Shopping,
    Housing,
    Entertainment,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Coffee => "Coffee",
            Category::Shopping => "Shopping",
            Category::Housing => "Housing",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
