//! sift-core: pure transforms for cleaning and analyzing messy
//! transaction tables.
//!
//! Raw rows are normalized (lenient date/amount parsing with
//! drop-and-count), then categorized via canonical merchant and ordered
//! keyword rules, then aggregated into per-category spending totals.
//! Everything is synchronous and in-memory; file and terminal concerns
//! live in sift-ingest and sift-cli.

pub mod categorize;
pub mod normalize;
pub mod report;
pub mod txn;

pub use categorize::{
    add_categories, canonicalize_merchant, categorize, CATEGORY_RULES, UNKNOWN_MERCHANT,
};
pub use normalize::{normalize_rows, parse_amount, parse_date, Normalized};
pub use report::{render_spending_report, spending_by_category, top_category};
pub use txn::{CategorizedTransaction, Category, RawAmount, RawTransaction, Transaction};
