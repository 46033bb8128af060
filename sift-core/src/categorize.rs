//! Merchant canonicalization and keyword-based category mapping.
//!
//! No fuzzy matching; ordered substring rules cover the fixed category
//! set.

use crate::txn::{CategorizedTransaction, Category, Transaction};

/// Sentinel for absent or blank merchant fields.
pub const UNKNOWN_MERCHANT: &str = "UNKNOWN";

/// Ordered keyword groups. The first group containing a matching keyword
/// wins, so order is part of the contract.
pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Transport, &["UBER", "LYFT", "TAXI", "RIDE"]),
    (Category::Coffee, &["STARBUCKS", "DUNKIN", "COFFEE", "CAFE"]),
    (Category::Shopping, &["AMAZON", "AMZN", "WALMART", "TARGET", "SHOP"]),
    (Category::Housing, &["RENT", "HOUSING", "MORTGAGE", "UTILITY"]),
    (Category::Entertainment, &["NETFLIX", "SPOTIFY", "ENTERTAINMENT"]),
];

/// Uppercase a merchant name and collapse every whitespace run to a single
/// space. Absent or blank input maps to `"UNKNOWN"`. Idempotent.
pub fn canonicalize_merchant(merchant: Option<&str>) -> String {
    let Some(merchant) = merchant else {
        return UNKNOWN_MERCHANT.to_string();
    };

    let collapsed = merchant.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return UNKNOWN_MERCHANT.to_string();
    }
    collapsed.to_uppercase()
}

/// Map a canonical merchant to its category.
///
/// Substring containment against the ordered keyword groups (so `SHOP`
/// matches even inside a longer token), first match wins, `Other` as the
/// fallback. Input is re-uppercased, making the function safe on raw
/// strings too.
pub fn categorize(merchant: &str) -> Category {
    let upper = merchant.to_uppercase();
    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| upper.contains(keyword)) {
            return *category;
        }
    }
    Category::Other
}

/// Attach canonical merchant and category to every normalized row.
/// Builds new rows; the input is left untouched.
pub fn add_categories(rows: &[Transaction]) -> Vec<CategorizedTransaction> {
    rows.iter()
        .map(|row| {
            let merchant_canonical = canonicalize_merchant(row.merchant.as_deref());
            let category = categorize(&merchant_canonical);
            CategorizedTransaction {
                date: row.date,
                merchant: row.merchant.clone(),
                merchant_canonical,
                amount: row.amount,
                category,
            }
        })
        .collect()
}
