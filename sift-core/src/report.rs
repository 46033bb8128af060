//! Per-category spending totals and the rendered report.

use std::cmp::Ordering;
use std::fmt::Write;

use crate::txn::{CategorizedTransaction, Category};

/// Sum `abs(amount)` per category, in first-seen order.
///
/// Categories absent from the input never appear (no zero-filling of the
/// full set); empty input yields an empty list.
pub fn spending_by_category(rows: &[CategorizedTransaction]) -> Vec<(Category, f64)> {
    let mut totals: Vec<(Category, f64)> = Vec::new();
    for row in rows {
        match totals.iter_mut().find(|(category, _)| *category == row.category) {
            Some((_, total)) => *total += row.amount.abs(),
            None => totals.push((row.category, row.amount.abs())),
        }
    }
    totals
}

/// The category with the largest accumulated total, or `None` for empty
/// input. Ties keep the earliest-seen category (strict `>` over the
/// first-seen-ordered totals).
pub fn top_category(rows: &[CategorizedTransaction]) -> Option<(Category, f64)> {
    spending_by_category(rows)
        .into_iter()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
}

/// Render the spending report: one `Category: $X.XX` line per bucket,
/// largest first (the stable sort keeps equal buckets in first-seen
/// order), then the top category. Pure; the caller prints it.
pub fn render_spending_report(rows: &[CategorizedTransaction]) -> String {
    let mut totals = spending_by_category(rows);
    if totals.is_empty() {
        return "No spending data available.\n".to_string();
    }

    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut out = String::from("\n=== Spend by category ===\n");
    for (category, total) in &totals {
        let _ = writeln!(out, "{category}: ${total:.2}");
    }
    if let Some((top, _)) = top_category(rows) {
        let _ = writeln!(out, "\nTop spending category: {top}");
    }
    out
}
