//! Lenient parsing of messy date and amount fields, and the row filter
//! built on top of them.
//!
//! Both parsers are total: anything unrecognizable becomes `None`, never a
//! panic or an error bubbled to the caller. `normalize_rows` drops rows
//! where either field fails and reports how many were dropped.

use chrono::NaiveDate;
use regex::Regex;

use crate::txn::{RawAmount, RawTransaction, Transaction};

/// Result of normalizing a raw table: surviving rows plus the count of
/// rows dropped for an unparseable date or amount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub rows: Vec<Transaction>,
    pub dropped: usize,
}

/// Whole-string date formats, tried in order. Two-digit-year forms come
/// before their four-digit twins so `01/02/23` is not read as year 23;
/// numeric slash dates are month-first, day-first only as fallback.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%b %d %y",
    "%b %d %Y",
    "%b %d, %y",
    "%b %d, %Y",
    "%d %b %Y",
    "%d %b %y",
];

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parse a messy amount field into a signed float.
///
/// Already-numeric input passes through untouched, except NaN, which can
/// never satisfy the normalized-row invariant. Text is reduced to
/// `[0-9.,-]`, so currency symbols and letters drop out wherever they
/// appear; commas are then discarded as thousands separators and the
/// residue parses as `f64`. `"$1,200.00"` is 1200.0, `"- 3.25 USD"`
/// is -3.25.
pub fn parse_amount(raw: &RawAmount) -> Option<f64> {
    let text = match raw {
        RawAmount::Number(n) => return if n.is_nan() { None } else { Some(*n) },
        RawAmount::Text(s) => s.trim(),
    };
    if text.is_empty() {
        return None;
    }

    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    let cleaned = cleaned.replace(',', "");

    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }
    cleaned.parse().ok()
}

/// Parse a messy date string into a calendar date.
///
/// Tries the whole-string formats first, then falls back to extracting the
/// first recognizable date substring out of free text. Two-digit years
/// follow chrono's `%y` pivot (00-68 → 2000s, 69-99 → 1900s) in both
/// passes.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // "Jan 1st 23" → "Jan 1 23"
    let cleaned = strip_ordinals(trimmed);

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, fmt) {
            return Some(date);
        }
    }

    fuzzy_date(&cleaned)
}

/// Filter raw rows down to those whose date and amount both parse.
///
/// Survivors keep their input order; `rows.len() + dropped` always equals
/// the input length. Side-effect-free: the caller decides how to surface
/// the dropped count.
pub fn normalize_rows(raw: &[RawTransaction]) -> Normalized {
    let mut rows = Vec::with_capacity(raw.len());
    let mut dropped = 0;

    for row in raw {
        let date = row.date.as_deref().and_then(parse_date);
        let amount = row.amount.as_ref().and_then(parse_amount);

        match (date, amount) {
            (Some(date), Some(amount)) => rows.push(Transaction {
                date,
                merchant: row.merchant.clone(),
                amount,
            }),
            _ => dropped += 1,
        }
    }

    Normalized { rows, dropped }
}

fn strip_ordinals(text: &str) -> String {
    match Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b") {
        Ok(re) => re.replace_all(text, "$1").into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Scan free text for the first recognizable date substring, most
/// specific shape first.
fn fuzzy_date(text: &str) -> Option<NaiveDate> {
    // 2023-01-01, 2023/3/5
    let year_first = Regex::new(r"\b(?P<y>\d{4})[-/](?P<m>\d{1,2})[-/](?P<d>\d{1,2})\b").ok()?;
    for caps in year_first.captures_iter(text) {
        let y: i32 = caps["y"].parse().unwrap_or(0);
        let m: u32 = caps["m"].parse().unwrap_or(0);
        let d: u32 = caps["d"].parse().unwrap_or(0);
        if let Some(date) = resolve_month_day(y, m, d) {
            return Some(date);
        }
    }

    // Jan 5 2024, July 2, 2023
    let name_first =
        Regex::new(r"(?i)\b(?P<mon>[a-z]{3,9})\.?\s+(?P<d>\d{1,2})\s*,?\s+(?P<y>\d{2,4})\b")
            .ok()?;
    for caps in name_first.captures_iter(text) {
        let Some(m) = month_from_name(&caps["mon"]) else {
            continue;
        };
        let d: u32 = caps["d"].parse().unwrap_or(0);
        let y = expand_year(caps["y"].parse().unwrap_or(0));
        if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
            return Some(date);
        }
    }

    // 2 July 2023
    let day_first =
        Regex::new(r"(?i)\b(?P<d>\d{1,2})\s+(?P<mon>[a-z]{3,9})\.?\s*,?\s+(?P<y>\d{2,4})\b")
            .ok()?;
    for caps in day_first.captures_iter(text) {
        let Some(m) = month_from_name(&caps["mon"]) else {
            continue;
        };
        let d: u32 = caps["d"].parse().unwrap_or(0);
        let y = expand_year(caps["y"].parse().unwrap_or(0));
        if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
            return Some(date);
        }
    }

    // 01/01/2023, 1/2/23; most ambiguous, so tried last
    let numeric = Regex::new(r"\b(?P<m>\d{1,2})[-/](?P<d>\d{1,2})[-/](?P<y>\d{2,4})\b").ok()?;
    for caps in numeric.captures_iter(text) {
        let m: u32 = caps["m"].parse().unwrap_or(0);
        let d: u32 = caps["d"].parse().unwrap_or(0);
        let y = expand_year(caps["y"].parse().unwrap_or(0));
        if let Some(date) = resolve_month_day(y, m, d) {
            return Some(date);
        }
    }

    None
}

/// Numeric dates resolve month-first; day-first applies only when the
/// month slot cannot hold a real month (e.g. `25/12/2023`).
fn resolve_month_day(year: i32, first: u32, second: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, first, second)
        .or_else(|| NaiveDate::from_ymd_opt(year, second, first))
}

fn expand_year(year: i32) -> i32 {
    match year {
        0..=68 => 2000 + year,
        69..=99 => 1900 + year,
        _ => year,
    }
}

/// Accepts full month names and any 3+ letter prefix ("jan", "sept").
fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|m| m.starts_with(&lower))
        .map(|i| i as u32 + 1)
}
