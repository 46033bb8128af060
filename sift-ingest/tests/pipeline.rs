//! End-to-end: CSV file → read → normalize → categorize → report → write.

use std::fs;

use sift_core::{
    add_categories, normalize_rows, render_spending_report, spending_by_category, top_category,
    Category,
};
use sift_ingest::{read_transactions_csv, write_clean_csv};

#[test]
fn test_full_pipeline_top_category() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("txns.csv");
    fs::write(
        &input,
        "date,merchant,amount\n\
         2023-01-01,UBER *TRIP,$10.00\n\
         2023-01-02,STARBUCKS 123,5.00 USD\n\
         2023-01-03,Amazon Marketplace,$50.00\n\
         2023-01-04,RENT PAYMENT,$1200.00\n",
    )
    .unwrap();

    let raw = read_transactions_csv(&input).unwrap();
    assert_eq!(raw.len(), 4);

    let normalized = normalize_rows(&raw);
    assert_eq!(normalized.dropped, 0);
    assert_eq!(normalized.rows.len(), 4);

    let categorized = add_categories(&normalized.rows);

    let (top, total) = top_category(&categorized).unwrap();
    assert_eq!(top, Category::Housing);
    assert_eq!(total, 1200.0);

    let categories: Vec<Category> = spending_by_category(&categorized)
        .into_iter()
        .map(|(category, _)| category)
        .collect();
    assert_eq!(
        categories,
        vec![
            Category::Transport,
            Category::Coffee,
            Category::Shopping,
            Category::Housing,
        ]
    );

    let report = render_spending_report(&categorized);
    assert!(report.contains("Top spending category: Housing"));
    assert!(report.contains("Housing: $1200.00"));
}

#[test]
fn test_full_pipeline_drops_bad_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("txns.csv");
    fs::write(
        &input,
        "date,merchant,amount\n\
         2023-01-01,UBER *TRIP,$10.00\n\
         INVALID DATE,BAD ROW,NOT_A_NUMBER\n\
         2023-01-02,STARBUCKS 123,5.00 USD\n",
    )
    .unwrap();

    let raw = read_transactions_csv(&input).unwrap();
    let normalized = normalize_rows(&raw);

    assert_eq!(normalized.rows.len(), 2);
    assert_eq!(normalized.dropped, 1);
    assert_eq!(normalized.rows.len() + normalized.dropped, raw.len());
}

#[test]
fn test_full_pipeline_writes_clean_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("txns.csv");
    fs::write(
        &input,
        "date,merchant,amount\n\
         01/01/2023,uber  *trip,$10.00\n\
         Jan 2nd 23,,- 3.25 USD\n",
    )
    .unwrap();

    let raw = read_transactions_csv(&input).unwrap();
    let categorized = add_categories(&normalize_rows(&raw).rows);

    let output = dir.path().join("out/clean.csv");
    write_clean_csv(&categorized, &output).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("date,merchant_canonical,amount,category"));
    assert_eq!(lines.next(), Some("2023-01-01,UBER *TRIP,10.0,Transport"));
    assert_eq!(lines.next(), Some("2023-01-02,UNKNOWN,-3.25,Other"));
}
