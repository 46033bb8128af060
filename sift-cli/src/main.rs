use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use sift_core::{add_categories, normalize_rows, render_spending_report};
use sift_ingest::{read_transactions_csv, write_clean_csv};

#[derive(Parser, Debug)]
#[command(
    name = "sift",
    version,
    about = "Normalize and analyze messy financial transaction data"
)]
struct Cli {
    /// Path to the messy CSV file with transactions
    input_csv: PathBuf,

    /// Optional: path to save the cleaned/normalized CSV
    #[arg(long)]
    output_clean: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("Reading transactions from: {}", cli.input_csv.display());
    let raw = read_transactions_csv(&cli.input_csv)
        .with_context(|| format!("reading {}", cli.input_csv.display()))?;
    println!("Loaded {} row(s)", raw.len());

    println!("Normalizing dates and amounts...");
    let normalized = normalize_rows(&raw);
    if normalized.dropped > 0 {
        println!(
            "Warning: Dropped {} row(s) with invalid date or amount",
            normalized.dropped
        );
    }
    println!(
        "Valid transactions after normalization: {}",
        normalized.rows.len()
    );

    println!("Categorizing transactions...");
    let categorized = add_categories(&normalized.rows);

    print!("{}", render_spending_report(&categorized));

    if let Some(output) = &cli.output_clean {
        // The analysis above already succeeded; a write failure is only a
        // warning and must not flip the exit code.
        match write_clean_csv(&categorized, output) {
            Ok(()) => println!("Cleaned data written to: {}", output.display()),
            Err(err) => eprintln!("Warning: Could not write cleaned CSV: {err:#}"),
        }
    }

    Ok(())
}
