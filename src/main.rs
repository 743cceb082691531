// src/main.rs

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use uuid::Uuid;

use matcher_lib::batch::{reconcile_file, ColumnSelector};
use matcher_lib::utils::progress::ProgressConfig;
use matcher_lib::utils::tables::TABLES;

/// Reconcile company names against web domains / email addresses in a
/// delimited file, appending a match verdict to every row.
#[derive(Parser, Debug)]
#[command(name = "reconcile", version, about)]
struct Cli {
    /// Input CSV file with a header row
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Output CSV file (input columns plus match_label/match_score/match_reason)
    #[arg(long, short = 'o')]
    output: PathBuf,

    /// Company-name column: header name or zero-based index
    #[arg(long, default_value = "company")]
    company_column: String,

    /// Domain/email column: header name or zero-based index
    #[arg(long, default_value = "domain")]
    domain_column: String,
}

fn main() -> Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let progress = ProgressConfig::from_env();

    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    info!(
        "Starting reconciliation run {} at {} ({} -> {})",
        run_id,
        started_at.to_rfc3339(),
        cli.input.display(),
        cli.output.display()
    );

    let stats = reconcile_file(
        &cli.input,
        &cli.output,
        &ColumnSelector::parse(&cli.company_column),
        &ColumnSelector::parse(&cli.domain_column),
        &TABLES,
        &progress,
    )
    .context("reconciliation run failed")?;

    info!(
        "Run {} complete: {} rows, {} likely match, {} unsure, {} likely not match",
        run_id,
        stats.rows_processed,
        stats.likely_match,
        stats.unsure,
        stats.likely_not_match
    );

    Ok(())
}
