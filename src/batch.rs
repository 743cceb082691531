// src/batch.rs
// Row-by-row reconciliation of a delimited file: pull a company column and a
// domain/email column, run each pair through the verdict battery, write the
// original columns back out with the verdict appended.
//
// File-level failures (unreadable path, ragged rows, missing columns) abort
// the whole run with one contextual error; a blank or missing cell is an
// ordinary "missing input" verdict, never an abort.

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

use crate::matching::email::extract_email_domain;
use crate::matching::verdict::compare_with_tables;
use crate::models::matching::{ReconciliationStats, RowOutcome};
use crate::utils::progress::ProgressConfig;
use crate::utils::tables::EquivalenceTables;

/// Which column holds a value: by header name or zero-based position.
#[derive(Debug, Clone)]
pub enum ColumnSelector {
    Name(String),
    Index(usize),
}

impl ColumnSelector {
    /// Parse a CLI argument: a bare integer selects by position, anything
    /// else is treated as a header name.
    pub fn parse(arg: &str) -> Self {
        match arg.parse::<usize>() {
            Ok(idx) => ColumnSelector::Index(idx),
            Err(_) => ColumnSelector::Name(arg.to_string()),
        }
    }

    fn resolve(&self, headers: &csv::StringRecord) -> Result<usize> {
        match self {
            ColumnSelector::Index(idx) => {
                if *idx < headers.len() {
                    Ok(*idx)
                } else {
                    Err(anyhow!(
                        "column index {} out of range (file has {} columns)",
                        idx,
                        headers.len()
                    ))
                }
            }
            ColumnSelector::Name(name) => headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| anyhow!("no column named {:?} in header row", name)),
        }
    }
}

/// Reconcile `input_path` into `output_path`, appending `match_label`,
/// `match_score`, and `match_reason` columns. Returns the aggregate stats
/// for the run summary.
pub fn reconcile_file(
    input_path: &Path,
    output_path: &Path,
    company_column: &ColumnSelector,
    domain_column: &ColumnSelector,
    tables: &EquivalenceTables,
    progress: &ProgressConfig,
) -> Result<ReconciliationStats> {
    let started = Instant::now();

    let mut reader = csv::ReaderBuilder::new()
        .flexible(false)
        .from_path(input_path)
        .with_context(|| format!("failed to open input file {}", input_path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header row from {}", input_path.display()))?
        .clone();
    let company_idx = company_column
        .resolve(&headers)
        .context("resolving company column")?;
    let domain_idx = domain_column
        .resolve(&headers)
        .context("resolving domain column")?;
    debug!(
        "resolved columns: company={} domain={}",
        company_idx, domain_idx
    );

    let mut writer = csv::WriterBuilder::new()
        .from_path(output_path)
        .with_context(|| format!("failed to create output file {}", output_path.display()))?;

    let mut out_headers = headers.clone();
    out_headers.push_field("match_label");
    out_headers.push_field("match_score");
    out_headers.push_field("match_reason");
    writer
        .write_record(&out_headers)
        .context("failed to write output header row")?;

    let pb = progress.create_row_bar(None);
    let mut stats = ReconciliationStats::default();

    for (row_number, record) in reader.records().enumerate() {
        let record = record.with_context(|| {
            format!(
                "malformed row {} in {}",
                row_number + 2,
                input_path.display()
            )
        })?;

        let company = cell(&record, company_idx);
        let raw_domain = cell(&record, domain_idx);

        // Email cells are reduced to their host first; the battery applies
        // the registrable-name reduction to whatever remains.
        let extracted_email;
        let domain = match raw_domain {
            Some(value) if value.contains('@') => {
                extracted_email = extract_email_domain(value);
                if extracted_email.is_empty() {
                    None
                } else {
                    Some(extracted_email.as_str())
                }
            }
            other => other,
        };

        let verdict = compare_with_tables(company, domain, tables);
        stats.record(&verdict);

        if log::log_enabled!(log::Level::Debug) {
            let outcome = RowOutcome {
                row_index: row_number,
                company: company.map(str::to_string),
                domain: domain.map(str::to_string),
                verdict: verdict.clone(),
            };
            if let Ok(line) = serde_json::to_string(&outcome) {
                debug!("row outcome: {}", line);
            }
        }

        let mut out_record = record.clone();
        out_record.push_field(verdict.label.as_str());
        out_record.push_field(&verdict.score.to_string());
        out_record.push_field(&verdict.reason);
        writer
            .write_record(&out_record)
            .with_context(|| format!("failed to write output row {}", row_number + 2))?;

        if let Some(pb) = &pb {
            pb.inc(1);
            pb.set_message(format!(
                "{} match / {} unsure / {} no-match",
                stats.likely_match, stats.unsure, stats.likely_not_match
            ));
        }
    }

    writer.flush().context("failed to flush output file")?;
    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    info!(
        "Reconciled {} rows in {:.2?}: {} likely match, {} unsure, {} likely not match (avg score {:.1})",
        stats.rows_processed,
        started.elapsed(),
        stats.likely_match,
        stats.unsure,
        stats.likely_not_match,
        stats.avg_score()
    );

    Ok(stats)
}

/// A cell's trimmed contents, with blank treated as missing.
fn cell<'r>(record: &'r csv::StringRecord, idx: usize) -> Option<&'r str> {
    record.get(idx).map(str::trim).filter(|v| !v.is_empty())
}
