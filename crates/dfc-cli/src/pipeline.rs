//! Clean run pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the roster file, skip the preamble
//! 2. **Clean**: run the five normalization stages per row
//! 3. **Summarize**: size distribution, level totals, per-state
//!    aggregates, inspection aging
//! 4. **Output**: write the cleaned CSV and the summary JSON
//!
//! Data-quality issues are reported, never fatal; the run only fails when
//! the input cannot be read or an artifact cannot be written.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span};

use dfc_clean::clean_table_with_report;
use dfc_ingest::{IngestOptions, read_roster_table_with_options};
use dfc_model::QualityReport;
use dfc_report::{RosterSummary, build_summary, write_clean_csv, write_summary_json};

/// Options for one clean run.
#[derive(Debug, Clone)]
pub struct CleanRunOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Fixed preamble line count; None selects header auto-detection.
    pub preamble_lines: Option<usize>,
    pub delimiter: u8,
    /// Reference date for inspection-age statistics.
    pub as_of: NaiveDate,
    /// Report without writing artifacts.
    pub dry_run: bool,
}

/// Result of one clean run.
#[derive(Debug, Clone)]
pub struct CleanRunResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub rows: usize,
    pub quality: QualityReport,
    pub summary: RosterSummary,
    pub clean_csv: Option<PathBuf>,
    pub summary_json: Option<PathBuf>,
}

/// Run ingest, clean, summarize, and output for one roster file.
pub fn run_clean(options: &CleanRunOptions) -> Result<CleanRunResult> {
    let span = info_span!("clean", input = %options.input.display());
    let _guard = span.enter();

    let ingest_options = IngestOptions {
        preamble_lines: options.preamble_lines,
        delimiter: options.delimiter,
    };
    let table = read_roster_table_with_options(&options.input, &ingest_options)
        .with_context(|| format!("read roster: {}", options.input.display()))?;
    info!(rows = table.rows.len(), "ingested roster");

    let (records, quality) = clean_table_with_report(&table.rows);
    info!(
        rows = quality.rows,
        flagged = quality.flagged_rows,
        "cleaned roster"
    );

    let summary = build_summary(&records, options.as_of);

    let mut result = CleanRunResult {
        input: options.input.clone(),
        output_dir: options.output_dir.clone(),
        rows: records.len(),
        quality,
        summary,
        clean_csv: None,
        summary_json: None,
    };
    if options.dry_run {
        info!("dry run, skipping output");
        return Ok(result);
    }

    fs::create_dir_all(&options.output_dir)
        .with_context(|| format!("create output dir: {}", options.output_dir.display()))?;
    let clean_csv = options.output_dir.join("clean.csv");
    write_clean_csv(&clean_csv, &records)?;
    let summary_json = options.output_dir.join("summary.json");
    write_summary_json(&summary_json, &result.summary, &result.quality)?;
    info!(
        clean_csv = %clean_csv.display(),
        summary_json = %summary_json.display(),
        "wrote artifacts"
    );

    result.clean_csv = Some(clean_csv);
    result.summary_json = Some(summary_json);
    Ok(result)
}
