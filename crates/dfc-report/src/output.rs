//! Run artifact writers: cleaned CSV and summary JSON.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use dfc_model::{CleanRecord, QualityReport};

use crate::summary::RosterSummary;

/// Marker written to the date column when no format matched.
pub const UNPARSEABLE_MARKER: &str = "UNPARSEABLE";

const CLEAN_HEADERS: [&str; 12] = [
    "Name",
    "City",
    "State",
    "StateValid",
    "Level_A",
    "Level_B",
    "Level_C",
    "Level_D",
    "TotalPopulation",
    "FacilitySize",
    "LastInspectionDate",
    "LastInspectionRaw",
];

fn format_count(value: f64) -> String {
    format!("{value:.2}")
}

/// Write the cleaned table with the fixed output schema.
///
/// Parsed dates are ISO 8601; unparseable dates carry the explicit
/// marker in the date column and the preserved source text in the raw
/// column.
pub fn write_clean_csv(path: &Path, records: &[CleanRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create clean csv: {}", path.display()))?;
    writer
        .write_record(CLEAN_HEADERS)
        .context("write clean csv header")?;
    for record in records {
        let (date_field, raw_field) = match record.last_inspection.raw_text() {
            Some(raw) => (UNPARSEABLE_MARKER.to_string(), raw.to_string()),
            None => (record.last_inspection.to_iso8601(), String::new()),
        };
        let fields: [String; 12] = [
            record.name.clone(),
            record.city.clone(),
            record.state.clone(),
            record.state_valid.to_string(),
            format_count(record.level_a),
            format_count(record.level_b),
            format_count(record.level_c),
            format_count(record.level_d),
            format_count(record.total_population),
            record.facility_size.as_str().to_string(),
            date_field,
            raw_field,
        ];
        writer
            .write_record(&fields)
            .context("write clean csv row")?;
    }
    writer.flush().context("flush clean csv")?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct RunArtifact<'a> {
    summary: &'a RosterSummary,
    quality: &'a QualityReport,
}

/// Write the machine-readable run artifact.
pub fn write_summary_json(
    path: &Path,
    summary: &RosterSummary,
    quality: &QualityReport,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create summary json: {}", path.display()))?;
    let artifact = RunArtifact { summary, quality };
    serde_json::to_writer_pretty(BufWriter::new(file), &artifact)
        .context("serialize summary json")?;
    Ok(())
}
