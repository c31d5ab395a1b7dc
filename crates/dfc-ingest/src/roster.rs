//! Roster file reading.
//!
//! Source exports carry a preamble of non-data metadata lines before the
//! header row. The preamble length is fixed per source; when the caller
//! does not pin it, the header row is located with a row-statistics
//! heuristic (mostly-alphabetic, fully-populated rows read as headers,
//! numeric or sparse rows read as data).

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use dfc_model::RawRecord;

use crate::error::{IngestError, Result};

/// The fixed logical schema: Name, City, State, Level_A..Level_D,
/// LastInspectionDate. Trailing columns in the source are ignored.
pub const FIELD_COUNT: usize = 8;

#[derive(Debug, Clone)]
pub struct RosterTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRecord>,
}

#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Number of non-data lines before the header row. None selects the
    /// heuristic header search.
    pub preamble_lines: Option<usize>,
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            preamble_lines: None,
            delimiter: b',',
        }
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

#[derive(Debug, Default, Clone, Copy)]
struct RowStats {
    total: usize,
    non_empty: usize,
    numeric: usize,
    alpha: usize,
}

impl RowStats {
    fn ratio(self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }

    fn non_empty_ratio(self) -> f64 {
        self.ratio(self.non_empty)
    }

    fn numeric_ratio(self) -> f64 {
        self.ratio(self.numeric)
    }

    fn alpha_ratio(self) -> f64 {
        self.ratio(self.alpha)
    }
}

fn row_stats(row: &[String]) -> RowStats {
    let mut stats = RowStats {
        total: row.len(),
        ..RowStats::default()
    };
    for cell in row {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            continue;
        }
        stats.non_empty += 1;
        if trimmed.parse::<f64>().is_ok() {
            stats.numeric += 1;
        }
        if trimmed.chars().any(|ch| ch.is_ascii_alphabetic()) {
            stats.alpha += 1;
        }
    }
    stats
}

/// Data rows are dense and carry numbers; preamble lines are sparse text.
fn is_data_like(stats: RowStats) -> bool {
    stats.numeric_ratio() >= 0.2 && stats.non_empty_ratio() >= 0.5
}

fn is_header_like(stats: RowStats) -> bool {
    stats.non_empty_ratio() >= 0.8 && stats.alpha_ratio() >= 0.5 && stats.numeric_ratio() <= 0.1
}

/// Pick the last header-like row before data starts.
fn detect_header_row(rows: &[Vec<String>]) -> usize {
    if rows.is_empty() {
        return 0;
    }
    let probe = rows.len().min(8);
    let stats: Vec<RowStats> = rows.iter().take(probe).map(|row| row_stats(row)).collect();
    let data_index = stats.iter().position(|stat| is_data_like(*stat));
    let search_end = data_index.unwrap_or(1).max(1);
    let mut candidate = 0usize;
    for (index, stat) in stats.iter().enumerate().take(search_end) {
        if is_header_like(*stat) {
            candidate = index;
        }
    }
    candidate
}

fn record_from_row(row: &[String]) -> RawRecord {
    let field = |index: usize| row.get(index).cloned().unwrap_or_default();
    RawRecord {
        name: field(0),
        city: field(1),
        state: field(2),
        level_a: field(3),
        level_b: field(4),
        level_c: field(5),
        level_d: field(6),
        last_inspection: field(7),
    }
}

/// Read a roster file with default options.
pub fn read_roster_table(path: &Path) -> Result<RosterTable> {
    read_roster_table_with_options(path, &IngestOptions::default())
}

/// Read a roster file, skipping the preamble and projecting each data row
/// onto the fixed schema.
///
/// Fully-empty lines are dropped; short rows are padded with empty fields
/// (a missing cell is missing data, not a parse failure); trailing
/// columns beyond the schema are ignored.
pub fn read_roster_table_with_options(
    path: &Path,
    options: &IngestOptions,
) -> Result<RosterTable> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(file);

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(RosterTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }

    let header_index = match options.preamble_lines {
        Some(count) => count.min(raw_rows.len() - 1),
        None => detect_header_row(&raw_rows),
    };
    debug!(
        path = %path.display(),
        header_index,
        rows = raw_rows.len(),
        "located roster header"
    );

    let headers: Vec<String> = raw_rows[header_index]
        .iter()
        .take(FIELD_COUNT)
        .cloned()
        .collect();
    let rows = raw_rows
        .iter()
        .skip(header_index + 1)
        .map(|row| record_from_row(row))
        .collect();
    Ok(RosterTable { headers, rows })
}
