//! Row cleaning pipeline with explicit stages.
//!
//! Stages run in order for every row:
//! 1. **Field normalizer**: facility name and city text
//! 2. **Code validator**: state code normalization and flagging
//! 3. **Numeric normalizer**: the four per-level counts
//! 4. **Date parser**: serial and textual inspection dates
//! 5. **Derived classifier**: total population and facility size
//!
//! Every stage is pure row-in/row-out and independent of other rows, so
//! no row's malformation can abort the run; fallback substitutions are
//! tracked per row and aggregated into a quality report.

use tracing::debug;

use dfc_model::{
    CleanRecord, InspectionDate, IssueKind, QualityIssue, QualityReport, RawRecord,
};

use crate::classify::classify_size;
use crate::dates::parse_inspection_date;
use crate::numeric::{normalize_count, round_count};
use crate::state::validate_state;
use crate::text::{normalize_city, normalize_name};

/// Fallback substitutions one row required.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowIssues {
    pub invalid_state: bool,
    /// How many of the four counts were zero-filled.
    pub zero_filled_counts: u32,
    pub unparseable_date: bool,
}

impl RowIssues {
    /// True if the row required any fallback at all.
    pub fn any(&self) -> bool {
        self.invalid_state || self.zero_filled_counts > 0 || self.unparseable_date
    }
}

/// Run all five stages over one raw row.
pub fn clean_record(raw: &RawRecord) -> (CleanRecord, RowIssues) {
    let mut issues = RowIssues::default();

    let name = normalize_name(&raw.name);
    let city = normalize_city(&raw.city);

    let (state, state_valid) = validate_state(&raw.state);
    // An empty state is missing data, not an out-of-domain code.
    issues.invalid_state = !state_valid && !state.is_empty();

    let mut levels = [0.0f64; 4];
    for (slot, raw_level) in levels.iter_mut().zip([
        &raw.level_a,
        &raw.level_b,
        &raw.level_c,
        &raw.level_d,
    ]) {
        let (value, substituted) = normalize_count(raw_level);
        *slot = value;
        if substituted {
            issues.zero_filled_counts += 1;
        }
    }
    let total_population = round_count(levels.iter().sum());

    let last_inspection = match parse_inspection_date(&raw.last_inspection) {
        Some(date) => InspectionDate::Date(date),
        None => {
            issues.unparseable_date = true;
            InspectionDate::Unparseable(raw.last_inspection.trim().to_string())
        }
    };

    let record = CleanRecord {
        name,
        city,
        state,
        state_valid,
        level_a: levels[0],
        level_b: levels[1],
        level_c: levels[2],
        level_d: levels[3],
        total_population,
        facility_size: classify_size(total_population),
        last_inspection,
    };
    (record, issues)
}

/// Clean a full table of raw rows.
///
/// Returns the cleaned rows and the number of rows that required at least
/// one fallback substitution (invalid state, zero-filled count, or
/// unparseable date).
pub fn clean_table(rows: &[RawRecord]) -> (Vec<CleanRecord>, usize) {
    let (records, report) = clean_table_with_report(rows);
    (records, report.flagged_rows)
}

/// Clean a full table and aggregate per-kind issue counts.
pub fn clean_table_with_report(rows: &[RawRecord]) -> (Vec<CleanRecord>, QualityReport) {
    let mut records = Vec::with_capacity(rows.len());
    let mut flagged_rows = 0usize;
    let mut invalid_states = 0u64;
    let mut zero_filled = 0u64;
    let mut unparseable_dates = 0u64;

    for (index, raw) in rows.iter().enumerate() {
        let (record, issues) = clean_record(raw);
        if issues.any() {
            flagged_rows += 1;
            debug!(
                row = index,
                invalid_state = issues.invalid_state,
                zero_filled = issues.zero_filled_counts,
                unparseable_date = issues.unparseable_date,
                "row required fallback substitution"
            );
        }
        invalid_states += u64::from(issues.invalid_state);
        zero_filled += u64::from(issues.zero_filled_counts);
        unparseable_dates += u64::from(issues.unparseable_date);
        records.push(record);
    }

    let mut issues = Vec::new();
    for (kind, count) in [
        (IssueKind::InvalidState, invalid_states),
        (IssueKind::ZeroFilledCount, zero_filled),
        (IssueKind::UnparseableDate, unparseable_dates),
    ] {
        if count > 0 {
            issues.push(QualityIssue { kind, count });
        }
    }

    let report = QualityReport {
        rows: rows.len(),
        flagged_rows,
        issues,
    };
    (records, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, state: &str, levels: [&str; 4], date: &str) -> RawRecord {
        RawRecord {
            name: name.to_string(),
            city: "TACOMA".to_string(),
            state: state.to_string(),
            level_a: levels[0].to_string(),
            level_b: levels[1].to_string(),
            level_c: levels[2].to_string(),
            level_d: levels[3].to_string(),
            last_inspection: date.to_string(),
        }
    }

    #[test]
    fn total_is_exact_sum_of_levels() {
        let (record, _) = clean_record(&raw(
            "NORTHWEST DETENTION CENTER",
            "WA",
            ["100.5", "200.25", "0.125", "3"],
            "45292",
        ));
        let expected = round_count(record.levels().iter().sum());
        assert_eq!(record.total_population, expected);
    }

    #[test]
    fn empty_state_is_not_an_invalid_state_issue() {
        let (record, issues) = clean_record(&raw("A", "", ["1", "1", "1", "1"], "45292"));
        assert!(!record.state_valid);
        assert!(record.state.is_empty());
        assert!(!issues.invalid_state);
    }

    #[test]
    fn unparseable_date_preserves_raw_text() {
        let (record, issues) =
            clean_record(&raw("A", "WA", ["1", "1", "1", "1"], "  sometime  "));
        assert!(issues.unparseable_date);
        assert_eq!(
            record.last_inspection,
            InspectionDate::Unparseable("sometime".to_string())
        );
    }

    #[test]
    fn issue_count_counts_rows_not_issues() {
        // One clean row, one row with two kinds of issue.
        let rows = vec![
            raw("A", "WA", ["1", "1", "1", "1"], "45292"),
            raw("B", "XX", ["NA", "1", "1", "1"], "not a date"),
        ];
        let (records, flagged) = clean_table(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(flagged, 1);

        let (_, report) = clean_table_with_report(&rows);
        assert_eq!(report.rows, 2);
        assert_eq!(report.flagged_rows, 1);
        assert_eq!(report.issue_count(IssueKind::InvalidState), 1);
        assert_eq!(report.issue_count(IssueKind::ZeroFilledCount), 1);
        assert_eq!(report.issue_count(IssueKind::UnparseableDate), 1);
        assert_eq!(report.total_issue_count(), 3);
    }
}
