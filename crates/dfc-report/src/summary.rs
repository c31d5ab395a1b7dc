//! Descriptive aggregation over cleaned roster rows.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dfc_model::{CleanRecord, FacilitySize};

/// Count and share for one facility-size bucket. All four buckets are
/// always present, zero counts included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeBucket {
    pub size: FacilitySize,
    pub label: String,
    pub facilities: usize,
    pub share_pct: f64,
}

/// Population total and share for one security level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelTotal {
    pub level: String,
    pub total: f64,
    pub share_pct: f64,
}

/// Per-state facility count and population total.
///
/// Rows with an empty state code are excluded; non-empty codes flagged
/// invalid are kept (aggregation decides, validation only flags).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateAggregate {
    pub state: String,
    pub facilities: usize,
    pub total_population: f64,
}

/// Inspection-age statistics in days relative to the reference date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectionAging {
    pub parsed: usize,
    pub unparseable: usize,
    pub min_days: Option<i64>,
    pub max_days: Option<i64>,
    pub mean_days: Option<f64>,
    pub median_days: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSummary {
    pub rows: usize,
    pub as_of: NaiveDate,
    pub sizes: Vec<SizeBucket>,
    pub levels: Vec<LevelTotal>,
    pub states: Vec<StateAggregate>,
    pub inspections: InspectionAging,
}

fn pct(part: f64, whole: f64) -> f64 {
    if whole == 0.0 { 0.0 } else { part / whole * 100.0 }
}

fn size_distribution(records: &[CleanRecord]) -> Vec<SizeBucket> {
    let mut counts: BTreeMap<FacilitySize, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.facility_size).or_insert(0) += 1;
    }
    FacilitySize::ALL
        .iter()
        .map(|size| {
            let facilities = counts.get(size).copied().unwrap_or(0);
            SizeBucket {
                size: *size,
                label: size.as_str().to_string(),
                facilities,
                share_pct: pct(facilities as f64, records.len() as f64),
            }
        })
        .collect()
}

fn level_totals(records: &[CleanRecord]) -> Vec<LevelTotal> {
    let mut totals = [0.0f64; 4];
    for record in records {
        for (slot, value) in totals.iter_mut().zip(record.levels()) {
            *slot += value;
        }
    }
    let grand_total: f64 = totals.iter().sum();
    ["A", "B", "C", "D"]
        .iter()
        .zip(totals)
        .map(|(level, total)| LevelTotal {
            level: (*level).to_string(),
            total,
            share_pct: pct(total, grand_total),
        })
        .collect()
}

fn state_aggregates(records: &[CleanRecord]) -> Vec<StateAggregate> {
    let mut by_state: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for record in records {
        if record.state.is_empty() {
            continue;
        }
        let entry = by_state.entry(record.state.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.total_population;
    }
    by_state
        .into_iter()
        .map(|(state, (facilities, total_population))| StateAggregate {
            state: state.to_string(),
            facilities,
            total_population,
        })
        .collect()
}

fn inspection_aging(records: &[CleanRecord], as_of: NaiveDate) -> InspectionAging {
    let mut ages: Vec<i64> = records
        .iter()
        .filter_map(|record| record.last_inspection.date())
        .map(|date| (as_of - date).num_days())
        .collect();
    ages.sort_unstable();

    let parsed = ages.len();
    let unparseable = records.len() - parsed;
    if ages.is_empty() {
        return InspectionAging {
            parsed,
            unparseable,
            ..InspectionAging::default()
        };
    }

    let sum: i64 = ages.iter().sum();
    let median = if parsed % 2 == 1 {
        ages[parsed / 2] as f64
    } else {
        (ages[parsed / 2 - 1] + ages[parsed / 2]) as f64 / 2.0
    };
    InspectionAging {
        parsed,
        unparseable,
        min_days: ages.first().copied(),
        max_days: ages.last().copied(),
        mean_days: Some(sum as f64 / parsed as f64),
        median_days: Some(median),
    }
}

/// Build the full summary for a cleaned table.
///
/// `as_of` anchors the inspection-age statistics; callers pass the run
/// date (or a pinned date for reproducible output).
pub fn build_summary(records: &[CleanRecord], as_of: NaiveDate) -> RosterSummary {
    RosterSummary {
        rows: records.len(),
        as_of,
        sizes: size_distribution(records),
        levels: level_totals(records),
        states: state_aggregates(records),
        inspections: inspection_aging(records, as_of),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfc_model::InspectionDate;

    fn record(state: &str, levels: [f64; 4], inspection: InspectionDate) -> CleanRecord {
        let total_population: f64 = levels.iter().sum();
        CleanRecord {
            name: "FACILITY".to_string(),
            city: "CITY".to_string(),
            state: state.to_string(),
            state_valid: !state.is_empty() && state != "XX",
            level_a: levels[0],
            level_b: levels[1],
            level_c: levels[2],
            level_d: levels[3],
            total_population,
            facility_size: dfc_clean::classify_size(total_population),
            last_inspection: inspection,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn all_size_buckets_are_present() {
        let records = vec![record(
            "WA",
            [600.0, 300.0, 200.0, 100.0],
            InspectionDate::Date(date(2024, 1, 1)),
        )];
        let summary = build_summary(&records, date(2024, 12, 31));
        assert_eq!(summary.sizes.len(), 4);
        let large = summary
            .sizes
            .iter()
            .find(|bucket| bucket.size == FacilitySize::Large)
            .expect("large bucket");
        assert_eq!(large.facilities, 1);
        assert_eq!(large.share_pct, 100.0);
        let empty_buckets = summary
            .sizes
            .iter()
            .filter(|bucket| bucket.facilities == 0)
            .count();
        assert_eq!(empty_buckets, 3);
    }

    #[test]
    fn level_shares_sum_to_the_grand_total() {
        let records = vec![
            record("WA", [10.0, 20.0, 30.0, 40.0], InspectionDate::Date(date(2024, 1, 1))),
            record("OR", [40.0, 30.0, 20.0, 10.0], InspectionDate::Date(date(2024, 2, 1))),
        ];
        let summary = build_summary(&records, date(2024, 12, 31));
        let total: f64 = summary.levels.iter().map(|level| level.total).sum();
        assert_eq!(total, 200.0);
        let share: f64 = summary.levels.iter().map(|level| level.share_pct).sum();
        assert!((share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_state_rows_are_excluded_from_state_aggregates() {
        let records = vec![
            record("WA", [1.0, 0.0, 0.0, 0.0], InspectionDate::Date(date(2024, 1, 1))),
            record("", [1.0, 0.0, 0.0, 0.0], InspectionDate::Date(date(2024, 1, 1))),
            record("XX", [1.0, 0.0, 0.0, 0.0], InspectionDate::Date(date(2024, 1, 1))),
        ];
        let summary = build_summary(&records, date(2024, 12, 31));
        let states: Vec<&str> = summary
            .states
            .iter()
            .map(|aggregate| aggregate.state.as_str())
            .collect();
        // Flagged-invalid but non-empty codes stay in the aggregation.
        assert_eq!(states, vec!["WA", "XX"]);
    }

    #[test]
    fn inspection_aging_statistics() {
        let as_of = date(2024, 12, 31);
        let records = vec![
            record("WA", [1.0; 4], InspectionDate::Date(date(2024, 12, 21))), // 10 days
            record("WA", [1.0; 4], InspectionDate::Date(date(2024, 12, 11))), // 20 days
            record("WA", [1.0; 4], InspectionDate::Date(date(2024, 12, 1))),  // 30 days
            record("WA", [1.0; 4], InspectionDate::Unparseable("junk".to_string())),
        ];
        let aging = build_summary(&records, as_of).inspections;
        assert_eq!(aging.parsed, 3);
        assert_eq!(aging.unparseable, 1);
        assert_eq!(aging.min_days, Some(10));
        assert_eq!(aging.max_days, Some(30));
        assert_eq!(aging.mean_days, Some(20.0));
        assert_eq!(aging.median_days, Some(20.0));
    }

    #[test]
    fn empty_table_produces_an_empty_summary() {
        let summary = build_summary(&[], date(2024, 12, 31));
        assert_eq!(summary.rows, 0);
        assert_eq!(summary.sizes.len(), 4);
        assert!(summary.states.is_empty());
        assert_eq!(summary.inspections.parsed, 0);
        assert_eq!(summary.inspections.mean_days, None);
    }
}
