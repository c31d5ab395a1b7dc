use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of parsing a last-inspection value.
///
/// An unparseable value is an explicit state, not a default: the original
/// text is preserved so downstream output can surface it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum InspectionDate {
    Date(NaiveDate),
    Unparseable(String),
}

impl InspectionDate {
    /// The calendar date, if one was recovered.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            InspectionDate::Date(date) => Some(*date),
            InspectionDate::Unparseable(_) => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, InspectionDate::Date(_))
    }

    /// ISO 8601 rendering for parsed dates, empty for unparseable ones.
    pub fn to_iso8601(&self) -> String {
        match self {
            InspectionDate::Date(date) => date.format("%Y-%m-%d").to_string(),
            InspectionDate::Unparseable(_) => String::new(),
        }
    }

    /// The raw source text for unparseable values.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            InspectionDate::Date(_) => None,
            InspectionDate::Unparseable(raw) => Some(raw),
        }
    }
}
