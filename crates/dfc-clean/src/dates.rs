//! Mixed-format inspection date parsing.
//!
//! Source dates are either a 5-digit spreadsheet serial or one of several
//! textual formats. Each strategy is an independent function returning
//! `Option`, composed first-success-wins; nothing is guessed silently and
//! a value no strategy accepts stays explicitly unparseable.

use chrono::{Datelike, Days, NaiveDate};
use std::ops::RangeInclusive;

/// Serial day 0. Pinned to the historical spreadsheet convention
/// (1899-12-30, the day before the nominal day zero) so decoded dates
/// match the data source bit-for-bit, leap-year quirk included. Never
/// re-derive this constant.
const SERIAL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Years a decoded serial may land in; anything else falls through to the
/// textual formats.
pub const SERIAL_YEAR_RANGE: RangeInclusive<i32> = 2000..=2030;

/// Textual formats in fixed priority order. Ambiguous values such as
/// "01-02-2024" resolve by this order, not calendar plausibility.
const TEXT_FORMATS: [&str; 5] = [
    "%m/%d/%Y", // 9/19/2024
    "%m-%d-%Y", // 9-19-2024
    "%Y-%m-%d", // 2024-09-19
    "%d-%m-%Y", // 19-09-2024
    "%B %d, %Y", // September 19, 2024
];

fn serial_epoch() -> Option<NaiveDate> {
    let (year, month, day) = SERIAL_EPOCH;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Decode a 5-digit serial day count.
///
/// Accepts only when the candidate year lies within [`SERIAL_YEAR_RANGE`];
/// an out-of-range serial returns None so the caller can try the textual
/// formats instead of surfacing a wrong century.
pub fn parse_serial_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 5 || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let days: u64 = value.parse().ok()?;
    let candidate = serial_epoch()?.checked_add_days(Days::new(days))?;
    SERIAL_YEAR_RANGE
        .contains(&candidate.year())
        .then_some(candidate)
}

/// Try each textual format in priority order.
pub fn parse_text_date(value: &str) -> Option<NaiveDate> {
    TEXT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Parse a raw inspection date: serial first, then the textual chain.
///
/// Returns None when no strategy accepts the value; the pipeline records
/// that as an explicit unparseable marker rather than a default date.
pub fn parse_inspection_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_serial_date(trimmed).or_else(|| parse_text_date(trimmed))
}
