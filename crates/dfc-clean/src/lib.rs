//! Facility census cleaning pipeline.
//!
//! This crate provides the row-wise normalization and validation stages:
//!
//! - **text**: free-text field scrubbing and known-value corrections
//! - **state**: state code normalization and reference-set validation
//! - **numeric**: population count parsing with zero-fill fallback
//! - **dates**: serial and mixed-format inspection date parsing
//! - **classify**: facility size derivation from the total population
//! - **pipeline**: stage ordering and per-row issue tracking

pub mod classify;
pub mod dates;
pub mod numeric;
pub mod pipeline;
pub mod state;
pub mod text;

pub use classify::classify_size;
pub use dates::{parse_inspection_date, parse_serial_date, parse_text_date};
pub use numeric::{normalize_count, parse_count, round_count};
pub use pipeline::{RowIssues, clean_record, clean_table, clean_table_with_report};
pub use state::{STATE_CODES, normalize_state_code, validate_state};
pub use text::{normalize_city, normalize_name, scrub_text};
