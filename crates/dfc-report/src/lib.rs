//! Aggregation and output for cleaned facility census tables.
//!
//! Consumes the cleaned, fixed-schema rows and produces summary
//! statistics plus the run artifacts (cleaned CSV, summary JSON). No
//! cleaning logic lives here.

pub mod output;
pub mod summary;

pub use output::{write_clean_csv, write_summary_json};
pub use summary::{
    InspectionAging, LevelTotal, RosterSummary, SizeBucket, StateAggregate, build_summary,
};
