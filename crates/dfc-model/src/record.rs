use serde::{Deserialize, Serialize};

use crate::inspection::InspectionDate;
use crate::size::FacilitySize;

/// One row of the source roster, exactly as read.
///
/// All fields are raw text; nothing is trimmed, decoded, or validated here.
/// A `RawRecord` is consumed once by the cleaning pipeline and discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    pub level_a: String,
    pub level_b: String,
    pub level_c: String,
    pub level_d: String,
    pub last_inspection: String,
}

/// One cleaned roster row, immutable once the pipeline has run.
///
/// `total_population` is always the sum of the four level fields after
/// normalization; it is never stored or edited independently.
/// `state_valid` flags the state code without altering it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    pub state_valid: bool,
    pub level_a: f64,
    pub level_b: f64,
    pub level_c: f64,
    pub level_d: f64,
    pub total_population: f64,
    pub facility_size: FacilitySize,
    pub last_inspection: InspectionDate,
}

impl CleanRecord {
    /// The four per-level population counts in A..D order.
    pub fn levels(&self) -> [f64; 4] {
        [self.level_a, self.level_b, self.level_c, self.level_d]
    }
}
