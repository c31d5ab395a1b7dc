use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Facility size category derived from the total population count.
///
/// Boundaries are half-open: Large iff total >= 1000; Medium iff
/// 500 <= total < 1000; Small iff 100 <= total < 500; else VerySmall.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FacilitySize {
    VerySmall,
    Small,
    Medium,
    Large,
}

impl FacilitySize {
    /// All categories in ascending order, for exhaustive reporting.
    pub const ALL: [FacilitySize; 4] = [
        FacilitySize::VerySmall,
        FacilitySize::Small,
        FacilitySize::Medium,
        FacilitySize::Large,
    ];

    /// The label as it appears in cleaned output and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilitySize::VerySmall => "Very Small (<100)",
            FacilitySize::Small => "Small (100-499)",
            FacilitySize::Medium => "Medium (500-999)",
            FacilitySize::Large => "Large (1000+)",
        }
    }
}

impl fmt::Display for FacilitySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FacilitySize {
    type Err = String;

    /// Parse a size label back into a category (case-insensitive, accepts
    /// the full label or the bare bucket name).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        let bare = normalized
            .split_once(" (")
            .map_or(normalized.as_str(), |(head, _)| head);
        match bare {
            "VERY SMALL" => Ok(FacilitySize::VerySmall),
            "SMALL" => Ok(FacilitySize::Small),
            "MEDIUM" => Ok(FacilitySize::Medium),
            "LARGE" => Ok(FacilitySize::Large),
            _ => Err(format!("Unknown facility size: {}", s)),
        }
    }
}
