pub mod inspection;
pub mod quality;
pub mod record;
pub mod size;

pub use inspection::InspectionDate;
pub use quality::{IssueKind, QualityIssue, QualityReport};
pub use record::{CleanRecord, RawRecord};
pub use size::FacilitySize;
