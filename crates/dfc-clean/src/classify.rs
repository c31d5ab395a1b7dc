//! Facility size derivation.

use dfc_model::FacilitySize;

/// Bucket a total population into its size category.
///
/// Total function with half-open boundaries: 999.99 is Medium, 1000.00 is
/// Large. No error conditions.
pub fn classify_size(total_population: f64) -> FacilitySize {
    if total_population >= 1000.0 {
        FacilitySize::Large
    } else if total_population >= 500.0 {
        FacilitySize::Medium
    } else if total_population >= 100.0 {
        FacilitySize::Small
    } else {
        FacilitySize::VerySmall
    }
}
