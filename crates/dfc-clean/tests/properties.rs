//! Property tests for the projection and totality guarantees.

use dfc_clean::{classify_size, normalize_count, scrub_text, validate_state};
use dfc_model::FacilitySize;
use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

proptest! {
    // Scrubbing is a projection: a second pass never changes the result.
    #[test]
    fn scrub_text_is_idempotent(raw in ".*") {
        let once = scrub_text(&raw);
        prop_assert_eq!(scrub_text(&once), once);
    }

    // Scrubbed output only ever contains the allowed character set.
    #[test]
    fn scrub_text_output_is_in_allowed_set(raw in ".*") {
        for ch in scrub_text(&raw).chars() {
            prop_assert!(
                ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '-' | ',' | '.' | '(' | ')')
            );
        }
    }

    // Classification is total and monotone in the total population.
    #[test]
    fn classify_size_is_monotone(a in 0.0f64..2_000_000.0, b in 0.0f64..2_000_000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify_size(low) <= classify_size(high));
    }

    // Normalized counts are always non-negative, finite, and at 2 places.
    #[test]
    fn normalize_count_never_fails(raw in ".*") {
        let (value, _) = normalize_count(&raw);
        prop_assert!(value >= 0.0);
        prop_assert!(value.is_finite());
    }

    // Validation normalizes to uppercase alphabetic and never mutates
    // beyond that projection.
    #[test]
    fn validate_state_output_is_alphabetic(raw in ".*") {
        let (code, _) = validate_state(&raw);
        prop_assert!(code.chars().all(|ch| ch.is_ascii_uppercase()));
        let (again, _) = validate_state(&code);
        prop_assert_eq!(again, code);
    }
}

#[test]
fn classification_covers_all_buckets() {
    assert_eq!(classify_size(12.0), FacilitySize::VerySmall);
    assert_eq!(classify_size(120.0), FacilitySize::Small);
    assert_eq!(classify_size(512.0), FacilitySize::Medium);
    assert_eq!(classify_size(4096.0), FacilitySize::Large);
}
