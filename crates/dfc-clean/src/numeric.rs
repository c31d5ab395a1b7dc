//! Population count normalization.
//!
//! Counts arrive as plain decimals, scientific notation ("1.80E-02"),
//! decimal-comma values, or null tokens. Absence of a count means zero
//! detainees at that level, so unparseable input degrades to 0.0 instead
//! of propagating an error; the substitution is reported to the caller.
//!
//! Rounding is to 2 decimal places, half away from zero ("1.80E-02" and
//! "0.018" both normalize to 0.02).

/// Tokens the source uses for missing values.
const NULL_TOKENS: [&str; 2] = ["NA", "N/A"];

/// True for the recognized null tokens: empty, whitespace-only, "NA", "N/A".
pub fn is_null_token(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || NULL_TOKENS
            .iter()
            .any(|token| trimmed.eq_ignore_ascii_case(token))
}

/// Round a count to 2 decimal places, half away from zero.
pub fn round_count(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse a raw count string into a non-negative f64.
///
/// Accepts plain decimal and scientific notation; a decimal-comma value
/// is retried with the comma mapped to a period. Returns None for null
/// tokens, unparseable text, and negative values.
pub fn parse_count(raw: &str) -> Option<f64> {
    if is_null_token(raw) {
        return None;
    }
    let trimmed = raw.trim();
    let parsed = trimmed.parse::<f64>().ok().or_else(|| {
        if trimmed.contains(',') && !trimmed.contains('.') {
            trimmed.replace(',', ".").parse::<f64>().ok()
        } else {
            None
        }
    })?;
    (parsed.is_finite() && parsed >= 0.0).then_some(parsed)
}

/// Normalize a raw count: parse, zero-fill on failure, round to 2 places.
///
/// The flag reports whether the 0.0 fallback was substituted.
pub fn normalize_count(raw: &str) -> (f64, bool) {
    match parse_count(raw) {
        Some(value) => (round_count(value), false),
        None => (0.0, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scientific_and_plain_agree() {
        assert_eq!(normalize_count("1.80E-02"), (0.02, false));
        assert_eq!(normalize_count("0.018"), (0.02, false));
        assert_eq!(normalize_count("1.8e-2"), (0.02, false));
    }

    #[test]
    fn null_tokens_zero_fill() {
        for raw in ["", " ", "NA", "N/A", "na", "n/a"] {
            assert_eq!(normalize_count(raw), (0.0, true), "token {raw:?}");
        }
    }

    #[test]
    fn unparseable_zero_fills() {
        assert_eq!(normalize_count("about 40"), (0.0, true));
        assert_eq!(normalize_count("-5"), (0.0, true));
        assert_eq!(normalize_count("inf"), (0.0, true));
    }

    #[test]
    fn decimal_comma_parses() {
        assert_eq!(normalize_count("12,5"), (12.5, false));
        // A value that already has a period keeps the comma as noise.
        assert_eq!(normalize_count("1,234.5"), (0.0, true));
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_count(0.125), 0.13);
        assert_eq!(round_count(0.375), 0.38);
        assert_eq!(normalize_count("0.375"), (0.38, false));
    }
}
