//! Free-text field normalization.
//!
//! Facility names and city values arrive with stray punctuation, doubled
//! whitespace, and a recurring set of abbreviations and misspellings.
//! Scrubbing is a projection: running it on its own output is a no-op.

/// Facility-name abbreviation expansions, evaluated in order.
///
/// Matching is on whole-token boundaries. The first rule whose pattern
/// occurs anywhere in the name wins; all occurrences of that one pattern
/// are replaced and evaluation stops, so an expansion can never feed a
/// later rule. Multi-token patterns sort before their suffix tokens.
const NAME_EXPANSIONS: &[(&str, &str)] = &[
    ("SVC PROC CTR", "SERVICE PROCESSING CENTER"),
    ("PROC CTR", "PROCESSING CENTER"),
    ("DET CTR", "DETENTION CENTER"),
    ("CORR CTR", "CORRECTIONAL CENTER"),
    ("CTR", "CENTER"),
    ("FAC", "FACILITY"),
    ("CORR", "CORRECTIONAL"),
    ("DET", "DETENTION"),
    ("PENIT", "PENITENTIARY"),
];

/// Exact-match corrections for recurring city misspellings, keyed on the
/// scrubbed uppercase value. Unmatched values pass through unchanged.
const CITY_CORRECTIONS: &[(&str, &str)] = &[
    ("FTLAUDERDALE", "FORT LAUDERDALE"),
    ("FT LAUDERDALE", "FORT LAUDERDALE"),
    ("FT WORTH", "FORT WORTH"),
    ("LOSANGELES", "LOS ANGELES"),
    ("SANANTONIO", "SAN ANTONIO"),
    ("ELPASO", "EL PASO"),
    ("PHEONIX", "PHOENIX"),
    ("ALBURQUERQUE", "ALBUQUERQUE"),
];

fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '-' | ',' | '.' | '(' | ')')
}

/// Strip disallowed characters, collapse runs of whitespace, and trim.
///
/// The allowed set is letters, digits, space, hyphen, comma, period, and
/// parentheses. Always produces a string, possibly empty.
pub fn scrub_text(raw: &str) -> String {
    let filtered: String = raw
        .chars()
        .map(|ch| if ch.is_whitespace() { ' ' } else { ch })
        .filter(|ch| is_allowed_char(*ch))
        .collect();
    let mut out = String::with_capacity(filtered.len());
    for part in filtered.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Find `pattern` in `haystack` starting at `from`, requiring that both
/// ends fall on token boundaries (start/end of string or a
/// non-alphanumeric neighbor). Scrubbed text is ASCII, so byte indexing
/// is safe here.
fn find_token(haystack: &str, pattern: &str, from: usize) -> Option<usize> {
    let bytes = haystack.as_bytes();
    let mut start = from;
    while start <= haystack.len().saturating_sub(pattern.len()) {
        let Some(pos) = haystack[start..].find(pattern) else {
            return None;
        };
        let at = start + pos;
        let end = at + pattern.len();
        let before_ok = at == 0 || !bytes[at - 1].is_ascii_alphanumeric();
        let after_ok = end == haystack.len() || !bytes[end].is_ascii_alphanumeric();
        if before_ok && after_ok {
            return Some(at);
        }
        start = at + 1;
    }
    None
}

fn replace_all_tokens(haystack: &str, pattern: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(haystack.len());
    let mut cursor = 0;
    while let Some(at) = find_token(haystack, pattern, cursor) {
        out.push_str(&haystack[cursor..at]);
        out.push_str(replacement);
        cursor = at + pattern.len();
    }
    out.push_str(&haystack[cursor..]);
    out
}

/// Apply the ordered name-expansion rules with first-match-wins semantics.
pub fn expand_name_tokens(name: &str) -> String {
    for (pattern, replacement) in NAME_EXPANSIONS {
        if find_token(name, pattern, 0).is_some() {
            return replace_all_tokens(name, pattern, replacement);
        }
    }
    name.to_string()
}

/// Normalize a facility name: scrub, uppercase, expand known abbreviations.
pub fn normalize_name(raw: &str) -> String {
    expand_name_tokens(&scrub_text(raw).to_uppercase())
}

/// Normalize a city: scrub, uppercase, map known misspellings.
pub fn normalize_city(raw: &str) -> String {
    let scrubbed = scrub_text(raw).to_uppercase();
    CITY_CORRECTIONS
        .iter()
        .find(|(wrong, _)| *wrong == scrubbed)
        .map_or(scrubbed, |(_, canonical)| (*canonical).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrub_removes_noise_characters() {
        assert_eq!(scrub_text("B^AKER COUNTY CTR"), "BAKER COUNTY CTR");
        assert_eq!(scrub_text("  El  Paso\t(Annex) "), "El Paso (Annex)");
        assert_eq!(scrub_text("@#$%"), "");
    }

    #[test]
    fn scrub_keeps_allowed_punctuation() {
        assert_eq!(
            scrub_text("Smith, Jones - Unit 4 (East)"),
            "Smith, Jones - Unit 4 (East)"
        );
    }

    #[test]
    fn first_matching_rule_wins() {
        // "DET CTR" is the first rule that matches; bare CTR and DET are
        // never evaluated, so nothing expands twice.
        assert_eq!(normalize_name("DET CTR ANNEX"), "DETENTION CENTER ANNEX");
        assert_eq!(normalize_name("NORTH DET FAC"), "NORTH DET FACILITY");
    }

    #[test]
    fn expansion_respects_token_boundaries() {
        // CTR inside another word must not expand.
        assert_eq!(normalize_name("SPECTRE HALL"), "SPECTRE HALL");
        assert_eq!(normalize_name("BAKER COUNTY CTR"), "BAKER COUNTY CENTER");
    }

    #[test]
    fn normalize_name_is_idempotent_on_normalized_input() {
        let once = normalize_name("B^AKER   COUNTY CTR");
        assert_eq!(once, "BAKER COUNTY CENTER");
        assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn city_corrections_are_exact_match() {
        assert_eq!(normalize_city("FTLAUDERDALE"), "FORT LAUDERDALE");
        assert_eq!(normalize_city("ftlauderdale"), "FORT LAUDERDALE");
        assert_eq!(normalize_city("LAUDERDALE"), "LAUDERDALE");
        assert_eq!(normalize_city("Tacoma"), "TACOMA");
    }
}
