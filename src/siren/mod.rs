/// SIREN / SIRET identifier handling
///
/// The registry is queried by SIREN (9 digits); user input arrives as either
/// a SIREN or a full SIRET (14 digits, SIREN + establishment NIC) and is
/// routinely pasted with spaces, dots, or hyphens. Normalization here is
/// purely structural; checksum verification belongs to the registry itself.
use crate::common::constants::{SIREN_LENGTH, SIRET_LENGTH};

/// Non-breaking space used in formatted identifiers
const NBSP: char = '\u{00A0}';

/// Validates user input and extracts the SIREN from it.
///
/// Strips separators (spaces, hyphens, dots), then accepts a 9-digit SIREN
/// as-is or the leading 9 digits of a 14-digit SIRET. Anything else is
/// rejected with `None`.
pub fn validate_and_extract_siren(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }

    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.'))
        .collect();

    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    match cleaned.len() {
        SIREN_LENGTH => Some(cleaned),
        SIRET_LENGTH => Some(cleaned[..SIREN_LENGTH].to_string()),
        _ => None,
    }
}

/// Formats a SIREN in groups of three joined by non-breaking spaces
/// (123456789 -> 123\u{00A0}456\u{00A0}789).
///
/// Input that does not clean up to exactly 9 digits is returned unchanged.
pub fn format_siren(siren: &str) -> String {
    let cleaned: String = siren
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.'))
        .collect();

    if cleaned.len() != SIREN_LENGTH || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return siren.to_string();
    }

    format!(
        "{}{nbsp}{}{nbsp}{}",
        &cleaned[0..3],
        &cleaned[3..6],
        &cleaned[6..9],
        nbsp = NBSP
    )
}
