/// Round-trip validation of the compressed artifact
///
/// The compressed index is only allowed to be published if every entry of
/// the source map decodes back byte-identically through the runtime lookup
/// path. The validator also runs the defensive inverse checks (nothing in
/// the artifact encodes a code absent from the source) to catch compressor
/// bugs before they ship.
///
/// Results are structured, never raised: the caller decides whether a
/// less-than-lossless artifact is acceptable (it should not be).
use crate::index::lookup::find_greffe;
use crate::index::types::{CompressedGreffeIndex, PostalCodeMap};

/// Outcome of validating a compressed index against its source map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Converts the report into a `Result`, for callers that treat any
    /// mismatch as fatal (the publishing pipeline does).
    pub fn into_result(self) -> crate::common::Result<()> {
        if self.valid {
            Ok(())
        } else {
            Err(crate::common::GreffeError::Validation(self.errors))
        }
    }
}

/// Validates that `compressed` losslessly encodes `original`.
///
/// Checks, in order:
/// 1. every original entry decodes to its original greffe via the lookup path
/// 2. every single and every code spanned by a range exists in the original
///    with the same greffe
/// 3. partition accounting: covered-code count equals the original key count,
///    and the recorded `compressedSize` matches ranges + singles
pub fn validate_compression(
    original: &PostalCodeMap,
    compressed: &CompressedGreffeIndex,
) -> ValidationReport {
    let mut errors = Vec::new();

    // Forward direction: every source entry must decode back unchanged.
    for (code, expected) in original {
        match find_greffe(code, compressed) {
            Some(actual) if actual == expected => {}
            Some(actual) => errors.push(format!(
                "Mismatch for {}: expected '{}', got '{}'",
                code, expected, actual
            )),
            None => errors.push(format!(
                "Missing entry for {}: expected '{}'",
                code, expected
            )),
        }
    }

    // Defensive inverse direction: the artifact must not invent entries.
    for (code, greffe) in &compressed.singles {
        match original.get(code) {
            Some(expected) if expected == greffe => {}
            Some(expected) => errors.push(format!(
                "Single {} carries '{}' but original has '{}'",
                code, greffe, expected
            )),
            None => errors.push(format!(
                "Single {} ('{}') is not present in the original map",
                code, greffe
            )),
        }
    }

    for range in &compressed.ranges {
        let bounds = match (range.start.parse::<u32>(), range.end.parse::<u32>()) {
            (Ok(start), Ok(end)) if start <= end => Some((start, end)),
            _ => None,
        };

        let Some((start, end)) = bounds else {
            errors.push(format!(
                "Range {}-{} has non-numeric or inverted bounds",
                range.start, range.end
            ));
            continue;
        };

        let width = range.start.len();
        for value in start..=end {
            let code = format!("{:0width$}", value, width = width);
            match original.get(&code) {
                Some(expected) if *expected == range.greffe => {}
                Some(expected) => errors.push(format!(
                    "Range {}-{} covers {} with '{}' but original has '{}'",
                    range.start, range.end, code, range.greffe, expected
                )),
                None => errors.push(format!(
                    "Range {}-{} covers {} which is not in the original map",
                    range.start, range.end, code
                )),
            }
        }
    }

    // Partition accounting.
    let covered = compressed.covered_count();
    if covered != original.len() {
        errors.push(format!(
            "Coverage mismatch: {} codes covered, original has {}",
            covered,
            original.len()
        ));
    }
    if compressed.metadata.compressed_size != compressed.entry_count() {
        errors.push(format!(
            "Metadata mismatch: compressedSize is {} but artifact holds {} entries",
            compressed.metadata.compressed_size,
            compressed.entry_count()
        ));
    }

    ValidationReport::from_errors(errors)
}
