/// Data model for the greffe index
///
/// The serialized shapes here are wire formats shared with the offline
/// compression tool and any other consumer of the persisted artifacts;
/// field names and nesting must stay exactly as declared.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flat mapping from 5-character postal code to greffe name.
///
/// Keys are numeric strings kept zero-padded ("09999", not "9999"); all
/// comparisons elsewhere are lexicographic on these strings.
pub type PostalCodeMap = HashMap<String, String>;

/// A contiguous run of postal codes that all resolve to the same greffe.
///
/// `start <= end` (lexicographically), and within the artifact the runs are
/// sorted ascending by `start` and never overlap. Binary search depends on
/// that ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreffeRange {
    pub start: String,
    pub end: String,
    pub greffe: String,
}

impl GreffeRange {
    /// Returns whether `code` falls within this range (string comparison)
    pub fn contains(&self, code: &str) -> bool {
        self.start.as_str() <= code && code <= self.end.as_str()
    }
}

/// Compression statistics carried alongside the artifact.
///
/// Purely informational; the lookup path never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexMetadata {
    /// Number of entries in the source map
    pub original_size: usize,

    /// Number of ranges plus number of singles
    pub compressed_size: usize,

    /// Space savings as a percentage (0-100), rounded to 2 decimals.
    /// Negative when compression expands the data; reported as-is.
    pub compression_ratio: f64,
}

/// The compressed artifact: sorted ranges plus residual singletons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressedGreffeIndex {
    /// Ordered sequence of ranges (sorted ascending by `start`)
    pub ranges: Vec<GreffeRange>,

    /// Codes that do not belong to any range
    pub singles: HashMap<String, String>,

    /// Compression statistics
    pub metadata: IndexMetadata,
}

impl CompressedGreffeIndex {
    /// An index with no entries; every lookup against it misses.
    ///
    /// Used as the fail-open fallback when the persisted artifact
    /// cannot be loaded.
    pub fn empty() -> Self {
        Self {
            ranges: Vec::new(),
            singles: HashMap::new(),
            metadata: IndexMetadata {
                original_size: 0,
                compressed_size: 0,
                compression_ratio: 0.0,
            },
        }
    }

    /// Number of stored entries (ranges + singles)
    pub fn entry_count(&self) -> usize {
        self.ranges.len() + self.singles.len()
    }

    /// Number of postal codes covered by ranges and singles together.
    ///
    /// Ranges are enumerated numerically; a range whose bounds do not parse
    /// as integers contributes nothing (such a range cannot be produced by
    /// the compressor).
    pub fn covered_count(&self) -> usize {
        let spanned: usize = self
            .ranges
            .iter()
            .filter_map(|r| {
                let start: u32 = r.start.parse().ok()?;
                let end: u32 = r.end.parse().ok()?;
                (start <= end).then(|| (end - start + 1) as usize)
            })
            .sum();
        spanned + self.singles.len()
    }
}

/// The uncompressed runtime artifact: direct postal-code and INSEE-code maps.
///
/// This is the shape the data-ingestion step produces and the compression
/// tool consumes. INSEE codes are never range-compressed (they include
/// non-numeric Corsican codes such as "2A004"), so INSEE lookups always go
/// through this flat form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatGreffeIndex {
    #[serde(rename = "byCodePostal", default)]
    pub by_code_postal: PostalCodeMap,

    #[serde(rename = "byCodeInsee", default)]
    pub by_code_insee: HashMap<String, String>,
}
