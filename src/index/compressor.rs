/// Range compression for the postal-code -> greffe mapping
///
/// The raw mapping holds ~6000 postal codes resolving to ~300 distinct
/// greffes, and French postal codes are assigned in long numeric runs per
/// jurisdiction, so the data compresses extremely well into
/// (start, end, greffe) triples.
///
/// Algorithm:
/// 1. Sort all codes lexicographically (codes stay zero-padded strings,
///    so lexicographic order and numeric order agree)
/// 2. Greedily extend a run while the next sorted code maps to the same
///    greffe and is numerically adjacent (int(next) == int(current) + 1)
/// 3. Runs of length >= 2 become ranges; length-1 runs go to `singles`,
///    where a range triple would cost more than the entry it replaces
/// 4. Record entry-count statistics in the metadata
use crate::index::types::{CompressedGreffeIndex, GreffeRange, IndexMetadata, PostalCodeMap};
use std::collections::HashMap;

/// Compresses a flat postal-code map into ranges plus singles.
///
/// Pure function of its input: the same map always yields structurally
/// identical output (ranges in sorted order, identical singles).
pub fn compress_greffe_data(map: &PostalCodeMap) -> CompressedGreffeIndex {
    let mut codes: Vec<&str> = map.keys().map(String::as_str).collect();
    codes.sort_unstable();

    let mut ranges = Vec::new();
    let mut singles = HashMap::new();

    let mut i = 0;
    while i < codes.len() {
        let start = codes[i];
        let greffe = &map[start];

        // Extend the run while the greffe matches and the codes stay
        // numerically adjacent. Adjacency survives zero-padding boundaries
        // ("09999" -> "10000") because it is decided on integer values.
        let mut j = i;
        while j + 1 < codes.len()
            && map[codes[j + 1]] == *greffe
            && numerically_adjacent(codes[j], codes[j + 1])
        {
            j += 1;
        }

        if j > i {
            ranges.push(GreffeRange {
                start: start.to_string(),
                end: codes[j].to_string(),
                greffe: greffe.clone(),
            });
        } else {
            singles.insert(start.to_string(), greffe.clone());
        }

        i = j + 1;
    }

    let original_size = map.len();
    let compressed_size = ranges.len() + singles.len();
    let compression_ratio = if original_size > 0 {
        let ratio = (1.0 - compressed_size as f64 / original_size as f64) * 100.0;
        (ratio * 100.0).round() / 100.0
    } else {
        0.0
    };

    CompressedGreffeIndex {
        ranges,
        singles,
        metadata: IndexMetadata {
            original_size,
            compressed_size,
            compression_ratio,
        },
    }
}

/// Returns whether `next` is the integer successor of `current`.
///
/// Non-numeric codes never chain into a run.
fn numerically_adjacent(current: &str, next: &str) -> bool {
    match (current.parse::<u32>(), next.parse::<u32>()) {
        (Ok(a), Ok(b)) => b == a + 1,
        _ => false,
    }
}
