/// Decode path for the compressed greffe index
///
/// Point queries resolve in O(log R) where R is the range count:
/// an O(1) probe of the singles table, then a binary search over the
/// sorted ranges. Both sides use the same lexicographic string
/// comparison the compressor sorted with.
use crate::index::types::CompressedGreffeIndex;

/// Looks up the greffe for `code` in a compressed index.
///
/// Returns `None` for the empty string and for any code the index does not
/// cover. Never panics; a miss is a normal result, not an error.
pub fn find_greffe<'a>(code: &str, index: &'a CompressedGreffeIndex) -> Option<&'a str> {
    if code.is_empty() {
        return None;
    }

    // Singles first: exact-match table probe.
    if let Some(greffe) = index.singles.get(code) {
        return Some(greffe);
    }

    // Binary search over ranges sorted ascending by `start`.
    let ranges = &index.ranges;
    let mut low = 0usize;
    let mut high = ranges.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let range = &ranges[mid];

        if code < range.start.as_str() {
            high = mid;
        } else if code > range.end.as_str() {
            low = mid + 1;
        } else {
            return Some(&range.greffe);
        }
    }

    None
}
