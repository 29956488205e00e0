/// Greffe index module
///
/// This module implements the compressed postal-code index at the heart of
/// greffe resolution: ~6000 postal codes mapping to ~300 court registries,
/// stored as sorted contiguous ranges plus a residual set of singletons.
///
/// ## Components:
///
/// - **Compressor**: offline transform of the flat map into ranges + singles
/// - **Lookup**: O(log R) binary-search decode over the sorted ranges
/// - **Validator**: lossless round-trip check gating artifact publication
///
/// ## Usage Example:
///
/// ```
/// use greffe_index::index::{compress_greffe_data, find_greffe};
/// use std::collections::HashMap;
///
/// let mut map = HashMap::new();
/// map.insert("75001".to_string(), "PARIS".to_string());
/// map.insert("75002".to_string(), "PARIS".to_string());
///
/// let compressed = compress_greffe_data(&map);
/// assert_eq!(find_greffe("75001", &compressed), Some("PARIS"));
/// assert_eq!(find_greffe("75003", &compressed), None);
/// ```
pub mod compressor;
pub mod lookup;
pub mod types;
pub mod validator;

pub use compressor::compress_greffe_data;
pub use lookup::find_greffe;
pub use types::{
    CompressedGreffeIndex, FlatGreffeIndex, GreffeRange, IndexMetadata, PostalCodeMap,
};
pub use validator::{validate_compression, ValidationReport};
