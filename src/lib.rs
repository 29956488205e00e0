//! greffe-index - Compressed court-registry lookup for the French company registry
//!
//! Resolves the competent greffe (commercial-court registry) for a French
//! postal code. The full mapping (~6000 codes, ~300 greffes) is compressed
//! offline into sorted contiguous ranges plus singleton exceptions, validated
//! to be lossless, persisted as JSON, and answered at runtime through an
//! O(log R) binary-search decode over a process-wide lazy cache.
//!
pub mod common;
pub mod index;
pub mod siren;
pub mod store;

// Re-export common types for convenience
pub use common::{GreffeError, GreffeResult, Result};

// Re-export the index core for convenience
pub use index::{
    compress_greffe_data, find_greffe, validate_compression, CompressedGreffeIndex,
    FlatGreffeIndex, GreffeRange, IndexMetadata, PostalCodeMap, ValidationReport,
};

// Re-export the runtime lookup surface for convenience
pub use store::{
    find_greffe_by_code_insee, find_greffe_by_code_postal, FlatStore, GreffeStore,
};

// Re-export identifier handling for convenience
pub use siren::{format_siren, validate_and_extract_siren};
