/// Artifact persistence and the process-wide lookup stores
///
/// The compressed index is produced offline, persisted as JSON, and loaded
/// read-only at most once per process. Load failures degrade to an empty
/// index (fail-open): greffe resolution is an enrichment of the legal-text
/// output, not a required field, so a missing artifact must never take the
/// surrounding product down.
pub mod artifact;
pub mod cache;

pub use artifact::{
    read_compressed_index, read_flat_index, read_postal_code_map, write_compressed_index,
};
pub use cache::{
    find_greffe_by_code_insee, find_greffe_by_code_postal, FlatStore, GreffeStore,
};
