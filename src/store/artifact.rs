/// Reading and writing the persisted index artifacts
///
/// Two JSON shapes exist on disk:
/// - the flat artifact (`byCodePostal` / `byCodeInsee` maps) produced by the
///   external data-refresh step and consumed by the compression tool;
/// - the compressed artifact (`ranges` / `singles` / `metadata`) produced by
///   the compression tool and consumed by the runtime lookup path.
///
/// Field names are wire format and must not drift; see the serde renames on
/// the types themselves.
use crate::common::error::Result;
use crate::index::types::{CompressedGreffeIndex, FlatGreffeIndex, PostalCodeMap};
use std::fs;
use std::path::Path;

/// Reads a compressed index artifact from `path`.
pub fn read_compressed_index(path: &Path) -> Result<CompressedGreffeIndex> {
    let content = fs::read_to_string(path)?;
    let index = serde_json::from_str(&content)?;
    Ok(index)
}

/// Writes a compressed index artifact to `path`, pretty-printed.
pub fn write_compressed_index(path: &Path, index: &CompressedGreffeIndex) -> Result<()> {
    let json = serde_json::to_string_pretty(index)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads a flat index artifact from `path`.
pub fn read_flat_index(path: &Path) -> Result<FlatGreffeIndex> {
    let content = fs::read_to_string(path)?;
    let index = serde_json::from_str(&content)?;
    Ok(index)
}

/// Reads the postal-code map out of a flat artifact.
///
/// Accepts both the wrapped shape (`{"byCodePostal": {...}}`) and a bare
/// `code -> greffe` object, which is what older data drops looked like.
pub fn read_postal_code_map(path: &Path) -> Result<PostalCodeMap> {
    let content = fs::read_to_string(path)?;

    if let Ok(bare) = serde_json::from_str::<PostalCodeMap>(&content) {
        return Ok(bare);
    }

    let flat: FlatGreffeIndex = serde_json::from_str(&content)?;
    Ok(flat.by_code_postal)
}
