//! End-to-end pipeline tests: compress, persist, reload, query
//!
//! Exercises the same flow the offline tool and the runtime share:
//! flat artifact in, compressed artifact out, lazy store answering
//! point queries against the reloaded artifact.

use greffe_index::index::{compress_greffe_data, validate_compression, PostalCodeMap};
use greffe_index::store::{
    read_compressed_index, read_postal_code_map, write_compressed_index, FlatStore, GreffeStore,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn sample_map() -> PostalCodeMap {
    [
        ("75001", "PARIS"),
        ("75002", "PARIS"),
        ("75003", "PARIS"),
        ("13001", "MARSEILLE"),
        ("69001", "LYON"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn test_full_pipeline_flat_to_store() {
    let dir = tempdir().unwrap();
    let flat_path = dir.path().join("greffes-index.json");
    let compressed_path = dir.path().join("greffes-index-compressed.json");

    // Data-refresh step: flat artifact lands on disk.
    fs::write(
        &flat_path,
        serde_json::to_string(&serde_json::json!({
            "byCodePostal": {
                "75001": "PARIS",
                "75002": "PARIS",
                "75003": "PARIS",
                "13001": "MARSEILLE",
                "69001": "LYON"
            },
            "byCodeInsee": {}
        }))
        .unwrap(),
    )
    .unwrap();

    // Offline step: read, compress, validate, persist.
    let map = read_postal_code_map(&flat_path).unwrap();
    let compressed = compress_greffe_data(&map);
    let report = validate_compression(&map, &compressed);
    assert!(report.valid, "errors: {:?}", report.errors);
    write_compressed_index(&compressed_path, &compressed).unwrap();

    // Runtime step: lazy store over the persisted artifact.
    let store = GreffeStore::new(&compressed_path);
    assert_eq!(store.lookup("75002").as_deref(), Some("PARIS"));
    assert_eq!(store.lookup("13001").as_deref(), Some("MARSEILLE"));
    assert_eq!(store.lookup("69001").as_deref(), Some("LYON"));

    // Numerically adjacent to the Paris range but never in the source.
    assert_eq!(store.lookup("75004"), None);
}

#[test]
fn test_compressed_artifact_shape_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("compressed.json");

    write_compressed_index(&path, &compress_greffe_data(&sample_map())).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    let ranges = value["ranges"].as_array().unwrap();
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0]["start"], "75001");
    assert_eq!(ranges[0]["end"], "75003");
    assert_eq!(ranges[0]["greffe"], "PARIS");

    let singles = value["singles"].as_object().unwrap();
    assert_eq!(singles.len(), 2);
    assert_eq!(singles["13001"], "MARSEILLE");
    assert_eq!(singles["69001"], "LYON");

    assert_eq!(value["metadata"]["originalSize"], 5);
    assert_eq!(value["metadata"]["compressedSize"], 3);
    assert_eq!(value["metadata"]["compressionRatio"], 40.0);
}

#[test]
fn test_persisted_artifact_reloads_identically() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("compressed.json");

    let compressed = compress_greffe_data(&sample_map());
    write_compressed_index(&path, &compressed).unwrap();
    let reloaded = read_compressed_index(&path).unwrap();

    assert_eq!(reloaded, compressed);
}

#[test]
fn test_store_survives_missing_and_corrupt_artifacts() {
    let dir = tempdir().unwrap();

    let missing = GreffeStore::new(dir.path().join("nope.json"));
    assert_eq!(missing.lookup("75001"), None);

    let corrupt_path = dir.path().join("corrupt.json");
    fs::write(&corrupt_path, "]{ definitely not json").unwrap();
    let corrupt = GreffeStore::new(&corrupt_path);
    assert_eq!(corrupt.lookup("75001"), None);
    assert_eq!(corrupt.lookup("13001"), None);
}

#[test]
fn test_store_is_shareable_across_threads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("compressed.json");
    write_compressed_index(&path, &compress_greffe_data(&sample_map())).unwrap();

    let store = std::sync::Arc::new(GreffeStore::new(&path));

    // Concurrent first queries race the lazy load; all must agree.
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = std::sync::Arc::clone(&store);
            std::thread::spawn(move || {
                assert_eq!(store.lookup("75001").as_deref(), Some("PARIS"));
                assert_eq!(store.lookup("99999"), None);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_flat_store_insee_lookup() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("greffes-index.json");
    fs::write(
        &path,
        r#"{"byCodePostal":{"20000":"AJACCIO"},"byCodeInsee":{"2A004":"AJACCIO","75101":"PARIS"}}"#,
    )
    .unwrap();

    let store = FlatStore::new(&path);
    assert_eq!(store.lookup_by_code_insee("2A004").as_deref(), Some("AJACCIO"));
    assert_eq!(store.lookup_by_code_insee("75101").as_deref(), Some("PARIS"));
    assert_eq!(store.lookup_by_code_postal("20000").as_deref(), Some("AJACCIO"));
    assert_eq!(store.lookup_by_code_insee("2B033"), None);
}
