/// Process-wide lazy caches over the persisted artifacts
///
/// Each store owns one decoded artifact for the lifetime of the process:
/// constructed on first query, immutable afterwards, never invalidated (a
/// refreshed artifact requires a restart, or an explicit `reset()` which
/// exists for tests). First construction is guarded with a double-checked
/// `RwLock` so concurrent first queries in a threaded host cannot tear the
/// load; steady-state queries only ever take the read lock.
///
/// Load failures are swallowed here by design: the store logs one warning,
/// caches an empty index, and every later lookup returns `None`.
use crate::common::constants::{
    ASSETS_DIR_ENV, COMPRESSED_INDEX_FILE, DEFAULT_ASSETS_DIR, FLAT_INDEX_FILE,
    POSTAL_CODE_LENGTH,
};
use crate::index::lookup::find_greffe;
use crate::index::types::{CompressedGreffeIndex, FlatGreffeIndex};
use crate::store::artifact::{read_compressed_index, read_flat_index};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, RwLock};
use tracing::warn;

/// Lazy-loading store over the compressed postal-code index.
pub struct GreffeStore {
    path: PathBuf,
    cache: RwLock<Option<Arc<CompressedGreffeIndex>>>,
}

impl GreffeStore {
    /// Creates a store reading the compressed artifact at `path`.
    ///
    /// Nothing is loaded until the first lookup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Resolves the greffe for a postal code.
    ///
    /// Codes whose length is not exactly 5 return `None` without touching
    /// the index. A load failure on first access also answers `None`, for
    /// this and every subsequent query.
    pub fn lookup(&self, code_postal: &str) -> Option<String> {
        if code_postal.len() != POSTAL_CODE_LENGTH {
            return None;
        }
        let index = self.index();
        find_greffe(code_postal, &index).map(str::to_string)
    }

    /// Drops the cached index so the next lookup reloads from disk.
    pub fn reset(&self) {
        *self.cache.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    fn index(&self) -> Arc<CompressedGreffeIndex> {
        if let Some(index) = self
            .cache
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            return Arc::clone(index);
        }

        let mut guard = self.cache.write().unwrap_or_else(|e| e.into_inner());
        if let Some(index) = guard.as_ref() {
            // Another thread won the race; both loads are idempotent.
            return Arc::clone(index);
        }

        let index = Arc::new(load_or_empty(&self.path));
        *guard = Some(Arc::clone(&index));
        index
    }
}

fn load_or_empty(path: &Path) -> CompressedGreffeIndex {
    match read_compressed_index(path) {
        Ok(index) => index,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "failed to load greffe index artifact, falling back to empty index"
            );
            CompressedGreffeIndex::empty()
        }
    }
}

/// Lazy-loading store over the flat (uncompressed) artifact.
///
/// Kept for INSEE-code resolution, which the compressed artifact does not
/// carry: INSEE codes include non-numeric values ("2A004") that never form
/// numeric runs.
pub struct FlatStore {
    path: PathBuf,
    cache: RwLock<Option<Arc<FlatGreffeIndex>>>,
}

impl FlatStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Resolves the greffe for a postal code via the direct map, O(1).
    pub fn lookup_by_code_postal(&self, code_postal: &str) -> Option<String> {
        if code_postal.len() != POSTAL_CODE_LENGTH {
            return None;
        }
        self.index().by_code_postal.get(code_postal).cloned()
    }

    /// Resolves the greffe for a commune INSEE code.
    pub fn lookup_by_code_insee(&self, code_insee: &str) -> Option<String> {
        if code_insee.len() != POSTAL_CODE_LENGTH {
            return None;
        }
        self.index().by_code_insee.get(code_insee).cloned()
    }

    /// Drops the cached index so the next lookup reloads from disk.
    pub fn reset(&self) {
        *self.cache.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    fn index(&self) -> Arc<FlatGreffeIndex> {
        if let Some(index) = self
            .cache
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            return Arc::clone(index);
        }

        let mut guard = self.cache.write().unwrap_or_else(|e| e.into_inner());
        if let Some(index) = guard.as_ref() {
            return Arc::clone(index);
        }

        let index = match read_flat_index(&self.path) {
            Ok(index) => Arc::new(index),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to load flat greffe artifact, falling back to empty index"
                );
                Arc::new(FlatGreffeIndex::default())
            }
        };
        *guard = Some(Arc::clone(&index));
        index
    }
}

fn assets_dir() -> PathBuf {
    std::env::var_os(ASSETS_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}

fn default_greffe_store() -> &'static GreffeStore {
    static STORE: OnceLock<GreffeStore> = OnceLock::new();
    STORE.get_or_init(|| GreffeStore::new(assets_dir().join(COMPRESSED_INDEX_FILE)))
}

fn default_flat_store() -> &'static FlatStore {
    static STORE: OnceLock<FlatStore> = OnceLock::new();
    STORE.get_or_init(|| FlatStore::new(assets_dir().join(FLAT_INDEX_FILE)))
}

/// Resolves the greffe for a postal code against the process-wide store.
///
/// This is the surface the legal-text formatting layer consumes. It never
/// raises: malformed codes, misses, and artifact load failures all answer
/// `None`.
pub fn find_greffe_by_code_postal(code_postal: &str) -> Option<String> {
    default_greffe_store().lookup(code_postal)
}

/// Resolves the greffe for a commune INSEE code against the process-wide
/// flat store.
pub fn find_greffe_by_code_insee(code_insee: &str) -> Option<String> {
    default_flat_store().lookup_by_code_insee(code_insee)
}
