//! Constants used throughout greffe-index

/// Length of a French postal code (and of a commune INSEE code)
pub const POSTAL_CODE_LENGTH: usize = 5;

/// Length of a SIREN identifier
pub const SIREN_LENGTH: usize = 9;

/// Length of a SIRET identifier (SIREN + 5-digit NIC)
pub const SIRET_LENGTH: usize = 14;

/// Default file name of the flat (uncompressed) greffe index artifact
pub const FLAT_INDEX_FILE: &str = "greffes-index.json";

/// Default file name of the compressed greffe index artifact
pub const COMPRESSED_INDEX_FILE: &str = "greffes-index-compressed.json";

/// Environment variable overriding the directory the artifacts are read from
pub const ASSETS_DIR_ENV: &str = "GREFFE_INDEX_ASSETS";

/// Default directory the artifacts are read from
pub const DEFAULT_ASSETS_DIR: &str = "assets";
