//! Resource directory path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the resources directory.
pub const RESOURCES_ENV_VAR: &str = "WHO_RESOURCES_DIR";

/// ICD-10 lists 101 and 103 (WHO documentation, table 8).
pub const CAUSE_CODES_FILE: &str = "ICD10_list_101_103_cause_codes.csv";

/// ICD-10 special list for Portugal, 2004-2005 (WHO documentation, table 10).
pub const PORTUGAL_CAUSE_CODES_FILE: &str = "ICD10_list_UE1_cause_codes.csv";

/// Country codes (WHO documentation, table 11).
pub const COUNTRY_CODES_FILE: &str = "country_codes/country_codes";

/// Get the resources root directory.
///
/// Resolution order:
/// 1. `WHO_RESOURCES_DIR` environment variable
/// 2. `resources/` directory relative to workspace root
pub fn resources_root() -> PathBuf {
    if let Ok(root) = std::env::var(RESOURCES_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../resources")
}

/// Locations of the three reference files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub cause_codes: PathBuf,
    pub portugal_cause_codes: PathBuf,
    pub country_codes: PathBuf,
}

impl ResourcePaths {
    pub fn from_root(root: &Path) -> Self {
        Self {
            cause_codes: root.join(CAUSE_CODES_FILE),
            portugal_cause_codes: root.join(PORTUGAL_CAUSE_CODES_FILE),
            country_codes: root.join(COUNTRY_CODES_FILE),
        }
    }
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self::from_root(&resources_root())
    }
}
