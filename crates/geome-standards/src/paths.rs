//! Standards directory path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "GEOME_STANDARDS_DIR";

/// Get the standards root directory.
///
/// Resolution order:
/// 1. `GEOME_STANDARDS_DIR` environment variable
/// 2. `standards/` directory relative to workspace root
pub fn standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// The `geome/` subdirectory holding mapping files.
pub fn geome_dir(root: &Path) -> PathBuf {
    root.join("geome")
}

pub fn mapping_path(root: &Path) -> PathBuf {
    geome_dir(root).join("mapping.toml")
}

pub fn country_list_path(root: &Path) -> PathBuf {
    geome_dir(root).join("country_list.csv")
}

pub fn country_aliases_path(root: &Path) -> PathBuf {
    geome_dir(root).join("country_aliases.csv")
}
