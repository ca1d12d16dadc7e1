use std::path::PathBuf;

pub const CATALOG_DIR: &str = ".catalog";

/// Returns the root catalog directory path.
///
/// Resolution order:
/// 1. `CATALOG_ROOT` environment variable (if set)
/// 2. Current working directory + `.catalog`
pub fn catalog_root() -> PathBuf {
    if let Ok(root) = std::env::var("CATALOG_ROOT") {
        PathBuf::from(root)
    } else {
        PathBuf::from(CATALOG_DIR)
    }
}
