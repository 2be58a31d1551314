//! Helpers shared by the CLI entry points

use crate::config::search_config_file;
use std::path::{Path, PathBuf};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_LINTER_ERROR: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Directory Ruff would read configuration from for `target`
pub(crate) fn config_search_dir(target: &Path) -> PathBuf {
    if target.is_file() {
        target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        target.to_path_buf()
    }
}

/// Resolve the configuration file to read: the explicit one, or the first found
pub(crate) fn resolve_config_path(explicit: Option<&Path>, target: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => search_config_file(&config_search_dir(target)),
    }
}
