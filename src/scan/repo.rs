//! Repository root resolution
//!
//! Best effort: the nearest ancestor holding a version-control marker is
//! taken as the repository root. This is a heuristic, not a guarantee.

use std::path::{Path, PathBuf};

/// Finds the repository root for `file`.
///
/// Walks upward from the file's directory until a directory containing
/// `marker` is found. Falls back to the immediate parent directory when no
/// ancestor has the marker.
pub fn resolve_repo_root(file: &Path, marker: &str) -> PathBuf {
    let parent = file.parent().unwrap_or(file);

    parent
        .ancestors()
        .find(|dir| !dir.as_os_str().is_empty() && dir.join(marker).exists())
        .unwrap_or(parent)
        .to_path_buf()
}

/// Returns the final component of a repository root as its name
pub fn repo_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
