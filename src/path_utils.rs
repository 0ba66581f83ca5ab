//! Cross-platform path utilities for dircat
//!
//! This module provides utilities for handling paths across different platforms
//! (Windows, macOS, Linux) with consistent behavior.

use std::path::{Path, PathBuf};

use crate::error::{Result, fs::io_error};

/// Convert a path to a string with forward slashes
///
/// Glob patterns are always written with `/`, so candidate paths are
/// normalized before matching.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Resolve `path` to an absolute path, relative paths being taken from `base`.
///
/// Existing paths are canonicalized with `dunce`, which resolves symlinks and
/// `..` components without producing `\\?\` verbatim paths on Windows.
/// Paths that do not exist are returned joined but otherwise untouched; the
/// traversal of such a root simply yields nothing.
pub fn resolve_against(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    dunce::canonicalize(&joined).unwrap_or(joined)
}

/// Resolve `path` against the current working directory
pub fn resolve_from_cwd(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(resolve_against(path, Path::new("")));
    }

    let cwd = std::env::current_dir()
        .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?;
    Ok(resolve_against(path, &cwd))
}
