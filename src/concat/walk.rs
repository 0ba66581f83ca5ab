//! Traversal of the directories being concatenated
//!
//! A walk yields every file below a root, depth first. Symlinks to
//! directories are listed but not descended into; any other symlink
//! (including a dangling one) counts as a file, so it gets a block whose
//! content may be an error marker.
//!
//! Unreadable subdirectories, roots that do not exist and roots that are not
//! directories are reported as [`WalkItem::Skipped`] and otherwise ignored.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, config};
use crate::path_utils;

/// Glob filter applied to paths relative to the walked root
///
/// An empty filter accepts every file.
#[derive(Debug, Default)]
pub struct IncludeFilter {
    globs: Vec<Glob<'static>>,
}

impl IncludeFilter {
    /// Compile include patterns
    pub fn new(patterns: &[String]) -> Result<Self> {
        let globs = patterns
            .iter()
            .map(|pattern| {
                Glob::new(pattern)
                    .map(Glob::into_owned)
                    .map_err(|e| config::invalid_glob(pattern, e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { globs })
    }

    /// Whether no patterns are configured
    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    /// Check a path relative to the walked root
    pub fn matches(&self, relative: &Path) -> bool {
        if self.globs.is_empty() {
            return true;
        }

        let normalized = path_utils::to_forward_slashes(relative);
        let candidate = CandidatePath::from(normalized.as_str());
        self.globs
            .iter()
            .any(|glob| glob.matched(&candidate).is_some())
    }
}

/// One step of a walk
#[derive(Debug, PartialEq, Eq)]
pub enum WalkItem {
    /// A file to concatenate
    File(PathBuf),
    /// A root or subdirectory that could not be read
    Skipped { path: PathBuf, reason: String },
}

fn is_concatenable(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

/// Walk `root`, yielding files that pass `filter`
///
/// With `sort`, siblings are visited in file name order, which makes the
/// whole walk lexicographic and stable across platforms. Otherwise the order
/// is whatever the filesystem returns.
pub fn walk_files<'a>(
    root: &'a Path,
    sort: bool,
    filter: &'a IncludeFilter,
) -> impl Iterator<Item = WalkItem> + 'a {
    let mut walker = WalkDir::new(root).follow_links(false);
    if sort {
        walker = walker.sort_by_file_name();
    }

    walker.into_iter().filter_map(move |entry| match entry {
        Ok(entry) => {
            // A root given as a symlink to a directory is still walked
            if entry.depth() == 0 && !entry.path().is_dir() {
                return Some(WalkItem::Skipped {
                    path: entry.into_path(),
                    reason: "not a directory".to_string(),
                });
            }
            if !is_concatenable(&entry) {
                return None;
            }
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            filter
                .matches(relative)
                .then(|| WalkItem::File(entry.into_path()))
        }
        Err(e) => {
            let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
            let reason = e
                .io_error()
                .map_or_else(|| e.to_string(), ToString::to_string);
            Some(WalkItem::Skipped { path, reason })
        }
    })
}
