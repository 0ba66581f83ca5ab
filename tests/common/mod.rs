//! Common test utilities for dircat integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary source tree for integration tests
pub struct TestTree {
    /// Temporary directory, removed on drop
    _temp: TempDir,
    /// Canonical path of the tree root, as it appears in output headers
    pub path: PathBuf,
}

impl TestTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");
        Self { _temp: temp, path }
    }

    /// Write a text file, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        self.write_bytes(path, content.as_bytes())
    }

    /// Write raw bytes, creating parent directories
    pub fn write_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from the tree
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the tree
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// The block dircat writes for a readable file
#[allow(dead_code)]
pub fn block(path: &Path, content: &str) -> String {
    format!(
        "=== {} ===\n\n{}\n\n{}\n\n",
        path.display(),
        content,
        "=".repeat(80)
    )
}

/// Number of `=== <path> ===` header lines in an output
#[allow(dead_code)]
pub fn header_count(output: &str) -> usize {
    output
        .lines()
        .filter(|line| line.starts_with("=== ") && line.ends_with(" ==="))
        .count()
}
