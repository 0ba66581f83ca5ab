//! Per-file blocks of the output
//!
//! Every discovered file becomes one block:
//!
//! ```text
//! === /abs/path/of/file ===
//!
//! <content, or: *** Error reading file: <reason> ***>
//!
//! ================================================================================
//!
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Width of the `=` line closing each block
pub const SEPARATOR_WIDTH: usize = 80;

/// Content of a discovered file, or why it could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Unreadable(String),
}

/// A discovered file, read and ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub content: FileContent,
}

impl FileRecord {
    /// Read `path` as UTF-8 text
    ///
    /// Never fails: I/O errors and undecodable bytes are captured as
    /// [`FileContent::Unreadable`] with a description.
    pub fn read(path: &Path) -> Self {
        let content = match std::fs::read(path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => FileContent::Text(text),
                Err(e) => FileContent::Unreadable(format!("invalid UTF-8: {}", e.utf8_error())),
            },
            Err(e) => FileContent::Unreadable(e.to_string()),
        };

        Self {
            path: path.to_path_buf(),
            content,
        }
    }

    /// Whether the content was read successfully
    pub fn is_readable(&self) -> bool {
        matches!(self.content, FileContent::Text(_))
    }

    /// Number of content bytes copied into the output (0 for unreadable files)
    pub fn content_len(&self) -> u64 {
        match &self.content {
            FileContent::Text(text) => text.len() as u64,
            FileContent::Unreadable(_) => 0,
        }
    }

    /// Write the header, content or error marker, and separator
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "=== {} ===\n\n", self.path.display())?;

        match &self.content {
            FileContent::Text(text) => out.write_all(text.as_bytes())?,
            FileContent::Unreadable(reason) => {
                writeln!(out, "*** Error reading file: {reason} ***")?;
            }
        }

        write!(out, "\n\n{}\n\n", "=".repeat(SEPARATOR_WIDTH))
    }
}
