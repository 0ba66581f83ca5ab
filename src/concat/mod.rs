//! Directory concatenation
//!
//! This module handles:
//! - Walking each configured directory in order ([`walk`])
//! - Reading each file and writing its block ([`record`])
//! - Owning the output handle for the duration of a run
//!
//! Per-file read failures never fail a run; they become inline markers in
//! the output. Failing to create or write the output does.

pub mod record;
pub mod walk;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::ConcatConfig;
use crate::error::{Result, fs};
use crate::ui::{ProgressReporter, SilentProgressReporter};

pub use record::{FileContent, FileRecord};
pub use walk::{IncludeFilter, WalkItem, walk_files};

/// Counts collected over a run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConcatSummary {
    /// Blocks written, one per discovered file
    pub files: usize,
    /// Blocks whose content is an error marker
    pub unreadable: usize,
    /// Content bytes copied from readable files
    pub bytes: u64,
    /// Roots or subdirectories that could not be walked
    pub skipped: usize,
}

/// Concatenates the files below a list of directories into one text file
#[derive(Debug, Default)]
pub struct Concatenator {
    filter: IncludeFilter,
    sort: bool,
    include_output: bool,
}

impl Concatenator {
    /// Create a concatenator that emits every file in filesystem order
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a concatenator from the `include`, `sort` and `include_output`
    /// settings of a config
    pub fn from_config(config: &ConcatConfig) -> Result<Self> {
        Ok(Self {
            filter: IncludeFilter::new(&config.include)?,
            sort: config.sort,
            include_output: config.include_output,
        })
    }

    /// Visit siblings in file name order
    #[must_use]
    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Emit the output file too when a walk reaches it
    ///
    /// Its content is then whatever part of the run had been flushed when it
    /// was read.
    #[must_use]
    pub fn including_output(mut self, include_output: bool) -> Self {
        self.include_output = include_output;
        self
    }

    /// Only emit files matching `filter`
    #[must_use]
    pub fn with_filter(mut self, filter: IncludeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Concatenate `directories` into `output`, truncating it first
    ///
    /// The output is created before anything is walked, so a missing parent
    /// directory fails the run with nothing written. An empty directory list
    /// leaves a zero-byte file.
    pub fn run(
        &self,
        directories: &[PathBuf],
        output: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<ConcatSummary> {
        let file = File::create(output).map_err(|e| fs::output_create_failed(output, e))?;
        let mut writer = BufWriter::new(file);

        let exclude = if self.include_output {
            None
        } else {
            dunce::canonicalize(output).ok()
        };

        let result = self
            .write_blocks(directories, &mut writer, exclude.as_deref(), reporter)
            .and_then(|summary| writer.flush().map(|()| summary));

        match result {
            Ok(summary) => {
                reporter.finish();
                Ok(summary)
            }
            Err(e) => {
                reporter.abandon();
                Err(fs::write_failed(output, e))
            }
        }
    }

    /// Write one block per discovered file to `out`
    ///
    /// `exclude` names a file that is passed over if met during the walk.
    pub fn write_blocks<W: Write>(
        &self,
        directories: &[PathBuf],
        out: &mut W,
        exclude: Option<&Path>,
        reporter: &mut dyn ProgressReporter,
    ) -> io::Result<ConcatSummary> {
        let mut summary = ConcatSummary::default();

        for (index, directory) in directories.iter().enumerate() {
            reporter.start_directory(directory, index + 1, directories.len());

            for item in walk_files(directory, self.sort, &self.filter) {
                let path = match item {
                    WalkItem::File(path) => path,
                    WalkItem::Skipped { path, reason } => {
                        summary.skipped += 1;
                        reporter.entry_skipped(&path, &reason);
                        continue;
                    }
                };

                if is_excluded(&path, exclude) {
                    continue;
                }

                let record = FileRecord::read(&path);
                record.write_to(out)?;

                summary.files += 1;
                summary.bytes += record.content_len();
                if !record.is_readable() {
                    summary.unreadable += 1;
                }
                reporter.file_written(&path, record.is_readable());
            }
        }

        Ok(summary)
    }
}

fn is_excluded(path: &Path, exclude: Option<&Path>) -> bool {
    let Some(exclude) = exclude else {
        return false;
    };
    if path.file_name() != exclude.file_name() {
        return false;
    }
    dunce::canonicalize(path).is_ok_and(|resolved| resolved == exclude)
}

/// Concatenate every file below `directories` into `output`
///
/// Files are emitted in filesystem order, without filtering and without
/// progress output.
pub fn concat_directories(directories: &[PathBuf], output: &Path) -> Result<ConcatSummary> {
    Concatenator::new().run(directories, output, &mut SilentProgressReporter)
}
