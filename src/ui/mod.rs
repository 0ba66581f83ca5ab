//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while directories are walked and files concatenated
//! - Interactive spinner using indicatif
//! - Per-file lines on stderr for `--verbose`
//! - Silent progress for `--quiet`
//!
//! All progress reporting goes through the ProgressReporter trait. Nothing
//! reported here ends up in the output file, and files that could not be read
//! are only counted: their error text lives in the output.

use std::path::Path;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter trait for a concatenation run
pub trait ProgressReporter {
    /// A directory from the list is about to be walked
    fn start_directory(&mut self, directory: &Path, current: usize, total: usize);

    /// A file block was written. `readable` is false when an inline error
    /// marker replaced the content.
    fn file_written(&mut self, file_path: &Path, readable: bool);

    /// An entry (or a whole directory) was skipped during traversal
    fn entry_skipped(&mut self, path: &Path, reason: &str);

    /// The run completed
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter with a spinner
///
/// The number of files is not known before the walk, so a spinner with a
/// running count is shown instead of a bar. It only advances when a
/// directory starts or a file is written, so no ticker thread runs. indicatif
/// hides it when stderr is not a terminal.
pub struct InteractiveProgressReporter {
    pb: ProgressBar,
}

impl InteractiveProgressReporter {
    /// Create a new interactive progress reporter
    pub fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {pos} files {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);

        Self { pb }
    }
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorten long paths for display, keeping the tail
fn truncate_for_display(path: &str, max: usize) -> String {
    let count = path.chars().count();
    if count <= max {
        return path.to_string();
    }
    let tail: String = path.chars().skip(count - (max - 3)).collect();
    format!("...{tail}")
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start_directory(&mut self, directory: &Path, current: usize, total: usize) {
        let shown = truncate_for_display(&directory.display().to_string(), 40);
        self.pb.set_prefix(format!("({current}/{total}) {shown}"));
        self.pb.tick();
    }

    fn file_written(&mut self, file_path: &Path, _readable: bool) {
        self.pb
            .set_message(truncate_for_display(&file_path.display().to_string(), 50));
        self.pb.inc(1);
        self.pb.tick();
    }

    fn entry_skipped(&mut self, _path: &Path, _reason: &str) {}

    fn finish(&mut self) {
        self.pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.pb.abandon();
    }
}

/// Verbose reporter printing one line per event to stderr
#[derive(Default)]
pub struct VerboseProgressReporter {
    written: usize,
    unreadable: usize,
    skipped: usize,
}

impl ProgressReporter for VerboseProgressReporter {
    fn start_directory(&mut self, directory: &Path, current: usize, total: usize) {
        eprintln!(
            "{} {}",
            Style::new()
                .for_stderr()
                .bold()
                .green()
                .apply_to(format!("[{current}/{total}]")),
            directory.display()
        );
    }

    fn file_written(&mut self, file_path: &Path, readable: bool) {
        self.written += 1;
        if readable {
            eprintln!("  {}", file_path.display());
        } else {
            self.unreadable += 1;
            eprintln!(
                "  {} {}",
                file_path.display(),
                Style::new()
                    .for_stderr()
                    .yellow()
                    .apply_to("(unreadable, marker written)")
            );
        }
    }

    fn entry_skipped(&mut self, path: &Path, reason: &str) {
        self.skipped += 1;
        eprintln!(
            "  {} {}: {}",
            Style::new().for_stderr().dim().apply_to("skipped"),
            path.display(),
            reason
        );
    }

    fn finish(&mut self) {
        eprintln!(
            "{} {} files, {} unreadable, {} skipped",
            Style::new().for_stderr().bold().apply_to("Done:"),
            self.written,
            self.unreadable,
            self.skipped
        );
    }

    fn abandon(&mut self) {
        eprintln!(
            "{} after {} files",
            Style::new().for_stderr().bold().red().apply_to("Aborted"),
            self.written
        );
    }
}

/// Silent progress reporter for quiet mode
///
/// No-op implementation that does not display anything.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start_directory(&mut self, _directory: &Path, _current: usize, _total: usize) {}

    fn file_written(&mut self, _file_path: &Path, _readable: bool) {}

    fn entry_skipped(&mut self, _path: &Path, _reason: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}
