//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - concat: Concat command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod concat;

pub use completions::CompletionsArgs;
pub use concat::ConcatArgs;

/// dircat - concatenate directories into one annotated text file
#[derive(Parser, Debug)]
#[command(
    name = "dircat",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Concatenate every file under a set of directories into one text file",
    long_about = "dircat walks the given directories in order and writes every file it finds \
                  into a single text file, each preceded by a '=== <path> ===' header and \
                  followed by a separator line. Files that cannot be read are replaced by an \
                  inline error marker instead of stopping the run.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  dircat concat src -o all_files.txt              \x1b[90m# Concatenate one directory\x1b[0m\n   \
                  dircat concat a b -o out.txt --sort             \x1b[90m# Two directories, stable order\x1b[0m\n   \
                  dircat concat --config dircat.yaml              \x1b[90m# Directories and output from YAML\x1b[0m\n   \
                  dircat completions zsh                          \x1b[90m# Shell completions\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Concatenate files from directories into one output file
    Concat(ConcatArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
