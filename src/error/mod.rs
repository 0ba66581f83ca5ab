//! Error types and handling for dircat
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only run-level failures are represented here. A file that cannot be read
//! while concatenating is not an error of the run: it is written into the
//! output as an inline marker and the walk continues.
//!
//! Constructor helpers are grouped by domain:
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dircat operations
#[derive(Error, Diagnostic, Debug)]
pub enum DircatError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(dircat::config::not_found),
        help("Pass an existing YAML file to --config")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(dircat::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(dircat::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(dircat::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Invalid include pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(dircat::config::invalid_glob),
        help("Include patterns use glob syntax, e.g. '**/*.java' or 'src/*.{{rs,toml}}'")
    )]
    InvalidGlob { pattern: String, reason: String },

    // CLI errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(dircat::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("Failed to create output file '{path}': {reason}")]
    #[diagnostic(
        code(dircat::fs::output_create_failed),
        help("Check that the parent directory exists and is writable")
    )]
    OutputCreateFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(dircat::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(dircat::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DircatError {
    fn from(err: std::io::Error) -> Self {
        DircatError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DircatError {
    fn from(err: serde_yaml::Error) -> Self {
        DircatError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DircatError>;

#[cfg(test)]
mod tests;
