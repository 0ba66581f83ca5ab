//! Run configuration for dircat
//!
//! A run needs an ordered list of directories and an output path. Both can
//! come from a YAML file (`--config`) and from command line flags; flags win.
//!
//! ```yaml
//! directories:
//!   - src/controller
//!   - src/service
//! output: build/all_files.txt
//! sort: true
//! include:
//!   - "**/*.java"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};
use crate::path_utils;

/// Configuration of a single concatenation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConcatConfig {
    /// Directories to walk, in the order they are processed.
    /// Duplicates are processed again.
    pub directories: Vec<PathBuf>,

    /// File the concatenation is written to (created or truncated)
    pub output: Option<PathBuf>,

    /// Glob patterns, relative to each walked directory. Empty means every file.
    pub include: Vec<String>,

    /// Emit entries sorted by file name instead of filesystem order
    pub sort: bool,

    /// Also emit the output file when it lies inside a walked directory
    pub include_output: bool,
}

impl ConcatConfig {
    /// Parse configuration from YAML string
    ///
    /// An empty document is an empty configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(Self::parse(yaml)?)
    }

    fn parse(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Serialize configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load configuration from a YAML file
    ///
    /// Relative `directories` and `output` are resolved against the directory
    /// containing the file, so a config behaves the same from any working
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        let mut loaded = Self::parse(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;

        let base = path_utils::resolve_from_cwd(path.parent().unwrap_or(Path::new("")))?;
        loaded.directories = loaded
            .directories
            .iter()
            .map(|dir| path_utils::resolve_against(dir, &base))
            .collect();
        loaded.output = loaded
            .output
            .map(|output| path_utils::resolve_against(&output, &base));

        Ok(loaded)
    }

    /// Overlay `overrides` on top of this configuration
    ///
    /// A non-empty directory list replaces ours, a set output replaces ours,
    /// include patterns are appended, and sorting and `include_output` are
    /// enabled if either side asks for them.
    pub fn merge(&mut self, overrides: ConcatConfig) {
        if !overrides.directories.is_empty() {
            self.directories = overrides.directories;
        }
        if overrides.output.is_some() {
            self.output = overrides.output;
        }
        self.include.extend(overrides.include);
        self.sort |= overrides.sort;
        self.include_output |= overrides.include_output;
    }

    /// Output path of the run
    pub fn output_path(&self) -> Result<&Path> {
        self.output.as_deref().ok_or_else(|| {
            config::invalid("output path is not set (use --output or 'output:' in the config file)")
        })
    }
}
