//! dircat - concatenate directories into one annotated text file
//!
//! Walks an ordered list of directories and writes every file found into a
//! single text file, each preceded by a header with its absolute path and
//! followed by a separator line.
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//!
//! let summary = dircat::concat::concat_directories(
//!     &[PathBuf::from("/srv/app/src/controller"), PathBuf::from("/srv/app/src/service")],
//!     Path::new("/tmp/all_files.txt"),
//! )?;
//! println!("{} files", summary.files);
//! # Ok::<(), dircat::error::DircatError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod concat;
pub mod config;
pub mod error;
pub mod path_utils;
pub mod ui;
