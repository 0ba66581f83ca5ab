//! Command implementations for dircat CLI

pub mod completions;
pub mod concat;
