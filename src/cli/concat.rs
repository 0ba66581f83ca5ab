use clap::Parser;
use std::path::PathBuf;

/// Arguments for the concat command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Concatenate two directories:\n    dircat concat src/controller src/service -o all_files.txt\n\n\
                  Use a configuration file:\n    dircat concat --config dircat.yaml\n\n\
                  Only Java sources, in a stable order:\n    dircat concat src -o all_java_files.txt --include '**/*.java' --sort\n\n\
                  Show every file as it is written:\n    dircat -v concat src -o all_files.txt")]
pub struct ConcatArgs {
    /// Directories to walk, in order (replace the config file's list)
    #[arg(value_name = "DIR")]
    pub directories: Vec<PathBuf>,

    /// Output file, created or overwritten
    #[arg(long, short = 'o', value_name = "FILE", env = "DIRCAT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// YAML configuration file with directories, output, include and sort
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only include files matching this glob, relative to each directory (repeatable)
    #[arg(long, short = 'i', value_name = "GLOB")]
    pub include: Vec<String>,

    /// Visit files in name order for reproducible output
    #[arg(long)]
    pub sort: bool,

    /// Also concatenate the output file if it lies inside a walked directory
    #[arg(long)]
    pub include_output: bool,

    /// Do not show progress
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
