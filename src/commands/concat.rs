//! Concat command implementation
//!
//! Builds the run configuration from `--config` and the command line,
//! runs the concatenator and prints where the result was saved.

use console::Style;

use crate::cli::ConcatArgs;
use crate::concat::Concatenator;
use crate::config::ConcatConfig;
use crate::error::Result;
use crate::path_utils;
use crate::ui::{
    InteractiveProgressReporter, ProgressReporter, SilentProgressReporter,
    VerboseProgressReporter,
};

/// Run concat command
pub fn run(args: ConcatArgs, verbose: bool) -> Result<()> {
    let config = resolve_config(&args)?;
    let output = config.output_path()?;
    let concatenator = Concatenator::from_config(&config)?;

    let mut reporter = create_reporter(args.quiet, verbose);
    concatenator.run(&config.directories, output, reporter.as_mut())?;

    println!(
        "{} {}",
        Style::new().bold().green().apply_to("Saved all files to:"),
        output.display()
    );

    Ok(())
}

/// Merge the config file (if any) with command line arguments
///
/// Relative paths given on the command line are resolved against the current
/// directory.
fn resolve_config(args: &ConcatArgs) -> Result<ConcatConfig> {
    let mut config = match &args.config {
        Some(path) => ConcatConfig::load(path)?,
        None => ConcatConfig::default(),
    };

    let directories = args
        .directories
        .iter()
        .map(|dir| path_utils::resolve_from_cwd(dir))
        .collect::<Result<Vec<_>>>()?;
    let output = args
        .output
        .as_deref()
        .map(path_utils::resolve_from_cwd)
        .transpose()?;

    config.merge(ConcatConfig {
        directories,
        output,
        include: args.include.clone(),
        sort: args.sort,
        include_output: args.include_output,
    });

    Ok(config)
}

fn create_reporter(quiet: bool, verbose: bool) -> Box<dyn ProgressReporter> {
    if quiet {
        Box::new(SilentProgressReporter)
    } else if verbose {
        Box::new(VerboseProgressReporter::default())
    } else {
        Box::new(InteractiveProgressReporter::new())
    }
}
