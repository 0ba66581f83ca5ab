//! dircat - concatenate directories into one annotated text file

use clap::Parser;

use dircat::cli::{Cli, Commands};
use dircat::commands;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Concat(args) => commands::concat::run(args, cli.verbose),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
