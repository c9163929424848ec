//! Stager - flat deployment helper
//!
//! Copies a set of module directories and an application source tree into a
//! flat deploy directory, rewriting import statements so that module
//! references resolve to their relocated entry points.

use clap::Parser;

mod cli;
mod commands;
mod deployer;
mod error;
mod manifest;
mod progress;
mod rewrite;
mod walker;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Deploy(args) => commands::deploy::run(args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
