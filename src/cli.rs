//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stager - flat deployment helper
///
/// Stage module directories and an application source tree into a deploy
/// directory, rewriting import statements along the way.
#[derive(Parser, Debug)]
#[command(
    name = "stager",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Flat deployment helper with import rewriting",
    long_about = "Stager copies module directories and an application source tree into a \
                  flat deploy directory. Import statements in copied files are rewritten \
                  so that each module reference resolves to the module's relocated entry \
                  point, relative to the file's new location.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  stager deploy\n    \
                  stager deploy --deploy-dir ./dist\n    \
                  stager deploy --no-rewrite\n    \
                  stager version"
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
    /// Stage modules and sources into the deploy directory
    Deploy(DeployArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the deploy command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Deploy with default paths:\n    stager deploy\n\n\
                  Deploy to a custom output directory:\n    stager deploy --deploy-dir ./dist\n\n\
                  Deploy from custom roots:\n    stager deploy --modules-dir ./vendor --source-dir ./app\n\n\
                  Plain copy without import rewriting:\n    stager deploy --no-rewrite")]
pub struct DeployArgs {
    /// Deploy output directory (recreated from scratch each run)
    #[arg(long, default_value = "./deploy")]
    pub deploy_dir: PathBuf,

    /// Directory whose subdirectories carry module manifests
    #[arg(long, default_value = "./node_modules")]
    pub modules_dir: PathBuf,

    /// Application source directory
    #[arg(long, default_value = "./src")]
    pub source_dir: PathBuf,

    /// Copy files byte-for-byte without rewriting import lines
    #[arg(long)]
    pub no_rewrite: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    stager completions --shell bash > ~/.bash_completion.d/stager\n\n\
                  Generate zsh completions:\n    stager completions --shell zsh > ~/.zfunc/_stager\n\n\
                  Generate fish completions:\n    stager completions --shell fish > ~/.config/fish/completions/stager.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
