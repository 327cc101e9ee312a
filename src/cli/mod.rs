//! CLI adapter for docsift
//!
//! Provides the command-line interface over the indexing pipeline,
//! the index stores and the local search index.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// docsift - DocSearch record builder
///
/// Turns documentation pages into hierarchical search records and
/// replaces the contents of a search index with them.
#[derive(Parser, Debug)]
#[command(name = "docsift")]
#[command(version)]
#[command(about = "DocSearch record builder for documentation sites", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build search records for every page and publish them
    Build(commands::BuildArgs),

    /// Show the records a single markdown file produces
    Preview(commands::PreviewArgs),

    /// Query the local search index
    Search(commands::SearchArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docsift completions bash > ~/.local/share/bash-completion/completions/docsift
    ///   zsh:   docsift completions zsh > ~/.zfunc/_docsift
    ///   fish:  docsift completions fish > ~/.config/fish/completions/docsift.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();
    xdg.ensure_dirs_exist()?;

    let config = Config::load_with_xdg(&xdg)?;
    config.validate()?;
    config.log_config();

    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::Build(args) => commands::build::execute(args, &services, cli.format).await,
        Commands::Preview(args) => commands::preview::execute(args, &services, cli.format).await,
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
