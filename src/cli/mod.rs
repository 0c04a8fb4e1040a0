//! CLI adapter for Docshelf
//!
//! Provides command-line access to the documentation catalog.
//! This module is parallel to `mcp/` - both depend on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      mcp/        |      |      cli/        |
//! | (stdio adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Docshelf - Markdown Documentation Server
///
/// Serves a directory of markdown documentation to coding agents, with
/// commands for listing, searching, and reading the same corpus the MCP
/// server exposes.
#[derive(Parser, Debug)]
#[command(name = "docshelf")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "Markdown documentation server", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Documentation directory (overrides config file)
    #[arg(long, global = true, env = "DOCSHELF_DOCS_DIR")]
    pub docs_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List discovered documentation files
    List(commands::ListArgs),

    /// Search documentation content
    Search(commands::SearchArgs),

    /// Read a document by its docs:// URI
    Read(commands::ReadArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docshelf completions bash > ~/.local/share/bash-completion/completions/docshelf
    ///   zsh:   docshelf completions zsh > ~/.zfunc/_docshelf
    ///   fish:  docshelf completions fish > ~/.config/fish/completions/docshelf.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let mut config = Config::load()?;

    // CLI flag wins over config file and environment
    if let Some(dir) = cli.docs_dir {
        config.docs.dir = dir;
    }

    // First run: create the docs directory instead of failing
    if !config.docs.dir.exists() {
        output::print_warning(&format!(
            "Docs directory {} does not exist, creating it",
            config.docs.dir.display()
        ));
        std::fs::create_dir_all(&config.docs.dir)?;
    }

    // Create services and prime the catalog so `read` sees the corpus
    let services = Arc::new(Services::new(config));
    services.catalog.refresh()?;

    // Execute command
    match cli.command {
        Commands::List(args) => commands::list::execute(args, &services, cli.format).await,
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Read(args) => commands::read::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
