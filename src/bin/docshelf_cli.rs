//! Docshelf CLI - Command-line interface for the documentation catalog
//!
//! A direct command-line interface over the same corpus the MCP server
//! serves. Use this for scripting, automation, or manual lookups without
//! an MCP client.
//!
//! # Examples
//!
//! ```bash
//! # List all discovered documentation
//! docshelf list
//!
//! # Search documentation content
//! docshelf search "authentication"
//!
//! # Read one document
//! docshelf read docs://api/auth
//!
//! # Point at a different docs directory
//! docshelf --docs-dir ./handbook list
//! ```

use clap::Parser;
use docshelf::cli::{output, run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
