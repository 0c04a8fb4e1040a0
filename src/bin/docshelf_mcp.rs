//! Docshelf MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes a directory of markdown
//! documentation as resources and search tools for Claude Code and
//! other MCP clients.

use docshelf::core::config::Config;
use docshelf::core::services::Services;
use docshelf::mcp::McpServer;
use std::sync::Arc;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // Critical: stderr not stdout
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false) // No color codes
        .compact() // Concise format
        .init();
}

/// Discover the corpus once at startup so resource reads work immediately
fn scan_docs_on_startup(services: &Services) {
    match services.catalog.refresh() {
        Ok(docs) => {
            tracing::info!("Discovered {} documentation file(s)", docs.len());
        }
        Err(e) => {
            tracing::error!("Initial scan failed: {}", e);
        }
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    config.log_config();

    // First run: create the docs directory instead of failing
    if !config.docs.dir.exists() {
        tracing::warn!(
            "Docs directory {} does not exist, creating it",
            config.docs.dir.display()
        );
        if let Err(e) = std::fs::create_dir_all(&config.docs.dir) {
            eprintln!(
                "Failed to create docs directory {}: {e}",
                config.docs.dir.display()
            );
            std::process::exit(1);
        }
    }

    // Create services
    let services = Arc::new(Services::new(config));

    // Populate the catalog before accepting requests
    scan_docs_on_startup(&services);

    // Create and run MCP server
    let mut server = McpServer::new(services);

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
