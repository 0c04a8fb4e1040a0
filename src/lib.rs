//! Docshelf - Markdown Documentation Server for Coding Agents
//!
//! Serves a directory tree of markdown files as addressable,
//! searchable documentation resources. Designed for simple,
//! reliable documentation lookup from agent tooling.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - indexer (markdown discovery)
//!   - catalog (snapshot lifecycle, read, search)
//!   - services (unified service container)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, handlers, tools, protocol
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Features
//!
//! - Every markdown file addressable as `docs://{category}/{name}`
//! - Literal substring search with line-level evidence
//! - Rebuild-and-swap catalog snapshots (no partial state)
//! - MCP server over stdio (resources + tools)
//! - CLI with human and JSON output

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{DocshelfError, Result};
pub use core::services::Services;
pub use core::types::*;
