//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (MCP, CLI, etc).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures and URI parsing
//! - **indexer**: Markdown file discovery
//! - **catalog**: Document snapshots, read, and search
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod error;
pub mod indexer;
pub mod services;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocshelfError, Result};
pub use services::Services;
