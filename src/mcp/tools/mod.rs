//! MCP tool implementations
//!
//! This module contains all MCP tool handlers that expose Docshelf's
//! documentation corpus to MCP clients.

pub mod handler;
pub mod list_docs;
pub mod registry;
pub mod search_docs;

pub use handler::{text_content, McpToolHandler};
pub use list_docs::ListDocsHandler;
pub use registry::ToolRegistry;
pub use search_docs::SearchDocsHandler;
