//! MCP-specific error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Resource error (code {0}): {1}")]
    ResourceError(i32, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<crate::core::error::DocshelfError> for McpError {
    fn from(err: crate::core::error::DocshelfError) -> Self {
        use crate::core::error::DocshelfError;
        match err {
            DocshelfError::CorpusUnavailable(s) => McpError::ResourceError(
                crate::mcp::protocol::CORPUS_UNAVAILABLE,
                format!("Docs directory unavailable: {s}"),
            ),
            DocshelfError::MalformedUri(s) => McpError::InvalidParams(format!("Malformed URI: {s}")),
            DocshelfError::ResourceNotFound(s) => McpError::ResourceError(
                crate::mcp::protocol::RESOURCE_NOT_FOUND,
                format!("Resource not found: {s}"),
            ),
            DocshelfError::ConfigError(s) => {
                McpError::InvalidParams(format!("Configuration error: {s}"))
            }
            DocshelfError::IoError(e) => McpError::InternalError(format!("I/O error: {e}")),
            DocshelfError::SerdeError(e) => {
                McpError::InternalError(format!("Serialization error: {e}"))
            }
            DocshelfError::TomlError(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
        }
    }
}
