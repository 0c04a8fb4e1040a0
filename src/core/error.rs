//! Error types and error handling for the Docshelf documentation server.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (MCP error codes)
//! is handled in the respective adapter modules.

use thiserror::Error;

/// Result type alias for Docshelf operations
pub type Result<T> = std::result::Result<T, DocshelfError>;

/// Main error type for the Docshelf service
#[derive(Error, Debug)]
pub enum DocshelfError {
    #[error("Docs directory unavailable: {0}")]
    CorpusUnavailable(String),

    #[error("Malformed URI: {0}")]
    MalformedUri(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocshelfError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocshelfError::ResourceNotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            DocshelfError::MalformedUri(_) | DocshelfError::ConfigError(_)
        )
    }

    /// Check if the docs corpus itself is missing or unreadable
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DocshelfError::CorpusUnavailable(_))
    }
}
