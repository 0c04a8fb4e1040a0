//! Core data types for the Docshelf documentation server.
//!
//! This module defines the data structures used throughout the
//! application, including document descriptors, search matches,
//! and `docs://` URI parsing.

use crate::core::error::{DocshelfError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// URI scheme prefix for addressing documentation resources
pub const URI_SCHEME: &str = "docs://";

/// MIME type reported for every documentation resource
pub const DOC_MIME_TYPE: &str = "text/markdown";

/// Category assigned to markdown files at the corpus root
pub const GENERAL_CATEGORY: &str = "general";

/// A single markdown file discovered in the docs corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocDescriptor {
    /// File stem without the `.md` extension
    pub name: String,

    /// Immediate parent directory name, or `general` for root files
    pub category: String,

    /// Path relative to the corpus root, `/`-separated
    pub relative_path: String,

    /// Absolute path on disk
    pub absolute_path: PathBuf,
}

impl DocDescriptor {
    /// Canonical `docs://{category}/{name}` URI for this document
    pub fn uri(&self) -> String {
        format!("{}{}/{}", URI_SCHEME, self.category, self.name)
    }

    /// Human-readable `{category}/{name}` label
    pub fn display_name(&self) -> String {
        format!("{}/{}", self.category, self.name)
    }

    /// One-line description shown in resource listings
    pub fn description(&self) -> String {
        format!(
            "Documentation for {} in {} category",
            self.name, self.category
        )
    }
}

/// A document matched by a search query, with line-level evidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Document category
    pub category: String,

    /// Document name
    pub name: String,

    /// Path relative to the corpus root
    pub relative_path: String,

    /// Up to five `Line {n}: {text}` evidence lines
    pub evidence: Vec<String>,
}

/// Parse a `docs://{category}/{name}` URI into its category and name.
///
/// The scheme must match exactly, and at least two `/`-separated
/// segments must follow it. Segments beyond the second are ignored.
pub fn parse_uri(uri: &str) -> Result<(String, String)> {
    let path_part = uri
        .strip_prefix(URI_SCHEME)
        .ok_or_else(|| DocshelfError::MalformedUri(format!("invalid scheme: {uri}")))?;

    let mut segments = path_part.split('/');
    match (segments.next(), segments.next()) {
        (Some(category), Some(name)) => Ok((category.to_string(), name.to_string())),
        _ => Err(DocshelfError::MalformedUri(format!(
            "expected {URI_SCHEME}{{category}}/{{name}}: {uri}"
        ))),
    }
}
