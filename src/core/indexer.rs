//! Markdown file discovery for the docs corpus.
//!
//! Traverses the docs directory tree and derives a descriptor for
//! every `.md` file found. Handles errors below the root gracefully
//! (permission denied, etc.) without aborting the scan.

use std::path::Path;
use walkdir::WalkDir;

use crate::core::error::{DocshelfError, Result};
use crate::core::types::{DocDescriptor, GENERAL_CATEGORY};

/// Scan the docs directory for markdown files.
///
/// Returns descriptors sorted by `(category, name)` so listings and
/// search results are deterministic across rescans. Files whose paths
/// are not valid UTF-8 are skipped with a warning, since they cannot
/// be addressed by a `docs://` URI.
///
/// # Errors
///
/// Returns `CorpusUnavailable` if the docs directory itself is
/// missing, not a directory, or unreadable.
pub fn scan(docs_dir: &Path) -> Result<Vec<DocDescriptor>> {
    if !docs_dir.exists() {
        return Err(DocshelfError::CorpusUnavailable(format!(
            "{} does not exist",
            docs_dir.display()
        )));
    }

    if !docs_dir.is_dir() {
        return Err(DocshelfError::CorpusUnavailable(format!(
            "{} is not a directory",
            docs_dir.display()
        )));
    }

    let mut descriptors = Vec::new();

    for entry in WalkDir::new(docs_dir).follow_links(false) {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    continue;
                }

                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("md") {
                    continue;
                }

                if let Some(descriptor) = describe(path, docs_dir) {
                    descriptors.push(descriptor);
                }
            }
            Err(e) => {
                // An error at depth 0 means the root itself is unreadable
                if e.depth() == 0 {
                    return Err(DocshelfError::CorpusUnavailable(format!(
                        "cannot read {}: {e}",
                        docs_dir.display()
                    )));
                }
                tracing::warn!("Walk error: {}", e);
                // Continue walking despite errors
            }
        }
    }

    descriptors.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.relative_path.cmp(&b.relative_path))
    });

    Ok(descriptors)
}

/// Derive a descriptor for a single markdown file.
///
/// The category is the immediate parent directory name, or `general`
/// for files directly under the corpus root. Returns `None` for
/// paths that cannot be represented as UTF-8.
fn describe(path: &Path, docs_dir: &Path) -> Option<DocDescriptor> {
    let relative = match path.strip_prefix(docs_dir) {
        Ok(relative) => relative,
        Err(_) => return None,
    };

    let mut parts = Vec::new();
    for component in relative.components() {
        match component.as_os_str().to_str() {
            Some(s) => parts.push(s),
            None => {
                tracing::warn!("Skipping non-UTF-8 path: {:?}", path);
                return None;
            }
        }
    }

    let name = match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) => stem.to_string(),
        None => {
            tracing::warn!("Skipping file with unusable name: {:?}", path);
            return None;
        }
    };

    let category = if parts.len() >= 2 {
        parts[parts.len() - 2].to_string()
    } else {
        GENERAL_CATEGORY.to_string()
    };

    Some(DocDescriptor {
        name,
        category,
        relative_path: parts.join("/"),
        absolute_path: path.to_path_buf(),
    })
}
