//! Document catalog with rebuild-and-swap snapshots.
//!
//! The catalog owns the authoritative view of the docs corpus. Every
//! refresh rescans the directory and replaces the previous snapshot
//! wholesale, so readers never observe a partially updated listing.
//! Reads resolve against the snapshot only; search rescans first so
//! results always reflect the current directory contents.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::core::error::{DocshelfError, Result};
use crate::core::indexer;
use crate::core::types::{parse_uri, DocDescriptor, SearchMatch};

/// Maximum number of evidence lines reported per matching document
pub const MAX_EVIDENCE_LINES: usize = 5;

/// Catalog of discovered documentation files
pub struct DocCatalog {
    /// Corpus root on disk
    docs_dir: PathBuf,

    /// Most recent snapshot, replaced wholesale on refresh
    current: RwLock<Arc<Vec<DocDescriptor>>>,
}

impl DocCatalog {
    /// Create a catalog rooted at the given docs directory.
    ///
    /// Relative roots are anchored to the current working directory
    /// so descriptors always carry absolute paths.
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        let docs_dir = docs_dir.into();
        let docs_dir = if docs_dir.is_absolute() {
            docs_dir
        } else {
            env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(docs_dir)
        };

        Self {
            docs_dir,
            current: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Corpus root this catalog scans
    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    /// Rescan the corpus and install a fresh snapshot.
    ///
    /// Returns the snapshot that was installed. On error the previous
    /// snapshot is left untouched.
    pub fn refresh(&self) -> Result<Arc<Vec<DocDescriptor>>> {
        let descriptors = Arc::new(indexer::scan(&self.docs_dir)?);
        *self.current.write().unwrap() = Arc::clone(&descriptors);
        tracing::debug!("Catalog refreshed: {} documents", descriptors.len());
        Ok(descriptors)
    }

    /// Current snapshot without rescanning
    pub fn snapshot(&self) -> Arc<Vec<DocDescriptor>> {
        Arc::clone(&self.current.read().unwrap())
    }

    /// Rescan and return the full listing
    pub fn list(&self) -> Result<Arc<Vec<DocDescriptor>>> {
        self.refresh()
    }

    /// Read the contents of the document addressed by `uri`.
    ///
    /// Resolves against the current snapshot without rescanning; a
    /// document added since the last refresh is not visible here
    /// until `refresh` or `list` runs again.
    pub fn read(&self, uri: &str) -> Result<String> {
        let (category, name) = parse_uri(uri)?;

        let snapshot = self.snapshot();
        let descriptor = snapshot
            .iter()
            .find(|d| d.category == category && d.name == name)
            .ok_or_else(|| DocshelfError::ResourceNotFound(uri.to_string()))?;

        if !descriptor.absolute_path.exists() {
            return Err(DocshelfError::ResourceNotFound(format!(
                "{uri} (file removed)"
            )));
        }

        let content = fs::read_to_string(&descriptor.absolute_path)?;
        tracing::info!("Read resource: {} ({} bytes)", uri, content.len());
        Ok(content)
    }

    /// Search document contents for a literal substring.
    ///
    /// Matching is case-insensitive: the query and document text are
    /// both lowercased. Rescans the corpus first, then reads each
    /// candidate in catalog order. Files that vanished since the scan
    /// are skipped; other read failures abort the search.
    pub fn search(&self, query: &str, category: Option<&str>) -> Result<Vec<SearchMatch>> {
        let query = query.to_lowercase();
        let snapshot = self.refresh()?;

        let mut matches = Vec::new();
        for descriptor in snapshot.iter() {
            if let Some(category) = category {
                if descriptor.category != category {
                    continue;
                }
            }

            // A file listed moments ago may already be gone
            if !descriptor.absolute_path.exists() {
                continue;
            }

            let content = fs::read_to_string(&descriptor.absolute_path)?;
            if !content.to_lowercase().contains(&query) {
                continue;
            }

            let evidence: Vec<String> = content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.to_lowercase().contains(&query))
                .take(MAX_EVIDENCE_LINES)
                .map(|(i, line)| format!("Line {}: {}", i + 1, line))
                .collect();

            matches.push(SearchMatch {
                category: descriptor.category.clone(),
                name: descriptor.name.clone(),
                relative_path: descriptor.relative_path.clone(),
                evidence,
            });
        }

        Ok(matches)
    }
}
