// Test fixtures for integration testing

use docshelf::core::config::Config;
use docshelf::core::services::Services;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Documentation corpus fixture backed by a tempdir
///
/// The corpus root lives in a `docs/` subdirectory of the tempdir so tests
/// can delete the root without fighting `TempDir` cleanup.
pub struct DocsCorpus {
    pub dir: TempDir,
    root: PathBuf,
}

impl DocsCorpus {
    /// Create an empty corpus
    #[allow(dead_code)] // Used in integration tests
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("docs");
        std::fs::create_dir_all(&root).unwrap();
        Self { dir, root }
    }

    /// Create a corpus seeded with markdown files
    #[allow(dead_code)] // Used in integration tests
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let corpus = Self::empty();
        for (path, content) in files {
            corpus.write(path, content);
        }
        corpus
    }

    /// Path to the corpus root
    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write (or overwrite) a file under the corpus root
    #[allow(dead_code)] // Used in integration tests
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
        std::fs::write(&full_path, content).unwrap();
    }

    /// Remove a file under the corpus root
    #[allow(dead_code)] // Used in integration tests
    pub fn remove(&self, path: &str) {
        std::fs::remove_file(self.root.join(path)).unwrap();
    }

    /// Delete the corpus root itself
    #[allow(dead_code)] // Used in integration tests
    pub fn remove_root(&self) {
        std::fs::remove_dir_all(&self.root).unwrap();
    }

    /// Build services pointed at this corpus
    #[allow(dead_code)] // Used in integration tests
    pub fn services(&self) -> Arc<Services> {
        let mut config = Config::default();
        config.docs.dir = self.root.clone();
        Arc::new(Services::new(config))
    }
}
