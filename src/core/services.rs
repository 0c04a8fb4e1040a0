//! Unified service container for Docshelf
//!
//! Provides shared access to all core services.

use crate::core::catalog::DocCatalog;
use crate::core::config::Config;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Documentation catalog for list, read, and search operations
    pub catalog: Arc<DocCatalog>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let catalog = Arc::new(DocCatalog::new(config.docs.dir.clone()));

        Self {
            catalog,
            config: Arc::new(config),
        }
    }
}
