//! Configuration management for the Docshelf documentation server.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{DocshelfError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub docs: DocsConfig,
}

/// Documentation corpus configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocsConfig {
    /// Root directory of the markdown corpus
    #[serde(default = "default_docs_dir")]
    pub dir: PathBuf,
}

// Default value functions
fn default_docs_dir() -> PathBuf {
    PathBuf::from("./docs")
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            dir: default_docs_dir(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocshelfError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create default configuration
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// Priority order:
    /// 1. DOCSHELF_CONFIG env var (explicit file path)
    /// 2. XDG config file (~/.config/docshelf/config.toml)
    /// 3. Project-local ./docshelf.toml
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCSHELF_CONFIG") {
            // Load from file if DOCSHELF_CONFIG is set (explicit override)
            Self::from_file(config_path)?
        } else {
            // Try XDG config file
            let xdg_config = config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("docshelf.toml").exists() {
                // Fall back to a project-local config
                Self::from_file("docshelf.toml")?
            } else {
                // Use defaults
                Self::default()
            }
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(docs_dir) = env::var("DOCSHELF_DOCS_DIR") {
            self.docs.dir = PathBuf::from(docs_dir);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.docs.dir.as_os_str().is_empty() {
            return Err(DocshelfError::ConfigError(
                "Docs directory must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Docs dir: {:?}", self.docs.dir);
    }
}

/// Resolve the XDG config file path
///
/// Priority order (highest to lowest):
/// 1. XDG_CONFIG_HOME environment variable
/// 2. XDG default (~/.config)
pub fn config_file() -> PathBuf {
    let config_dir = if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("docshelf")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("docshelf")
    };

    config_dir.join("config.toml")
}
