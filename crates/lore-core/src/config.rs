//! Lore configuration
//!
//! Loaded from TOML; every section and field is optional.
//!
//! ```toml
//! [routes]
//! edit_prefix = "/edit-article/"
//!
//! [logging]
//! filter = "lore_core=debug,info"
//! json = false
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoreConfig {
    /// Navigation routes emitted to the shell
    pub routes: RouteConfig,
    /// Tracing output
    pub logging: LoggingConfig,
}

impl LoreConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With edit route prefix
    #[inline]
    #[must_use]
    pub fn with_edit_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.routes.edit_prefix = prefix.into();
        self
    }

    /// With log filter directives
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging.filter = filter.into();
        self
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// `ConfigError::Parse` on invalid TOML or unknown value types
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - `ConfigError::Parse` if it does not parse
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&raw)
    }
}

/// Route configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Prefix of the edit view route; the article title is appended
    pub edit_prefix: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            edit_prefix: "/edit-article/".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}
