//! Error types for Lore Core
//!
//! Resolution itself never returns an error: batch failures are reported
//! in [`ResolutionReport`](crate::ResolutionReport) and leave their list
//! empty. The errors here cover process setup.

use std::path::PathBuf;

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML or schema mismatch
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tracing setup errors
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Filter directive did not parse
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed
    #[error("subscriber install failed: {0}")]
    Install(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_io_error_display() {
        let err = ConfigError::Io {
            path: PathBuf::from("lore.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("lore.toml"));
    }

    #[test]
    fn telemetry_install_display() {
        let err = TelemetryError::Install("already set".to_string());
        assert_eq!(err.to_string(), "subscriber install failed: already set");
    }
}
