//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::error::TelemetryError;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides the configured filter. Output goes to stderr so
/// rendered views on stdout stay clean.
///
/// # Errors
/// - `TelemetryError::InvalidFilter` if `RUST_LOG` or the configured filter
///   is invalid
/// - `TelemetryError::Install` if a subscriber is already installed
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(from_env.as_deref(), &config.filter)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| TelemetryError::Install(e.to_string()))
}

/// Pick the environment directives when set, else the configured ones
///
/// A set but unparsable environment value is an error, not a fallback.
fn build_filter(from_env: Option<&str>, configured: &str) -> Result<EnvFilter, TelemetryError> {
    let directives = from_env
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(configured);
    Ok(EnvFilter::try_new(directives)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_env_uses_configured_filter() {
        let filter = build_filter(None, "lore_core=debug").unwrap();
        assert!(filter.to_string().contains("lore_core=debug"));

        let blank = build_filter(Some("  "), "warn").unwrap();
        assert!(blank.to_string().contains("warn"));
    }

    #[test]
    fn env_filter_takes_precedence() {
        let filter = build_filter(Some("lore_store=trace"), "info").unwrap();
        assert!(filter.to_string().contains("lore_store=trace"));
    }

    #[test]
    fn invalid_env_filter_is_reported() {
        let result = build_filter(Some("lore_core=loud"), "info");
        assert!(matches!(result, Err(TelemetryError::InvalidFilter(_))));
    }

    #[test]
    fn invalid_configured_filter_is_reported() {
        let result = build_filter(None, "lore_core=loud");
        assert!(matches!(result, Err(TelemetryError::InvalidFilter(_))));
    }

    #[test]
    fn second_install_fails_cleanly() {
        let config = LoggingConfig::default();
        let _ = init_tracing(&config);
        assert!(matches!(
            init_tracing(&config),
            Err(TelemetryError::Install(_))
        ));
    }
}
