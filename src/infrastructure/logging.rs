//! # Logging
//!
//! `tracing` subscriber setup driven by [`LoggingSettings`].
//!
//! `RUST_LOG` takes precedence over the configured level.

use crate::infrastructure::config::{LogFormat, LoggingSettings};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Error raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The level directive does not parse.
    #[error("invalid log filter '{directive}': {message}")]
    InvalidFilter {
        /// Directive as configured.
        directive: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber is already installed.
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Builds the filter: `RUST_LOG` if set, else the configured level.
///
/// # Errors
///
/// Returns `LoggingError::InvalidFilter` if the configured level does not
/// parse.
pub fn env_filter(settings: &LoggingSettings) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&settings.level).map_err(|e| LoggingError::InvalidFilter {
            directive: settings.level.clone(),
            message: e.to_string(),
        })
    })
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), LoggingError> {
    let filter = env_filter(settings)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let result = match settings.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let settings = LoggingSettings {
            level: "tutto_quote=verbose".to_string(),
            ..LoggingSettings::default()
        };
        assert!(matches!(
            env_filter(&settings),
            Err(LoggingError::InvalidFilter { .. })
        ));
    }

    #[test]
    fn default_level_parses() {
        assert!(env_filter(&LoggingSettings::default()).is_ok());
    }
}
