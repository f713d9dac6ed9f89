//! # Application Settings
//!
//! Layered configuration for the quote engine.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults ([`AppSettings::default`])
//! 2. Optional settings file: the explicit path, else `$TUTTO_CONFIG`, else
//!    `tutto.toml` in the working directory
//! 3. Environment variables prefixed `TUTTO`, nested with `__`
//!    (a `.env` file is loaded first when present)
//!
//! # Examples
//!
//! ```text
//! TUTTO__LOGGING__LEVEL=debug
//! TUTTO__COUNTRIES__AR__MINIMUM_CHARGE=30000
//! TUTTO__QUOTE__VALUE_THRESHOLDS=true
//! TUTTO__CATALOG__PATH=/etc/tutto/catalog.json
//! ```

use crate::domain::services::RangePolicy;
use crate::domain::value_objects::CountryTable;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the settings file.
pub const CONFIG_PATH_ENV: &str = "TUTTO_CONFIG";

/// Settings file used when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "tutto.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "TUTTO";

/// Where the catalog is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// JSON or TOML export; the built-in tables when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Quote calculation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSettings {
    /// Enables the value-threshold discount stage.
    #[serde(default)]
    pub value_thresholds: bool,
    /// Widens the final price into a range.
    #[serde(default)]
    pub range: Option<RangePolicy>,
}

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Per-country constants.
    #[serde(default)]
    pub countries: CountryTable,
    /// Catalog location.
    #[serde(default)]
    pub catalog: CatalogSettings,
    /// Logging.
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Quote calculation.
    #[serde(default)]
    pub quote: QuoteSettings,
}

impl AppSettings {
    /// Loads settings from defaults, file and environment.
    ///
    /// An explicit `path` must exist; the implicit files are optional.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a file cannot be parsed or a value has
    /// the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => match std::env::var_os(CONFIG_PATH_ENV) {
                Some(path) => File::from(PathBuf::from(path)).required(true),
                None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
            },
        };

        Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
