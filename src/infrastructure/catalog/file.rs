//! # File Catalog Source
//!
//! [`CatalogSource`] that reads a catalog export from disk.
//!
//! The format is picked by extension:
//!
//! | Extension | Parser |
//! |-----------|--------|
//! | `.json` | `serde_json` |
//! | `.toml` | `toml` |
//!
//! Both formats carry the four tables as top-level arrays named
//! `services`, `zones`, `postal_codes` and `discount_rules`; missing tables
//! are empty.

use crate::domain::entities::Catalog;
use crate::infrastructure::catalog::traits::{CatalogError, CatalogResult, CatalogSource};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// JSON document.
    Json,
    /// TOML document.
    Toml,
}

impl CatalogFormat {
    /// Detects the format from the extension of `path`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(CatalogError::unsupported_format(path)),
        }
    }

    /// Parses `contents` read from `path`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the document is malformed.
    pub fn parse(self, path: &Path, contents: &str) -> CatalogResult<Catalog> {
        match self {
            Self::Json => serde_json::from_str(contents).map_err(|e| CatalogError::parse(path, e)),
            Self::Toml => toml::from_str(contents).map_err(|e| CatalogError::parse(path, e)),
        }
    }
}

/// Catalog read from a JSON or TOML file on every load.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
    format: CatalogFormat,
}

impl FileCatalogSource {
    /// Creates a source for `path`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnsupportedFormat` if the extension is not
    /// `.json` or `.toml`.
    pub fn new(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let path = path.into();
        let format = CatalogFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    /// Returns the file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the detected format.
    #[inline]
    #[must_use]
    pub const fn format(&self) -> CatalogFormat {
        self.format
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> CatalogResult<Catalog> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::io(&self.path, e))?;
        self.format.parse(&self.path, &contents)
    }

    fn name(&self) -> &str {
        "file"
    }
}
