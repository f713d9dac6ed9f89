//! # Catalog Source Trait
//!
//! Port definition for loading catalog snapshots.
//!
//! The pricing engine never reads rows itself: a [`CatalogSource`] parses
//! whatever backs the tables and hands over a typed [`Catalog`].
//!
//! # Examples
//!
//! ```ignore
//! use tutto_quote::infrastructure::catalog::CatalogSource;
//!
//! async fn service_count(source: &impl CatalogSource) -> usize {
//!     source.load().await.map(|c| c.services().len()).unwrap_or(0)
//! }
//! ```

use crate::domain::entities::Catalog;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing file could not be read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The contents could not be parsed.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// File path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The file extension does not name a supported format.
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(PathBuf),
}

impl CatalogError {
    /// Creates an I/O error.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Creates an unsupported format error.
    #[must_use]
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat(path.into())
    }

    /// Returns true if a retry might succeed without changing the source.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Source of catalog snapshots.
///
/// Each call to [`load`](CatalogSource::load) returns a complete snapshot;
/// callers swap it in wholesale.
#[async_trait]
pub trait CatalogSource: Send + Sync + fmt::Debug {
    /// Loads the current tables.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the backing data cannot be read or parsed.
    async fn load(&self) -> CatalogResult<Catalog>;

    /// Returns a short name for logs.
    fn name(&self) -> &str;
}
