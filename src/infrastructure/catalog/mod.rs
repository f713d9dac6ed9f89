//! # Catalog Sources
//!
//! Where catalog snapshots come from.
//!
//! ## Port
//!
//! - [`CatalogSource`]: Loads a complete [`Catalog`](crate::domain::entities::Catalog)
//!
//! ## Implementations
//!
//! - [`InMemoryCatalogSource`]: Held in memory, with built-in reference data
//! - [`FileCatalogSource`]: JSON or TOML export on disk

pub mod file;
pub mod in_memory;
pub mod traits;

pub use file::{CatalogFormat, FileCatalogSource};
pub use in_memory::{InMemoryCatalogSource, seed_catalog};
pub use traits::{CatalogError, CatalogResult, CatalogSource};
