//! # Domain Layer
//!
//! Catalog model and the pure pricing pipeline.
//!
//! - [`value_objects`]: Countries, categories, identifiers and checked arithmetic
//! - [`entities`]: Catalog tables and quote request/response types
//! - [`services`]: Pipeline stages
//! - [`errors`]: Pricing failures

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
