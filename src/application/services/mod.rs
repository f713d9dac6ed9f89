//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`PricingEngine`]: runs the quote pipeline over a catalog snapshot
//! - [`QuoteService`]: owns the live catalog, validates requests and guards
//!   against overlapping calculations

pub mod pricing_engine;
pub mod quote_service;

pub use pricing_engine::PricingEngine;
pub use quote_service::QuoteService;
