//! # Domain Entities
//!
//! Catalog records and the quote request/response model.
//!
//! ## Catalog
//!
//! - [`Service`]: A sellable cleaning service
//! - [`Zone`], [`PostalCodeRange`]: Pricing regions and how to find them
//! - [`DiscountRule`]: Dynamic category promotion
//! - [`Catalog`]: Snapshot of all four tables
//!
//! ## Quotes
//!
//! - [`QuoteInput`]: What the customer asked for
//! - [`QuoteResult`]: What the engine computed

pub mod catalog;
pub mod discount_rule;
pub mod quote;
pub mod service;
pub mod zone;

pub use catalog::Catalog;
pub use discount_rule::{DiscountRule, GENERAL_CATEGORY};
pub use quote::{AppliedDiscount, LineItem, QuoteDetail, QuoteInput, QuoteItem, QuoteResult};
pub use service::Service;
pub use zone::{BOLIVIA_GENERAL_ZONE_ID, PostalCodeRange, Zone};
