//! # Application Layer
//!
//! Use-case orchestration on top of the domain.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{PricingEngine, QuoteService};
