//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ServiceId`], [`ZoneId`]: String-based catalog keys
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe decimal operations
//! - [`Rounding`]: Rounding direction for range granularity
//!
//! ## Domain Enums
//!
//! - `Country`, `Currency`: Where a quote is priced and in what
//! - `ServiceCategory`, `PricingUnit`: How a service is grouped and priced
//! - `PaymentMethod`, `DiscountKind`, `RuleScope`: Discount inputs and outputs
//!
//! ## Configuration
//!
//! - [`CountryTable`]: Per-country currency, minimum charge and rounding

pub mod arithmetic;
pub mod country_config;
pub mod enums;
pub mod ids;
pub mod text;

pub use arithmetic::{
    ArithmeticError, ArithmeticResult, CheckedArithmetic, Rounding, checked_sum, round_to_step,
};
pub use country_config::{CountryConfig, CountryTable, ValueThreshold};
pub use enums::{
    Country, Currency, DiscountKind, ParseEnumError, PaymentMethod, PricingUnit, RuleScope,
    ServiceCategory,
};
pub use ids::{ServiceId, ZoneId};
