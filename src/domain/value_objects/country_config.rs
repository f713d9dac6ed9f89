//! # Country Configuration
//!
//! Per-country pricing constants, passed to the engine at construction.
//!
//! # Examples
//!
//! ```
//! use tutto_quote::domain::value_objects::country_config::CountryTable;
//! use tutto_quote::domain::value_objects::Country;
//! use rust_decimal::Decimal;
//!
//! let table = CountryTable::default();
//! assert_eq!(table.get(Country::Argentina).minimum_charge(), Decimal::new(27999, 0));
//! assert!(!table.get(Country::Bolivia).location_required());
//! ```

use crate::domain::value_objects::enums::{Country, Currency, ServiceCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spend threshold that unlocks a category discount.
///
/// Fires when the category subtotal strictly exceeds `threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueThreshold {
    /// Category the threshold applies to.
    pub category: ServiceCategory,
    /// Subtotal that must be exceeded.
    pub threshold: Decimal,
    /// Discount fraction.
    pub pct: Decimal,
}

impl ValueThreshold {
    /// Creates a threshold.
    #[must_use]
    pub const fn new(category: ServiceCategory, threshold: Decimal, pct: Decimal) -> Self {
        Self {
            category,
            threshold,
            pct,
        }
    }
}

/// Pricing constants of a single country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryConfig {
    /// Currency label used in quotes.
    currency: Currency,
    /// Floor applied to the discounted price.
    minimum_charge: Decimal,
    /// Granularity of displayed price ranges.
    rounding_step: Decimal,
    /// Digit group separator for formatted amounts.
    thousands_separator: String,
    /// Whether a postal code or province and city must be given.
    location_required: bool,
    /// Opt-in spend thresholds.
    #[serde(default)]
    value_thresholds: Vec<ValueThreshold>,
}

impl CountryConfig {
    /// Built-in constants for Argentina.
    #[must_use]
    pub fn argentina() -> Self {
        Self {
            currency: Currency::Ars,
            minimum_charge: Decimal::new(27999, 0),
            rounding_step: Decimal::ONE_HUNDRED,
            thousands_separator: ".".to_string(),
            location_required: true,
            value_thresholds: vec![ValueThreshold::new(
                ServiceCategory::Carpets,
                Decimal::new(50000, 0),
                Decimal::new(8, 2),
            )],
        }
    }

    /// Built-in constants for Bolivia.
    #[must_use]
    pub fn bolivia() -> Self {
        Self {
            currency: Currency::Bs,
            minimum_charge: Decimal::new(140, 0),
            rounding_step: Decimal::ONE,
            thousands_separator: ".".to_string(),
            location_required: false,
            value_thresholds: vec![ValueThreshold::new(
                ServiceCategory::Carpets,
                Decimal::new(260, 0),
                Decimal::new(8, 2),
            )],
        }
    }

    /// Built-in constants for `country`.
    #[must_use]
    pub fn for_country(country: Country) -> Self {
        match country {
            Country::Argentina => Self::argentina(),
            Country::Bolivia => Self::bolivia(),
        }
    }

    /// Sets the minimum charge.
    #[must_use]
    pub fn with_minimum_charge(mut self, minimum_charge: Decimal) -> Self {
        self.minimum_charge = minimum_charge;
        self
    }

    /// Sets the rounding step.
    #[must_use]
    pub fn with_rounding_step(mut self, rounding_step: Decimal) -> Self {
        self.rounding_step = rounding_step;
        self
    }

    /// Sets the thousands separator.
    #[must_use]
    pub fn with_thousands_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousands_separator = separator.into();
        self
    }

    /// Sets whether a location is required.
    #[must_use]
    pub fn with_location_required(mut self, required: bool) -> Self {
        self.location_required = required;
        self
    }

    /// Replaces the value thresholds.
    #[must_use]
    pub fn with_value_thresholds(mut self, thresholds: Vec<ValueThreshold>) -> Self {
        self.value_thresholds = thresholds;
        self
    }

    /// Returns the currency.
    #[inline]
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the minimum charge.
    #[inline]
    #[must_use]
    pub const fn minimum_charge(&self) -> Decimal {
        self.minimum_charge
    }

    /// Returns the rounding step.
    #[inline]
    #[must_use]
    pub const fn rounding_step(&self) -> Decimal {
        self.rounding_step
    }

    /// Returns the thousands separator.
    #[inline]
    #[must_use]
    pub fn thousands_separator(&self) -> &str {
        &self.thousands_separator
    }

    /// Returns true if requests must carry a location.
    #[inline]
    #[must_use]
    pub const fn location_required(&self) -> bool {
        self.location_required
    }

    /// Returns the value thresholds.
    #[inline]
    #[must_use]
    pub fn value_thresholds(&self) -> &[ValueThreshold] {
        &self.value_thresholds
    }
}

/// Constants for every supported country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryTable {
    /// Argentina.
    #[serde(default = "CountryConfig::argentina")]
    pub ar: CountryConfig,
    /// Bolivia.
    #[serde(default = "CountryConfig::bolivia")]
    pub bo: CountryConfig,
}

impl CountryTable {
    /// Returns the constants of `country`.
    #[must_use]
    pub const fn get(&self, country: Country) -> &CountryConfig {
        match country {
            Country::Argentina => &self.ar,
            Country::Bolivia => &self.bo,
        }
    }
}

impl Default for CountryTable {
    fn default() -> Self {
        Self {
            ar: CountryConfig::argentina(),
            bo: CountryConfig::bolivia(),
        }
    }
}
