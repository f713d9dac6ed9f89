//! # Service Entity
//!
//! A sellable cleaning service from the catalog.
//!
//! # Examples
//!
//! ```
//! use tutto_quote::domain::entities::Service;
//! use tutto_quote::domain::value_objects::{Country, PricingUnit, ServiceCategory};
//! use rust_decimal::Decimal;
//!
//! let carpet = Service::new(
//!     "alfombra_corto_ar",
//!     Country::Argentina,
//!     "Alfombras",
//!     "Pelo Corto",
//!     ServiceCategory::Carpets,
//!     PricingUnit::SquareMeter,
//!     Decimal::ZERO,
//! )
//! .with_rate_per_m2(Decimal::new(8000, 0));
//!
//! assert!(carpet.unit().is_area());
//! assert_eq!(carpet.rate_per_m2(), Some(Decimal::new(8000, 0)));
//! ```

use crate::domain::value_objects::{Country, Currency, PricingUnit, ServiceCategory, ServiceId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_active() -> bool {
    true
}

/// A sellable unit of the catalog.
///
/// # Invariants
///
/// - `SquareMeter` services are priced from `rate_per_m2` and `min_charge`;
///   every other unit uses `base_price` per unit.
/// - Immutable for the duration of a quote calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Unique service key.
    id: ServiceId,
    /// Country the service is sold in.
    country: Country,
    /// Currency label; defaults to the country's currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<Currency>,
    /// Group name, e.g. `Auto Standard`.
    group: String,
    /// Specific item name, e.g. `Plan Básico`.
    sub_name: String,
    /// Catalog category.
    category: ServiceCategory,
    /// Pricing unit.
    #[serde(default)]
    unit: PricingUnit,
    /// Per-unit price.
    #[serde(default)]
    base_price: Decimal,
    /// Price per square meter for area-priced services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rate_per_m2: Option<Decimal>,
    /// Minimum charge for area-priced services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_charge: Option<Decimal>,
    /// Differential surcharge service used when isolated items are bundled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    differential_id: Option<ServiceId>,
    /// Free-form notes from the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    /// Whether the service can be quoted.
    #[serde(default = "default_active")]
    active: bool,
}

impl Service {
    /// Creates a new active service.
    #[must_use]
    pub fn new(
        id: impl Into<ServiceId>,
        country: Country,
        group: impl Into<String>,
        sub_name: impl Into<String>,
        category: ServiceCategory,
        unit: PricingUnit,
        base_price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            country,
            currency: None,
            group: group.into(),
            sub_name: sub_name.into(),
            category,
            unit,
            base_price,
            rate_per_m2: None,
            min_charge: None,
            differential_id: None,
            notes: None,
            active: true,
        }
    }

    /// Sets the per-square-meter rate.
    #[must_use]
    pub fn with_rate_per_m2(mut self, rate: Decimal) -> Self {
        self.rate_per_m2 = Some(rate);
        self
    }

    /// Sets the minimum charge for area pricing.
    #[must_use]
    pub fn with_min_charge(mut self, min_charge: Decimal) -> Self {
        self.min_charge = Some(min_charge);
        self
    }

    /// Links the service to a differential surcharge service.
    #[must_use]
    pub fn with_differential(mut self, differential_id: impl Into<ServiceId>) -> Self {
        self.differential_id = Some(differential_id.into());
        self
    }

    /// Sets catalog notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Overrides the currency label.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Returns a copy with a different item name.
    ///
    /// Used to label a bundled line with the names of the items it replaces.
    #[must_use]
    pub fn renamed(&self, sub_name: impl Into<String>) -> Self {
        Self {
            sub_name: sub_name.into(),
            ..self.clone()
        }
    }

    /// Returns the service id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ServiceId {
        &self.id
    }

    /// Returns the country.
    #[inline]
    #[must_use]
    pub const fn country(&self) -> Country {
        self.country
    }

    /// Returns the currency label.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency.unwrap_or(self.country.currency())
    }

    /// Returns the group name.
    #[inline]
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns the item name.
    #[inline]
    #[must_use]
    pub fn sub_name(&self) -> &str {
        &self.sub_name
    }

    /// Returns the category.
    #[inline]
    #[must_use]
    pub const fn category(&self) -> ServiceCategory {
        self.category
    }

    /// Returns the pricing unit.
    #[inline]
    #[must_use]
    pub const fn unit(&self) -> PricingUnit {
        self.unit
    }

    /// Returns the per-unit price.
    #[inline]
    #[must_use]
    pub const fn base_price(&self) -> Decimal {
        self.base_price
    }

    /// Returns the per-square-meter rate.
    #[inline]
    #[must_use]
    pub const fn rate_per_m2(&self) -> Option<Decimal> {
        self.rate_per_m2
    }

    /// Returns the minimum charge for area pricing.
    #[inline]
    #[must_use]
    pub const fn min_charge(&self) -> Option<Decimal> {
        self.min_charge
    }

    /// Returns the linked differential service, if any.
    #[inline]
    #[must_use]
    pub fn differential_id(&self) -> Option<&ServiceId> {
        self.differential_id.as_ref()
    }

    /// Returns catalog notes.
    #[inline]
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns true if the service can be quoted.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.group, self.sub_name, self.id)
    }
}
