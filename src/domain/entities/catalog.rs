//! # Catalog
//!
//! Immutable snapshot of the four tables the engine prices against.
//!
//! A catalog is replaced wholesale when its source is refreshed; nothing
//! mutates it while a quote is being computed.

use crate::domain::entities::discount_rule::DiscountRule;
use crate::domain::entities::service::Service;
use crate::domain::entities::zone::{PostalCodeRange, Zone};
use crate::domain::value_objects::{Country, ServiceId, ZoneId};
use serde::{Deserialize, Serialize};

/// Services, zones, postal codes and discount rules.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::entities::{Catalog, Zone};
/// use tutto_quote::domain::value_objects::Country;
///
/// let catalog = Catalog::default()
///     .with_zones(vec![Zone::new("CABA", Country::Argentina, "Buenos Aires", "CABA")]);
/// assert_eq!(catalog.zones_in(Country::Argentina).count(), 1);
/// assert_eq!(catalog.zones_in(Country::Bolivia).count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Sellable services and differential surcharges.
    #[serde(default)]
    services: Vec<Service>,
    /// Pricing zones.
    #[serde(default)]
    zones: Vec<Zone>,
    /// Postal code ranges, in match order.
    #[serde(default)]
    postal_codes: Vec<PostalCodeRange>,
    /// Dynamic discount rules.
    #[serde(default)]
    discount_rules: Vec<DiscountRule>,
}

impl Catalog {
    /// Creates a catalog from its tables.
    #[must_use]
    pub fn new(
        services: Vec<Service>,
        zones: Vec<Zone>,
        postal_codes: Vec<PostalCodeRange>,
        discount_rules: Vec<DiscountRule>,
    ) -> Self {
        Self {
            services,
            zones,
            postal_codes,
            discount_rules,
        }
    }

    /// Replaces the services table.
    #[must_use]
    pub fn with_services(mut self, services: Vec<Service>) -> Self {
        self.services = services;
        self
    }

    /// Replaces the zones table.
    #[must_use]
    pub fn with_zones(mut self, zones: Vec<Zone>) -> Self {
        self.zones = zones;
        self
    }

    /// Replaces the postal codes table.
    #[must_use]
    pub fn with_postal_codes(mut self, postal_codes: Vec<PostalCodeRange>) -> Self {
        self.postal_codes = postal_codes;
        self
    }

    /// Replaces the discount rules table.
    #[must_use]
    pub fn with_discount_rules(mut self, discount_rules: Vec<DiscountRule>) -> Self {
        self.discount_rules = discount_rules;
        self
    }

    /// Returns all services.
    #[inline]
    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Returns all zones.
    #[inline]
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Returns all postal code ranges.
    #[inline]
    #[must_use]
    pub fn postal_codes(&self) -> &[PostalCodeRange] {
        &self.postal_codes
    }

    /// Returns all discount rules.
    #[inline]
    #[must_use]
    pub fn discount_rules(&self) -> &[DiscountRule] {
        &self.discount_rules
    }

    /// Services sold in `country`, active or not.
    pub fn services_in(&self, country: Country) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(move |s| s.country() == country)
    }

    /// Zones of `country` in table order.
    pub fn zones_in(&self, country: Country) -> impl Iterator<Item = &Zone> {
        self.zones.iter().filter(move |z| z.country() == country)
    }

    /// Postal code ranges of `country` in table order.
    pub fn postal_codes_in(&self, country: Country) -> impl Iterator<Item = &PostalCodeRange> {
        self.postal_codes
            .iter()
            .filter(move |pc| pc.country() == country)
    }

    /// Finds a service of `country` by id, regardless of its active flag.
    #[must_use]
    pub fn find_service(&self, country: Country, id: &ServiceId) -> Option<&Service> {
        self.services_in(country).find(|s| s.id() == id)
    }

    /// Finds a zone of `country` by id.
    #[must_use]
    pub fn find_zone(&self, country: Country, id: &ZoneId) -> Option<&Zone> {
        self.zones_in(country).find(|z| z.zone_id() == id)
    }

    /// Returns true if every table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
            && self.zones.is_empty()
            && self.postal_codes.is_empty()
            && self.discount_rules.is_empty()
    }
}
