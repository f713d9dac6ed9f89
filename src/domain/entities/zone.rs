//! # Zone Entity
//!
//! Geographic pricing regions and the postal code ranges that map to them.

use crate::domain::value_objects::text::leading_integer;
use crate::domain::value_objects::{Country, ZoneId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zone id used for Bolivian quotes without a resolvable location.
pub const BOLIVIA_GENERAL_ZONE_ID: &str = "BOLIVIA_GENERAL";

/// City label of the synthetic Bolivian zone.
pub const GENERAL_CITY: &str = "General";

fn default_active() -> bool {
    true
}

/// A geographic pricing region.
///
/// # Invariants
///
/// - `zone_id` is unique per country.
/// - `general_discount_pct` is a fraction; the admin editor keeps it within
///   `0..=0.30`, the engine does not re-check it.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::entities::Zone;
/// use tutto_quote::domain::value_objects::Country;
/// use rust_decimal::Decimal;
///
/// let zone = Zone::new("MAR_DEL_PLATA", Country::Argentina, "Buenos Aires", "Mar del Plata")
///     .with_general_discount(Decimal::new(10, 2));
/// assert!(zone.has_general_discount());
/// assert!(zone.matches_location("buenos aires", "MAR DEL PLATA"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone key.
    zone_id: ZoneId,
    /// Country.
    country: Country,
    /// Province name.
    province: String,
    /// City name.
    city: String,
    /// Discount fraction applied to eligible items.
    #[serde(default)]
    general_discount_pct: Decimal,
    /// Whether quotes may be issued for this zone.
    #[serde(default = "default_active")]
    active: bool,
    /// Operator assigned to the zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    operator_name: Option<String>,
}

impl Zone {
    /// Creates an active zone without discount.
    #[must_use]
    pub fn new(
        zone_id: impl Into<ZoneId>,
        country: Country,
        province: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            country,
            province: province.into(),
            city: city.into(),
            general_discount_pct: Decimal::ZERO,
            active: true,
            operator_name: None,
        }
    }

    /// The in-memory zone used for Bolivia when no location resolves.
    ///
    /// It is never persisted.
    #[must_use]
    pub fn bolivia_general() -> Self {
        Self::new(
            BOLIVIA_GENERAL_ZONE_ID,
            Country::Bolivia,
            Country::Bolivia.name(),
            GENERAL_CITY,
        )
    }

    /// Sets the general discount fraction.
    #[must_use]
    pub fn with_general_discount(mut self, pct: Decimal) -> Self {
        self.general_discount_pct = pct;
        self
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Assigns an operator.
    #[must_use]
    pub fn with_operator(mut self, name: impl Into<String>) -> Self {
        self.operator_name = Some(name.into());
        self
    }

    /// Returns true if province and city match, ignoring ASCII and Unicode case.
    ///
    /// No trimming or accent folding is applied.
    #[must_use]
    pub fn matches_location(&self, province: &str, city: &str) -> bool {
        self.province.to_lowercase() == province.to_lowercase()
            && self.city.to_lowercase() == city.to_lowercase()
    }

    /// Returns the label used in quote summaries.
    ///
    /// The synthetic Bolivian zone reads as the country name.
    #[must_use]
    pub fn location_label(&self) -> &str {
        if self.city == GENERAL_CITY {
            self.country.name()
        } else {
            &self.city
        }
    }

    /// Returns the zone key.
    #[inline]
    #[must_use]
    pub fn zone_id(&self) -> &ZoneId {
        &self.zone_id
    }

    /// Returns the country.
    #[inline]
    #[must_use]
    pub const fn country(&self) -> Country {
        self.country
    }

    /// Returns the province.
    #[inline]
    #[must_use]
    pub fn province(&self) -> &str {
        &self.province
    }

    /// Returns the city.
    #[inline]
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the general discount fraction.
    #[inline]
    #[must_use]
    pub const fn general_discount_pct(&self) -> Decimal {
        self.general_discount_pct
    }

    /// Returns true if the zone grants a general discount.
    #[inline]
    #[must_use]
    pub fn has_general_discount(&self) -> bool {
        self.general_discount_pct > Decimal::ZERO
    }

    /// Returns true if quotes may be issued.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the assigned operator.
    #[inline]
    #[must_use]
    pub fn operator_name(&self) -> Option<&str> {
        self.operator_name.as_deref()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.zone_id, self.city, self.province)
    }
}

/// A postal code range mapped to a zone.
///
/// Bounds are numeric strings. Ranges may overlap; callers take the first
/// match in table order.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::entities::PostalCodeRange;
/// use tutto_quote::domain::value_objects::Country;
///
/// let caba = PostalCodeRange::new(Country::Argentina, "1000", "1499", "CABA");
/// assert!(caba.contains(1414));
/// assert!(!caba.contains(1500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCodeRange {
    /// Country.
    country: Country,
    /// Lower bound, inclusive.
    cp_from: String,
    /// Upper bound, inclusive.
    cp_to: String,
    /// Zone the range maps to.
    zone_id: ZoneId,
}

impl PostalCodeRange {
    /// Creates a new range.
    #[must_use]
    pub fn new(
        country: Country,
        cp_from: impl Into<String>,
        cp_to: impl Into<String>,
        zone_id: impl Into<ZoneId>,
    ) -> Self {
        Self {
            country,
            cp_from: cp_from.into(),
            cp_to: cp_to.into(),
            zone_id: zone_id.into(),
        }
    }

    /// Returns true if `code` lies within the bounds.
    ///
    /// Ranges whose bounds do not parse as integers never match.
    #[must_use]
    pub fn contains(&self, code: u64) -> bool {
        match (leading_integer(&self.cp_from), leading_integer(&self.cp_to)) {
            (Some(from), Some(to)) => (from..=to).contains(&code),
            _ => false,
        }
    }

    /// Returns the country.
    #[inline]
    #[must_use]
    pub const fn country(&self) -> Country {
        self.country
    }

    /// Returns the lower bound as written.
    #[inline]
    #[must_use]
    pub fn cp_from(&self) -> &str {
        &self.cp_from
    }

    /// Returns the upper bound as written.
    #[inline]
    #[must_use]
    pub fn cp_to(&self) -> &str {
        &self.cp_to
    }

    /// Returns the target zone.
    #[inline]
    #[must_use]
    pub fn zone_id(&self) -> &ZoneId {
        &self.zone_id
    }
}
