//! # Domain Enums
//!
//! Enumeration types for catalog and quote concepts.
//!
//! - [`Country`] - Countries the business operates in
//! - [`Currency`] - Currency label attached to prices
//! - [`ServiceCategory`] - Catalog grouping used by bundling and discounts
//! - [`PricingUnit`] - How a service's base price scales with quantity
//! - [`PaymentMethod`] - Payment method chosen by the customer
//! - [`DiscountKind`] - Which discount stage produced an applied discount
//! - [`RuleScope`] - Country scope of a dynamic discount rule
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use crate::domain::value_objects::text::normalize_label;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Country a quote is computed for.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::value_objects::enums::{Country, Currency};
///
/// assert_eq!(Country::Argentina.to_string(), "AR");
/// assert_eq!(Country::Bolivia.currency(), Currency::Bs);
/// assert_eq!("bo".parse::<Country>().unwrap(), Country::Bolivia);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Country {
    /// Argentina.
    #[serde(rename = "AR")]
    Argentina = 0,
    /// Bolivia.
    #[serde(rename = "BO")]
    Bolivia = 1,
}

impl Country {
    /// Returns the ISO 3166-1 alpha-2 code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Argentina => "AR",
            Self::Bolivia => "BO",
        }
    }

    /// Returns the currency prices are expressed in.
    #[inline]
    #[must_use]
    pub const fn currency(self) -> Currency {
        match self {
            Self::Argentina => Currency::Ars,
            Self::Bolivia => Currency::Bs,
        }
    }

    /// Returns the country's display name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Argentina => "Argentina",
            Self::Bolivia => "Bolivia",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AR" | "ARGENTINA" => Ok(Self::Argentina),
            "BO" | "BOLIVIA" => Ok(Self::Bolivia),
            _ => Err(ParseEnumError::InvalidValue("Country", s.to_string())),
        }
    }
}

/// Currency label for quoted amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Argentine peso.
    #[serde(rename = "ARS")]
    Ars,
    /// Bolivian boliviano.
    #[serde(rename = "Bs")]
    Bs,
}

impl Currency {
    /// Returns the label printed before amounts.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ars => "ARS",
            Self::Bs => "Bs",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Currency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ARS" => Ok(Self::Ars),
            "BS" | "BOB" => Ok(Self::Bs),
            _ => Err(ParseEnumError::InvalidValue("Currency", s.to_string())),
        }
    }
}

/// Catalog category of a service.
///
/// Categories drive two pricing rules: isolated vehicle items are bundled,
/// and vehicle aesthetics never receive general or zone discounts.
/// Discount rules name categories by their Spanish [`label`](Self::label).
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::value_objects::enums::ServiceCategory;
///
/// let cat: ServiceCategory = "vehiculos aislados".parse().unwrap();
/// assert_eq!(cat, ServiceCategory::IsolatedVehicleItems);
/// assert_eq!(cat.label(), "Vehículos Aislados");
/// assert!(ServiceCategory::VehicleAesthetics.is_excluded_from_general_discounts());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    /// Full vehicle interior plans.
    #[serde(alias = "Vehículos")]
    Vehicles,
    /// Vehicle interior components priced one by one.
    #[serde(alias = "Vehículos Aislados")]
    IsolatedVehicleItems,
    /// Engine washing, headlight polishing and similar.
    #[serde(alias = "Estética Vehicular")]
    VehicleAesthetics,
    /// Mattresses and box springs.
    #[serde(alias = "Colchones")]
    Mattresses,
    /// Sofas and armchairs.
    #[serde(alias = "Tapizados")]
    Upholstery,
    /// Dining and office chairs.
    #[serde(alias = "Sillas")]
    Chairs,
    /// Rugs and carpets, usually priced per square meter.
    #[serde(alias = "Alfombras")]
    Carpets,
    /// Strollers, car seats and other baby items.
    #[serde(alias = "Bebé")]
    Baby,
    /// Curtains.
    #[serde(alias = "Cortinas")]
    Curtains,
    /// Anything else, including differential surcharges.
    #[serde(alias = "Otros")]
    Other,
}

impl ServiceCategory {
    /// All categories in catalog order.
    pub const ALL: [Self; 10] = [
        Self::Vehicles,
        Self::IsolatedVehicleItems,
        Self::VehicleAesthetics,
        Self::Mattresses,
        Self::Upholstery,
        Self::Chairs,
        Self::Carpets,
        Self::Baby,
        Self::Curtains,
        Self::Other,
    ];

    /// Returns the customer-facing Spanish label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vehicles => "Vehículos",
            Self::IsolatedVehicleItems => "Vehículos Aislados",
            Self::VehicleAesthetics => "Estética Vehicular",
            Self::Mattresses => "Colchones",
            Self::Upholstery => "Tapizados",
            Self::Chairs => "Sillas",
            Self::Carpets => "Alfombras",
            Self::Baby => "Bebé",
            Self::Curtains => "Cortinas",
            Self::Other => "Otros",
        }
    }

    /// Returns true for items merged by the isolated-item bundling rule.
    #[inline]
    #[must_use]
    pub const fn is_isolated_vehicle_item(self) -> bool {
        matches!(self, Self::IsolatedVehicleItems)
    }

    /// Returns true for categories that general and zone discounts skip.
    #[inline]
    #[must_use]
    pub const fn is_excluded_from_general_discounts(self) -> bool {
        matches!(self, Self::VehicleAesthetics)
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s.trim()).replace('_', " ");
        Self::ALL
            .into_iter()
            .find(|cat| {
                normalize_label(cat.label()) == wanted
                    || format!("{cat:?}").to_lowercase() == wanted.replace(' ', "")
            })
            .ok_or_else(|| ParseEnumError::InvalidValue("ServiceCategory", s.to_string()))
    }
}

/// How a service's base price scales with the requested quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingUnit {
    /// Priced per piece (a sofa, a mattress).
    #[serde(alias = "pieza")]
    Piece,
    /// Priced per square meter with an optional minimum charge.
    #[serde(alias = "m2")]
    SquareMeter,
    /// Priced per unit (a vehicle plan).
    #[default]
    #[serde(alias = "unidad")]
    Unit,
}

impl PricingUnit {
    /// Returns true if the price is computed from an area.
    #[inline]
    #[must_use]
    pub const fn is_area(self) -> bool {
        matches!(self, Self::SquareMeter)
    }
}

impl fmt::Display for PricingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Piece => write!(f, "pieza"),
            Self::SquareMeter => write!(f, "m2"),
            Self::Unit => write!(f, "unidad"),
        }
    }
}

impl FromStr for PricingUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower.contains("m2") || lower.contains("metro") || lower == "square_meter" {
            Ok(Self::SquareMeter)
        } else if lower.contains("pieza") || lower == "piece" {
            Ok(Self::Piece)
        } else if lower.contains("unidad") || lower == "unit" {
            Ok(Self::Unit)
        } else {
            Err(ParseEnumError::InvalidValue("PricingUnit", s.to_string()))
        }
    }
}

/// Payment method chosen by the customer.
///
/// Dynamic category promotions only apply to cash or bank transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash or bank transfer.
    #[default]
    CashTransfer,
    /// Card or any other method.
    Other,
}

impl PaymentMethod {
    /// Returns true if promotions requiring cash or transfer apply.
    #[inline]
    #[must_use]
    pub const fn is_cash_transfer(self) -> bool {
        matches!(self, Self::CashTransfer)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CashTransfer => write!(f, "cash_transfer"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "cash_transfer" | "cash" | "transfer" => Ok(Self::CashTransfer),
            "other" | "card" => Ok(Self::Other),
            _ => Err(ParseEnumError::InvalidValue("PaymentMethod", s.to_string())),
        }
    }
}

/// Discount stage that produced an applied discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    /// Dynamic category promotion.
    Promo,
    /// Category spend above a value threshold.
    Value,
    /// Zone-wide general discount.
    ZoneGeneral,
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Promo => write!(f, "PROMO"),
            Self::Value => write!(f, "VALUE"),
            Self::ZoneGeneral => write!(f, "ZONE_GENERAL"),
        }
    }
}

/// Country scope of a dynamic discount rule.
///
/// Serialized as the country code or `"ALL"`.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::value_objects::enums::{Country, RuleScope};
///
/// let scope: RuleScope = "ALL".parse().unwrap();
/// assert!(scope.includes(Country::Bolivia));
/// assert!(!RuleScope::Country(Country::Argentina).includes(Country::Bolivia));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RuleScope {
    /// Applies in every country.
    All,
    /// Applies in one country.
    Country(Country),
}

impl RuleScope {
    /// Returns true if the rule applies to quotes for `country`.
    #[inline]
    #[must_use]
    pub fn includes(self, country: Country) -> bool {
        match self {
            Self::All => true,
            Self::Country(scoped) => scoped == country,
        }
    }
}

impl fmt::Display for RuleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "ALL"),
            Self::Country(country) => write!(f, "{country}"),
        }
    }
}

impl FromStr for RuleScope {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("ALL") {
            return Ok(Self::All);
        }
        s.parse::<Country>()
            .map(Self::Country)
            .map_err(|_| ParseEnumError::InvalidValue("RuleScope", s.to_string()))
    }
}

impl TryFrom<String> for RuleScope {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuleScope> for String {
    fn from(scope: RuleScope) -> Self {
        scope.to_string()
    }
}

impl From<Country> for RuleScope {
    fn from(country: Country) -> Self {
        Self::Country(country)
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod country {
        use super::*;

        #[test]
        fn codes_and_currency() {
            assert_eq!(Country::Argentina.code(), "AR");
            assert_eq!(Country::Argentina.currency(), Currency::Ars);
            assert_eq!(Country::Bolivia.code(), "BO");
            assert_eq!(Country::Bolivia.currency(), Currency::Bs);
        }

        #[test]
        fn from_str_works() {
            assert_eq!("AR".parse::<Country>().unwrap(), Country::Argentina);
            assert_eq!("argentina".parse::<Country>().unwrap(), Country::Argentina);
            assert!("CL".parse::<Country>().is_err());
        }

        #[test]
        fn serde_uses_codes() {
            let json = serde_json::to_string(&Country::Bolivia).unwrap();
            assert_eq!(json, "\"BO\"");
            let parsed: Country = serde_json::from_str("\"AR\"").unwrap();
            assert_eq!(parsed, Country::Argentina);
        }
    }

    mod currency {
        use super::*;

        #[test]
        fn labels() {
            assert_eq!(Currency::Ars.to_string(), "ARS");
            assert_eq!(Currency::Bs.to_string(), "Bs");
            assert_eq!(serde_json::to_string(&Currency::Bs).unwrap(), "\"Bs\"");
        }
    }

    mod service_category {
        use super::*;

        #[test]
        fn parses_spanish_labels_loosely() {
            assert_eq!(
                "Estetica vehicular".parse::<ServiceCategory>().unwrap(),
                ServiceCategory::VehicleAesthetics
            );
            assert_eq!("BEBE".parse::<ServiceCategory>().unwrap(), ServiceCategory::Baby);
        }

        #[test]
        fn parses_variant_names() {
            assert_eq!(
                "isolated_vehicle_items".parse::<ServiceCategory>().unwrap(),
                ServiceCategory::IsolatedVehicleItems
            );
            assert_eq!(
                "Upholstery".parse::<ServiceCategory>().unwrap(),
                ServiceCategory::Upholstery
            );
        }

        #[test]
        fn unknown_category_fails() {
            assert!("Electrodomésticos".parse::<ServiceCategory>().is_err());
        }

        #[test]
        fn serde_accepts_label_alias() {
            let parsed: ServiceCategory = serde_json::from_str("\"Tapizados\"").unwrap();
            assert_eq!(parsed, ServiceCategory::Upholstery);
            let json = serde_json::to_string(&ServiceCategory::Upholstery).unwrap();
            assert_eq!(json, "\"upholstery\"");
        }

        #[test]
        fn only_aesthetics_excluded() {
            let excluded: Vec<_> = ServiceCategory::ALL
                .into_iter()
                .filter(|c| c.is_excluded_from_general_discounts())
                .collect();
            assert_eq!(excluded, vec![ServiceCategory::VehicleAesthetics]);
        }
    }

    mod pricing_unit {
        use super::*;

        #[test]
        fn from_str_matches_spreadsheet_spellings() {
            assert_eq!("m2".parse::<PricingUnit>().unwrap(), PricingUnit::SquareMeter);
            assert_eq!(
                "Por metro cuadrado".parse::<PricingUnit>().unwrap(),
                PricingUnit::SquareMeter
            );
            assert_eq!("pieza".parse::<PricingUnit>().unwrap(), PricingUnit::Piece);
            assert_eq!("unidad".parse::<PricingUnit>().unwrap(), PricingUnit::Unit);
            assert!("kg".parse::<PricingUnit>().is_err());
        }

        #[test]
        fn only_square_meter_is_area() {
            assert!(PricingUnit::SquareMeter.is_area());
            assert!(!PricingUnit::Piece.is_area());
        }
    }

    mod payment_method {
        use super::*;

        #[test]
        fn serde_roundtrip() {
            let json = serde_json::to_string(&PaymentMethod::CashTransfer).unwrap();
            assert_eq!(json, "\"cash_transfer\"");
            let parsed: PaymentMethod = serde_json::from_str("\"other\"").unwrap();
            assert_eq!(parsed, PaymentMethod::Other);
        }

        #[test]
        fn from_str_accepts_dashes() {
            assert_eq!(
                "cash-transfer".parse::<PaymentMethod>().unwrap(),
                PaymentMethod::CashTransfer
            );
        }
    }

    mod rule_scope {
        use super::*;

        #[test]
        fn all_includes_every_country() {
            assert!(RuleScope::All.includes(Country::Argentina));
            assert!(RuleScope::All.includes(Country::Bolivia));
        }

        #[test]
        fn serde_as_string() {
            let json = serde_json::to_string(&RuleScope::Country(Country::Argentina)).unwrap();
            assert_eq!(json, "\"AR\"");
            let parsed: RuleScope = serde_json::from_str("\"ALL\"").unwrap();
            assert_eq!(parsed, RuleScope::All);
            assert!(serde_json::from_str::<RuleScope>("\"XX\"").is_err());
        }
    }

    mod discount_kind {
        use super::*;

        #[test]
        fn display_matches_serde() {
            for kind in [DiscountKind::Promo, DiscountKind::Value, DiscountKind::ZoneGeneral] {
                let json = serde_json::to_string(&kind).unwrap();
                assert_eq!(json, format!("\"{kind}\""));
            }
        }
    }
}
