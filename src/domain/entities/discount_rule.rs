//! # Discount Rule Entity
//!
//! Externally configured category promotions.
//!
//! A rule targets a category by its label (compared without accents or
//! case) or the literal `general`, which targets every category except
//! vehicle aesthetics. It fires when the summed quantity of matching lines
//! reaches `min_qty`.

use crate::domain::value_objects::text::{labels_match, normalize_label, percent_label};
use crate::domain::value_objects::{Country, RuleScope, ServiceCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category name that targets all discountable categories.
pub const GENERAL_CATEGORY: &str = "general";

fn default_active() -> bool {
    true
}

/// A dynamic promotional rule.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::entities::DiscountRule;
/// use tutto_quote::domain::value_objects::{Country, RuleScope, ServiceCategory};
/// use rust_decimal::Decimal;
///
/// let rule = DiscountRule::new(RuleScope::All, "Sillas", Decimal::new(6, 0), Decimal::new(15, 2));
/// assert!(rule.applies_to(Country::Bolivia));
/// assert!(rule.targets(ServiceCategory::Chairs));
/// assert!(!rule.targets(ServiceCategory::Upholstery));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRule {
    /// Country scope, or `ALL`.
    scope: RuleScope,
    /// Target category label or `general`.
    category: String,
    /// Minimum summed quantity of matching lines.
    min_qty: Decimal,
    /// Discount fraction.
    discount_pct: Decimal,
    /// Whether the rule is enabled.
    #[serde(default = "default_active")]
    active: bool,
    /// Customer-facing description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl DiscountRule {
    /// Creates an active rule without description.
    #[must_use]
    pub fn new(
        scope: impl Into<RuleScope>,
        category: impl Into<String>,
        min_qty: Decimal,
        discount_pct: Decimal,
    ) -> Self {
        Self {
            scope: scope.into(),
            category: category.into(),
            min_qty,
            discount_pct,
            active: true,
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Returns true if the rule is active and in scope for `country`.
    #[must_use]
    pub fn applies_to(&self, country: Country) -> bool {
        self.active && self.scope.includes(country)
    }

    /// Returns true if the rule targets every discountable category.
    #[must_use]
    pub fn is_general(&self) -> bool {
        normalize_label(&self.category) == GENERAL_CATEGORY
    }

    /// Returns true if lines of `category` count towards this rule.
    #[must_use]
    pub fn targets(&self, category: ServiceCategory) -> bool {
        if self.is_general() {
            !category.is_excluded_from_general_discounts()
        } else {
            labels_match(category.label(), &self.category)
        }
    }

    /// Returns the description, or `"<pct>% OFF en <category>"`.
    #[must_use]
    pub fn display_description(&self) -> String {
        match self.description.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(description) => description.to_string(),
            None => format!(
                "{}% OFF en {}",
                percent_label(self.discount_pct),
                self.category
            ),
        }
    }

    /// Returns the scope.
    #[inline]
    #[must_use]
    pub const fn scope(&self) -> RuleScope {
        self.scope
    }

    /// Returns the target category as written.
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the quantity threshold.
    #[inline]
    #[must_use]
    pub const fn min_qty(&self) -> Decimal {
        self.min_qty
    }

    /// Returns the discount fraction.
    #[inline]
    #[must_use]
    pub const fn discount_pct(&self) -> Decimal {
        self.discount_pct
    }

    /// Returns true if the rule is enabled.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the configured description.
    #[inline]
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn general_rule_skips_aesthetics() {
        let rule = DiscountRule::new(RuleScope::All, "GENERAL", Decimal::TWO, Decimal::new(10, 2));
        assert!(rule.is_general());
        assert!(rule.targets(ServiceCategory::Mattresses));
        assert!(rule.targets(ServiceCategory::IsolatedVehicleItems));
        assert!(!rule.targets(ServiceCategory::VehicleAesthetics));
    }

    #[test]
    fn category_match_ignores_accents() {
        let rule = DiscountRule::new(
            Country::Argentina,
            "bebe",
            Decimal::TWO,
            Decimal::new(20, 2),
        );
        assert!(rule.targets(ServiceCategory::Baby));
        assert!(!rule.targets(ServiceCategory::Mattresses));
    }

    #[test]
    fn inactive_rule_never_applies() {
        let rule = DiscountRule::new(RuleScope::All, "Sillas", Decimal::ONE, Decimal::new(5, 2))
            .with_active(false);
        assert!(!rule.applies_to(Country::Argentina));
    }

    #[test]
    fn scoped_rule_applies_to_its_country() {
        let rule = DiscountRule::new(Country::Bolivia, "Sillas", Decimal::ONE, Decimal::new(5, 2));
        assert!(rule.applies_to(Country::Bolivia));
        assert!(!rule.applies_to(Country::Argentina));
    }

    #[test]
    fn generated_description() {
        let rule = DiscountRule::new(RuleScope::All, "Tapizados", Decimal::TWO, Decimal::new(15, 2));
        assert_eq!(rule.display_description(), "15% OFF en Tapizados");
        let rule = rule.with_description("Promo Juego de Sillones");
        assert_eq!(rule.display_description(), "Promo Juego de Sillones");
    }

    #[test]
    fn deserializes_scope_string() {
        let json = r#"{"scope":"ALL","category":"Colchones","min_qty":2,"discount_pct":"0.1"}"#;
        let rule: DiscountRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.scope(), RuleScope::All);
        assert!(rule.is_active());
        assert_eq!(rule.discount_pct(), Decimal::new(1, 1));
    }
}
