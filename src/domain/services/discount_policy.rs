//! # Discount Policies
//!
//! A quote receives at most one discount. Candidate discounts are modelled
//! as an ordered chain of [`DiscountPolicy`] implementations evaluated by a
//! [`DiscountSelector`]; the first policy that produces an outcome wins.
//!
//! | Policy | Kind | Condition |
//! |--------|------|-----------|
//! | [`CategoryRulePolicy`] | `PROMO` | cash/transfer and a rule's quantity threshold is met |
//! | [`ValueThresholdPolicy`] | `VALUE` | a category subtotal exceeds its country threshold |
//! | [`ZoneDiscountPolicy`] | `ZONE_GENERAL` | the zone grants a general discount |
//!
//! [`DiscountSelector::standard`] chains promotions and zone discounts.
//! [`DiscountSelector::with_value_thresholds`] inserts the value stage
//! between them.

use crate::domain::entities::{AppliedDiscount, DiscountRule, LineItem, Zone};
use crate::domain::value_objects::text::percent_label;
use crate::domain::value_objects::{
    ArithmeticResult, CheckedArithmetic, Country, CountryConfig, DiscountKind, PaymentMethod,
    checked_sum,
};
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

/// Inputs shared by every discount policy.
#[derive(Debug, Clone, Copy)]
pub struct DiscountContext<'a> {
    /// Country of the quote.
    pub country: Country,
    /// Payment method of the quote.
    pub payment_method: PaymentMethod,
    /// Priced lines after bundling.
    pub lines: &'a [LineItem],
    /// Sum of `lines`.
    pub workload_subtotal: Decimal,
    /// Resolved zone.
    pub zone: &'a Zone,
    /// Dynamic discount rules of the catalog, unfiltered.
    pub rules: &'a [DiscountRule],
    /// Constants of `country`.
    pub country_config: &'a CountryConfig,
}

impl DiscountContext<'_> {
    /// Sum of the base prices of lines accepted by `filter`.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on decimal overflow.
    pub fn subtotal_where<F>(&self, filter: F) -> ArithmeticResult<Decimal>
    where
        F: Fn(&LineItem) -> bool,
    {
        checked_sum(
            self.lines
                .iter()
                .filter(|&line| filter(line))
                .map(|line| line.base_price),
        )
    }
}

/// A discount chosen by a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountOutcome {
    /// The discount record.
    pub discount: AppliedDiscount,
    /// Subtotal after the discount.
    pub price_after_discount: Decimal,
}

/// A stage of the discount chain.
pub trait DiscountPolicy: Send + Sync + fmt::Debug {
    /// Returns the discount this policy grants, if any.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on decimal overflow.
    fn evaluate(&self, ctx: &DiscountContext<'_>) -> ArithmeticResult<Option<DiscountOutcome>>;

    /// Returns the policy name, for logs.
    fn name(&self) -> &'static str;
}

/// Dynamic category rules from the catalog.
///
/// Only for cash or transfer payments. Rules in scope are tried by
/// descending discount, ties kept in table order; the first rule whose
/// summed quantity reaches `min_qty` applies to the subtotal of its lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRulePolicy;

impl DiscountPolicy for CategoryRulePolicy {
    fn evaluate(&self, ctx: &DiscountContext<'_>) -> ArithmeticResult<Option<DiscountOutcome>> {
        if !ctx.payment_method.is_cash_transfer() {
            return Ok(None);
        }

        let mut rules: Vec<&DiscountRule> = ctx
            .rules
            .iter()
            .filter(|rule| rule.applies_to(ctx.country))
            .collect();
        rules.sort_by(|a, b| b.discount_pct().cmp(&a.discount_pct()));

        for rule in rules {
            let matching = |line: &LineItem| rule.targets(line.service.category());
            let count = checked_sum(
                ctx.lines
                    .iter()
                    .filter(|&line| matching(line))
                    .map(|line| line.quantity),
            )?;
            if count < rule.min_qty() {
                continue;
            }

            let amount = ctx.subtotal_where(matching)?.safe_mul(rule.discount_pct())?;
            return Ok(Some(DiscountOutcome {
                discount: AppliedDiscount {
                    kind: DiscountKind::Promo,
                    description: rule.display_description(),
                    amount,
                    pct: rule.discount_pct(),
                },
                price_after_discount: ctx.workload_subtotal.safe_sub(amount)?,
            }));
        }
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "category_rules"
    }
}

/// Spend thresholds configured per country and category.
///
/// Applies regardless of payment method. Thresholds are tried in
/// configuration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueThresholdPolicy;

impl DiscountPolicy for ValueThresholdPolicy {
    fn evaluate(&self, ctx: &DiscountContext<'_>) -> ArithmeticResult<Option<DiscountOutcome>> {
        for threshold in ctx.country_config.value_thresholds() {
            let subtotal =
                ctx.subtotal_where(|line| line.service.category() == threshold.category)?;
            if subtotal <= threshold.threshold {
                continue;
            }

            let amount = subtotal.safe_mul(threshold.pct)?;
            return Ok(Some(DiscountOutcome {
                discount: AppliedDiscount {
                    kind: DiscountKind::Value,
                    description: format!(
                        "{}% OFF por monto en {}",
                        percent_label(threshold.pct),
                        threshold.category.label()
                    ),
                    amount,
                    pct: threshold.pct,
                },
                price_after_discount: ctx.workload_subtotal.safe_sub(amount)?,
            }));
        }
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "value_thresholds"
    }
}

/// General discount of the resolved zone.
///
/// Vehicle aesthetics lines are charged in full. The discount is recorded
/// whenever the zone grants one, even if it amounts to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneDiscountPolicy;

impl DiscountPolicy for ZoneDiscountPolicy {
    fn evaluate(&self, ctx: &DiscountContext<'_>) -> ArithmeticResult<Option<DiscountOutcome>> {
        if !ctx.zone.has_general_discount() {
            return Ok(None);
        }

        let pct = ctx.zone.general_discount_pct();
        let eligible = ctx.subtotal_where(|line| {
            !line.service.category().is_excluded_from_general_discounts()
        })?;
        let ineligible = ctx.workload_subtotal.safe_sub(eligible)?;
        let amount = eligible.safe_mul(pct)?;

        Ok(Some(DiscountOutcome {
            discount: AppliedDiscount {
                kind: DiscountKind::ZoneGeneral,
                description: format!("{}% Descuento General Zona", percent_label(pct)),
                amount,
                pct,
            },
            price_after_discount: eligible.safe_sub(amount)?.safe_add(ineligible)?,
        }))
    }

    fn name(&self) -> &'static str {
        "zone_general"
    }
}

/// Ordered chain of discount policies.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::services::discount_policy::DiscountSelector;
///
/// assert_eq!(DiscountSelector::standard().policy_names(), vec!["category_rules", "zone_general"]);
/// assert_eq!(
///     DiscountSelector::with_value_thresholds().policy_names(),
///     vec!["category_rules", "value_thresholds", "zone_general"],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DiscountSelector {
    policies: Vec<Arc<dyn DiscountPolicy>>,
}

impl DiscountSelector {
    /// Creates a selector evaluating `policies` in order.
    #[must_use]
    pub fn new(policies: Vec<Arc<dyn DiscountPolicy>>) -> Self {
        Self { policies }
    }

    /// Promotions, then zone discount.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Arc::new(CategoryRulePolicy),
            Arc::new(ZoneDiscountPolicy),
        ])
    }

    /// Promotions, then value thresholds, then zone discount.
    #[must_use]
    pub fn with_value_thresholds() -> Self {
        Self::new(vec![
            Arc::new(CategoryRulePolicy),
            Arc::new(ValueThresholdPolicy),
            Arc::new(ZoneDiscountPolicy),
        ])
    }

    /// Returns the policy names in evaluation order.
    #[must_use]
    pub fn policy_names(&self) -> Vec<&'static str> {
        self.policies.iter().map(|p| p.name()).collect()
    }

    /// Returns the outcome of the first policy that grants a discount.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on decimal overflow.
    pub fn select(&self, ctx: &DiscountContext<'_>) -> ArithmeticResult<Option<DiscountOutcome>> {
        for policy in &self.policies {
            if let Some(outcome) = policy.evaluate(ctx)? {
                tracing::debug!(
                    policy = policy.name(),
                    amount = %outcome.discount.amount,
                    "discount selected"
                );
                return Ok(Some(outcome));
            }
        }
        Ok(None)
    }
}

impl Default for DiscountSelector {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::Service;
    use crate::domain::value_objects::{PricingUnit, RuleScope, ServiceCategory};

    fn line(category: ServiceCategory, qty: i64, price: i64) -> LineItem {
        let service = Service::new(
            format!("{category:?}"),
            Country::Argentina,
            category.label(),
            category.label(),
            category,
            PricingUnit::Piece,
            Decimal::new(price, 0),
        );
        LineItem::new(service, Decimal::new(qty, 0), Decimal::new(price * qty, 0))
    }

    fn pct(hundredths: i64) -> Decimal {
        Decimal::new(hundredths, 2)
    }

    struct Fixture {
        lines: Vec<LineItem>,
        zone: Zone,
        rules: Vec<DiscountRule>,
        config: CountryConfig,
        payment: PaymentMethod,
    }

    impl Fixture {
        fn new(lines: Vec<LineItem>) -> Self {
            Self {
                lines,
                zone: Zone::new("CABA", Country::Argentina, "Buenos Aires", "CABA"),
                rules: Vec::new(),
                config: CountryConfig::argentina(),
                payment: PaymentMethod::CashTransfer,
            }
        }

        fn ctx(&self) -> DiscountContext<'_> {
            DiscountContext {
                country: Country::Argentina,
                payment_method: self.payment,
                lines: &self.lines,
                workload_subtotal: checked_sum(self.lines.iter().map(|l| l.base_price)).unwrap(),
                zone: &self.zone,
                rules: &self.rules,
                country_config: &self.config,
            }
        }
    }

    mod category_rules {
        use super::*;

        #[test]
        fn fires_on_summed_quantity() {
            let mut f = Fixture::new(vec![
                line(ServiceCategory::Chairs, 4, 10000),
                line(ServiceCategory::Chairs, 2, 10000),
                line(ServiceCategory::Mattresses, 1, 30000),
            ]);
            f.rules = vec![DiscountRule::new(RuleScope::All, "Sillas", Decimal::new(6, 0), pct(15))];
            let outcome = CategoryRulePolicy.evaluate(&f.ctx()).unwrap().unwrap();
            assert_eq!(outcome.discount.kind, DiscountKind::Promo);
            assert_eq!(outcome.discount.amount, Decimal::new(9000, 0));
            assert_eq!(outcome.price_after_discount, Decimal::new(81000, 0));
            assert_eq!(outcome.discount.description, "15% OFF en Sillas");
        }

        #[test]
        fn below_threshold_does_not_fire() {
            let mut f = Fixture::new(vec![line(ServiceCategory::Chairs, 5, 10000)]);
            f.rules = vec![DiscountRule::new(RuleScope::All, "Sillas", Decimal::new(6, 0), pct(15))];
            assert!(CategoryRulePolicy.evaluate(&f.ctx()).unwrap().is_none());
        }

        #[test]
        fn highest_discount_wins() {
            let mut f = Fixture::new(vec![line(ServiceCategory::Mattresses, 2, 40000)]);
            f.rules = vec![
                DiscountRule::new(RuleScope::All, "general", Decimal::TWO, pct(5)),
                DiscountRule::new(Country::Argentina, "Colchones", Decimal::TWO, pct(10)),
            ];
            let outcome = CategoryRulePolicy.evaluate(&f.ctx()).unwrap().unwrap();
            assert_eq!(outcome.discount.pct, pct(10));
        }

        #[test]
        fn ties_keep_table_order() {
            let mut f = Fixture::new(vec![line(ServiceCategory::Mattresses, 2, 40000)]);
            f.rules = vec![
                DiscountRule::new(RuleScope::All, "general", Decimal::TWO, pct(10))
                    .with_description("first"),
                DiscountRule::new(RuleScope::All, "Colchones", Decimal::TWO, pct(10))
                    .with_description("second"),
            ];
            let outcome = CategoryRulePolicy.evaluate(&f.ctx()).unwrap().unwrap();
            assert_eq!(outcome.discount.description, "first");
        }

        #[test]
        fn general_rule_excludes_aesthetics() {
            let mut f = Fixture::new(vec![
                line(ServiceCategory::VehicleAesthetics, 1, 40000),
                line(ServiceCategory::Mattresses, 1, 30000),
            ]);
            f.rules = vec![DiscountRule::new(RuleScope::All, "GENERAL", Decimal::ONE, pct(10))];
            let outcome = CategoryRulePolicy.evaluate(&f.ctx()).unwrap().unwrap();
            assert_eq!(outcome.discount.amount, Decimal::new(3000, 0));
            assert_eq!(outcome.price_after_discount, Decimal::new(67000, 0));
        }

        #[test]
        fn other_payment_skips_rules() {
            let mut f = Fixture::new(vec![line(ServiceCategory::Chairs, 6, 10000)]);
            f.rules = vec![DiscountRule::new(RuleScope::All, "Sillas", Decimal::ONE, pct(15))];
            f.payment = PaymentMethod::Other;
            assert!(CategoryRulePolicy.evaluate(&f.ctx()).unwrap().is_none());
        }

        #[test]
        fn out_of_scope_rules_are_ignored() {
            let mut f = Fixture::new(vec![line(ServiceCategory::Chairs, 6, 10000)]);
            f.rules = vec![
                DiscountRule::new(Country::Bolivia, "Sillas", Decimal::ONE, pct(15)),
                DiscountRule::new(RuleScope::All, "Sillas", Decimal::ONE, pct(20)).with_active(false),
            ];
            assert!(CategoryRulePolicy.evaluate(&f.ctx()).unwrap().is_none());
        }
    }

    mod value_thresholds {
        use super::*;

        #[test]
        fn fires_above_threshold_for_any_payment() {
            let mut f = Fixture::new(vec![
                line(ServiceCategory::Carpets, 1, 60000),
                line(ServiceCategory::Mattresses, 1, 30000),
            ]);
            f.payment = PaymentMethod::Other;
            let outcome = ValueThresholdPolicy.evaluate(&f.ctx()).unwrap().unwrap();
            assert_eq!(outcome.discount.kind, DiscountKind::Value);
            assert_eq!(outcome.discount.amount, Decimal::new(4800, 0));
            assert_eq!(outcome.price_after_discount, Decimal::new(85200, 0));
            assert_eq!(outcome.discount.description, "8% OFF por monto en Alfombras");
        }

        #[test]
        fn threshold_must_be_exceeded() {
            let f = Fixture::new(vec![line(ServiceCategory::Carpets, 1, 50000)]);
            assert!(ValueThresholdPolicy.evaluate(&f.ctx()).unwrap().is_none());
        }
    }

    mod zone {
        use super::*;

        #[test]
        fn aesthetics_are_charged_in_full() {
            let mut f = Fixture::new(vec![
                line(ServiceCategory::Upholstery, 1, 50000),
                line(ServiceCategory::VehicleAesthetics, 1, 40000),
            ]);
            f.zone = f.zone.clone().with_general_discount(pct(10));
            let outcome = ZoneDiscountPolicy.evaluate(&f.ctx()).unwrap().unwrap();
            assert_eq!(outcome.discount.kind, DiscountKind::ZoneGeneral);
            assert_eq!(outcome.discount.amount, Decimal::new(5000, 0));
            assert_eq!(outcome.price_after_discount, Decimal::new(85000, 0));
            assert_eq!(outcome.discount.description, "10% Descuento General Zona");
        }

        #[test]
        fn zero_discount_zone_grants_nothing() {
            let f = Fixture::new(vec![line(ServiceCategory::Upholstery, 1, 50000)]);
            assert!(ZoneDiscountPolicy.evaluate(&f.ctx()).unwrap().is_none());
        }

        #[test]
        fn aesthetics_only_request_records_zero_discount() {
            let mut f = Fixture::new(vec![line(ServiceCategory::VehicleAesthetics, 1, 40000)]);
            f.zone = f.zone.clone().with_general_discount(pct(10));
            let outcome = ZoneDiscountPolicy.evaluate(&f.ctx()).unwrap().unwrap();
            assert_eq!(outcome.discount.kind, DiscountKind::ZoneGeneral);
            assert_eq!(outcome.discount.amount, Decimal::ZERO);
            assert_eq!(outcome.price_after_discount, Decimal::new(40000, 0));
        }
    }

    mod selector {
        use super::*;

        #[test]
        fn promotion_beats_zone() {
            let mut f = Fixture::new(vec![line(ServiceCategory::Chairs, 6, 10000)]);
            f.rules = vec![DiscountRule::new(RuleScope::All, "Sillas", Decimal::new(6, 0), pct(15))];
            f.zone = f.zone.clone().with_general_discount(pct(10));
            let outcome = DiscountSelector::standard().select(&f.ctx()).unwrap().unwrap();
            assert_eq!(outcome.discount.kind, DiscountKind::Promo);
        }

        #[test]
        fn zone_is_the_fallback() {
            let mut f = Fixture::new(vec![line(ServiceCategory::Chairs, 1, 10000)]);
            f.zone = f.zone.clone().with_general_discount(pct(10));
            let outcome = DiscountSelector::standard().select(&f.ctx()).unwrap().unwrap();
            assert_eq!(outcome.discount.kind, DiscountKind::ZoneGeneral);
        }

        #[test]
        fn standard_ignores_value_thresholds() {
            let f = Fixture::new(vec![line(ServiceCategory::Carpets, 1, 60000)]);
            assert!(DiscountSelector::standard().select(&f.ctx()).unwrap().is_none());
            let outcome = DiscountSelector::with_value_thresholds()
                .select(&f.ctx())
                .unwrap()
                .unwrap();
            assert_eq!(outcome.discount.kind, DiscountKind::Value);
        }

        #[test]
        fn value_threshold_beats_zone() {
            let mut f = Fixture::new(vec![line(ServiceCategory::Carpets, 1, 60000)]);
            f.zone = f.zone.clone().with_general_discount(pct(10));
            let outcome = DiscountSelector::with_value_thresholds()
                .select(&f.ctx())
                .unwrap()
                .unwrap();
            assert_eq!(outcome.discount.kind, DiscountKind::Value);
        }
    }
}
