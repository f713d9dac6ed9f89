//! # Pricing Engine
//!
//! Runs the quote pipeline end to end.
//!
//! ```text
//! input ─► zone ─► line prices ─► bundling ─► discount ─► minimum ─► result
//! ```
//!
//! Every stage is a pure function over the request, the catalog snapshot
//! and the country constants; the engine holds no mutable state and may be
//! shared freely across threads.
//!
//! # Examples
//!
//! ```
//! use tutto_quote::application::services::pricing_engine::PricingEngine;
//! use tutto_quote::domain::entities::QuoteInput;
//! use tutto_quote::domain::value_objects::Country;
//! use tutto_quote::infrastructure::catalog::seed_catalog;
//! use rust_decimal::Decimal;
//!
//! let engine = PricingEngine::default();
//! let input = QuoteInput::new(Country::Argentina)
//!     .with_postal_code("1414")
//!     .with_item("veh_std_basico_ar", Decimal::ONE);
//!
//! let quote = engine.calculate_quote(&input, &seed_catalog()).unwrap().unwrap();
//! assert_eq!(quote.final_price(), Decimal::new(37999, 0));
//! assert_eq!(quote.detail.zone_id.as_str(), "CABA");
//! ```

use crate::domain::entities::{Catalog, QuoteDetail, QuoteInput, QuoteResult};
use crate::domain::errors::PricingResult;
use crate::domain::services::{
    DiscountContext, DiscountSelector, RangePolicy, apply_minimum_charge, build_notes,
    build_summary, bundle_isolated_items, price_items, price_range, resolve_zone,
    workload_subtotal,
};
use crate::domain::value_objects::{Country, CountryConfig, CountryTable};
use crate::infrastructure::config::QuoteSettings;
use tracing::{debug, instrument};

/// Quote pipeline configured with country constants and discount policies.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    countries: CountryTable,
    discounts: DiscountSelector,
    range: Option<RangePolicy>,
}

impl PricingEngine {
    /// Creates an engine with the standard discount chain and no range.
    #[must_use]
    pub fn new(countries: CountryTable) -> Self {
        Self {
            countries,
            discounts: DiscountSelector::standard(),
            range: None,
        }
    }

    /// Creates an engine from quote settings.
    #[must_use]
    pub fn from_settings(countries: CountryTable, settings: &QuoteSettings) -> Self {
        let discounts = if settings.value_thresholds {
            DiscountSelector::with_value_thresholds()
        } else {
            DiscountSelector::standard()
        };
        Self {
            countries,
            discounts,
            range: settings.range,
        }
    }

    /// Replaces the discount chain.
    #[must_use]
    pub fn with_discounts(mut self, discounts: DiscountSelector) -> Self {
        self.discounts = discounts;
        self
    }

    /// Sets the range policy.
    #[must_use]
    pub fn with_range(mut self, range: RangePolicy) -> Self {
        self.range = Some(range);
        self
    }

    /// Returns the country constants.
    #[inline]
    #[must_use]
    pub fn countries(&self) -> &CountryTable {
        &self.countries
    }

    /// Returns the constants of one country.
    #[inline]
    #[must_use]
    pub fn country_config(&self, country: Country) -> &CountryConfig {
        self.countries.get(country)
    }

    /// Computes a quote.
    ///
    /// Returns `Ok(None)` when the request has no items.
    ///
    /// # Errors
    ///
    /// - `PricingError::ZoneNotFound` / `ZoneInactive` from zone resolution
    /// - `PricingError::ServiceNotFound` for an unknown or inactive service
    /// - `PricingError::Arithmetic` on decimal overflow
    #[instrument(skip_all, fields(country = %input.country, items = input.items.len()))]
    pub fn calculate_quote(
        &self,
        input: &QuoteInput,
        catalog: &Catalog,
    ) -> PricingResult<Option<QuoteResult>> {
        if input.items.is_empty() {
            debug!("empty request");
            return Ok(None);
        }

        let config = self.countries.get(input.country);

        let zone = resolve_zone(input, catalog)?;
        debug!(zone = %zone.zone_id(), discount = %zone.general_discount_pct(), "zone resolved");

        let lines = price_items(&input.items, catalog, input.country)?;
        let lines = bundle_isolated_items(lines, catalog, input.country)?;
        let subtotal = workload_subtotal(&lines)?;
        debug!(lines = lines.len(), %subtotal, "lines priced");

        let ctx = DiscountContext {
            country: input.country,
            payment_method: input.payment_method,
            lines: &lines,
            workload_subtotal: subtotal,
            zone: &zone,
            rules: catalog.discount_rules(),
            country_config: config,
        };
        let (applied_discount, price_after_discount) = match self.discounts.select(&ctx)? {
            Some(outcome) => (Some(outcome.discount), outcome.price_after_discount),
            None => (None, subtotal),
        };

        let floor = apply_minimum_charge(price_after_discount, config.minimum_charge())?;
        if floor.is_applied() {
            debug!(adjustment = %floor.adjustment, "minimum charge applied");
        }

        let (min, max) = price_range(floor.final_price, self.range.as_ref(), config.rounding_step())?;

        let separator = config.thousands_separator();
        let summary = build_summary(&lines, &zone, config.currency(), floor.final_price, separator);
        let notes = build_notes(
            &lines,
            applied_discount.as_ref(),
            floor.adjustment,
            config.minimum_charge(),
            config.currency(),
            separator,
        );

        debug!(final_price = %floor.final_price, "quote computed");

        Ok(Some(QuoteResult {
            min,
            max,
            detail: QuoteDetail {
                workload_subtotal: subtotal,
                applied_discount,
                price_after_discount,
                minimum_charge_applied: floor.adjustment,
                final_price: floor.final_price,
                zone_id: zone.zone_id().clone(),
                currency: config.currency(),
                operator_name: zone.operator_name().map(str::to_string),
                items: lines,
            },
            notes,
            summary,
        }))
    }
}
