//! # Quote Service
//!
//! Entry point for callers that compute quotes against a live catalog.
//!
//! The service owns the current catalog snapshot and the [`PricingEngine`].
//! A calculation reads one snapshot from start to finish; refreshing the
//! catalog swaps the snapshot wholesale without disturbing calculations that
//! already hold the previous one.
//!
//! Only one calculation runs at a time per service. An overlapping call is
//! rejected with [`ApplicationError::CalculationInProgress`] rather than
//! queued.
//!
//! # Examples
//!
//! ```
//! use tutto_quote::application::services::QuoteService;
//! use tutto_quote::domain::entities::QuoteInput;
//! use tutto_quote::domain::value_objects::Country;
//! use rust_decimal::Decimal;
//!
//! let service = QuoteService::seeded();
//! let input = QuoteInput::new(Country::Bolivia)
//!     .with_item("colchon_1p_bo", Decimal::ONE);
//!
//! let quote = service.calculate(&input).unwrap();
//! assert_eq!(quote.detail.zone_id.as_str(), "BOLIVIA_GENERAL");
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::pricing_engine::PricingEngine;
use crate::domain::entities::{Catalog, QuoteInput, QuoteResult};
use crate::infrastructure::catalog::{CatalogSource, seed_catalog};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// Computes quotes against the current catalog snapshot.
#[derive(Debug)]
pub struct QuoteService {
    engine: PricingEngine,
    catalog: RwLock<Arc<Catalog>>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when a calculation ends, including on error.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl QuoteService {
    /// Creates a service over `catalog`.
    #[must_use]
    pub fn new(engine: PricingEngine, catalog: Catalog) -> Self {
        Self {
            engine,
            catalog: RwLock::new(Arc::new(catalog)),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Creates a service with the default engine and the built-in catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(PricingEngine::default(), seed_catalog())
    }

    /// Returns the engine.
    #[inline]
    #[must_use]
    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    /// Returns the current catalog snapshot.
    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog.read())
    }

    /// Swaps in a new catalog.
    pub fn replace_catalog(&self, catalog: Catalog) {
        *self.catalog.write() = Arc::new(catalog);
    }

    /// Loads a catalog from `source` and swaps it in.
    ///
    /// The current snapshot is kept when loading fails.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Catalog` if the source cannot be loaded.
    pub async fn refresh(&self, source: &dyn CatalogSource) -> ApplicationResult<()> {
        let catalog = source.load().await.inspect_err(|e| {
            warn!(source = source.name(), error = %e, "catalog refresh failed");
        })?;
        info!(
            source = source.name(),
            services = catalog.services().len(),
            zones = catalog.zones().len(),
            rules = catalog.discount_rules().len(),
            "catalog refreshed"
        );
        self.replace_catalog(catalog);
        Ok(())
    }

    /// Validates `input` and computes its quote.
    ///
    /// # Errors
    ///
    /// - `CalculationInProgress` if another calculation is running
    /// - `Validation` for blank ids, non-positive quantities or a missing
    ///   location where the country requires one
    /// - `EmptyRequest` when no items were requested
    /// - `ZoneNotFound` or `Pricing` when the engine fails
    pub fn calculate(&self, input: &QuoteInput) -> ApplicationResult<QuoteResult> {
        let _guard =
            InFlightGuard::acquire(&self.in_flight).ok_or(ApplicationError::CalculationInProgress)?;

        self.validate(input)?;

        let catalog = self.catalog();
        self.engine
            .calculate_quote(input, &catalog)
            .map_err(|e| ApplicationError::from_pricing(e, input))?
            .ok_or(ApplicationError::EmptyRequest)
    }

    /// Returns true while a calculation is running.
    #[must_use]
    pub fn is_calculating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn validate(&self, input: &QuoteInput) -> ApplicationResult<()> {
        if let Some(item) = input.items.iter().find(|item| item.service_id.is_blank()) {
            return Err(ApplicationError::validation(format!(
                "item {} has no service",
                item.key
            )));
        }
        if let Some(item) = input.items.iter().find(|item| item.quantity <= Decimal::ZERO) {
            return Err(ApplicationError::validation(format!(
                "item {} has quantity {}",
                item.key, item.quantity
            )));
        }
        let config = self.engine.country_config(input.country);
        if config.location_required() && !input.has_location() {
            return Err(ApplicationError::validation(format!(
                "{} requires a postal code or province and city",
                input.country
            )));
        }
        Ok(())
    }
}

impl Default for QuoteService {
    fn default() -> Self {
        Self::seeded()
    }
}
