//! # Quote Entities
//!
//! Request and response types of a quote calculation.
//!
//! - [`QuoteInput`]: location, requested items and payment method
//! - [`LineItem`]: one priced line, possibly a bundle
//! - [`AppliedDiscount`]: the single discount that was applied
//! - [`QuoteResult`]: final price range, breakdown, notes and summary
//!
//! # Examples
//!
//! ```
//! use tutto_quote::domain::entities::QuoteInput;
//! use tutto_quote::domain::value_objects::{Country, PaymentMethod};
//! use rust_decimal::Decimal;
//!
//! let input = QuoteInput::new(Country::Argentina)
//!     .with_postal_code("1414")
//!     .with_item("veh_std_basico_ar", Decimal::ONE)
//!     .with_payment_method(PaymentMethod::CashTransfer);
//!
//! assert!(input.has_location());
//! assert_eq!(input.items.len(), 1);
//! ```

use crate::domain::entities::service::Service;
use crate::domain::value_objects::{Currency, DiscountKind, PaymentMethod, ServiceId, ZoneId};
use crate::domain::value_objects::Country;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One requested service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteItem {
    /// UI identity of the row; ignored by pricing.
    #[serde(default)]
    pub key: u64,
    /// Requested service.
    pub service_id: ServiceId,
    /// Pieces, units or square meters.
    pub quantity: Decimal,
}

impl QuoteItem {
    /// Creates an item.
    #[must_use]
    pub fn new(key: u64, service_id: impl Into<ServiceId>, quantity: Decimal) -> Self {
        Self {
            key,
            service_id: service_id.into(),
            quantity,
        }
    }
}

/// A quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteInput {
    /// Country to price in.
    pub country: Country,
    /// Postal code as typed; may be empty.
    #[serde(default)]
    pub postal_code: String,
    /// Province as typed; may be empty.
    #[serde(default)]
    pub province: String,
    /// City as typed; may be empty.
    #[serde(default)]
    pub city: String,
    /// Requested items in display order.
    #[serde(default)]
    pub items: Vec<QuoteItem>,
    /// Payment method.
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl QuoteInput {
    /// Creates an empty request for `country` paid by cash or transfer.
    #[must_use]
    pub fn new(country: Country) -> Self {
        Self {
            country,
            postal_code: String::new(),
            province: String::new(),
            city: String::new(),
            items: Vec::new(),
            payment_method: PaymentMethod::default(),
        }
    }

    /// Sets the postal code.
    #[must_use]
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    /// Sets province and city.
    #[must_use]
    pub fn with_location(mut self, province: impl Into<String>, city: impl Into<String>) -> Self {
        self.province = province.into();
        self.city = city.into();
        self
    }

    /// Appends an item, keyed by its position.
    #[must_use]
    pub fn with_item(mut self, service_id: impl Into<ServiceId>, quantity: Decimal) -> Self {
        let key = self.items.len() as u64;
        self.items.push(QuoteItem::new(key, service_id, quantity));
        self
    }

    /// Sets the payment method.
    #[must_use]
    pub fn with_payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    /// Returns true if a postal code or both province and city were given.
    #[must_use]
    pub fn has_location(&self) -> bool {
        !self.postal_code.trim().is_empty()
            || (!self.province.trim().is_empty() && !self.city.trim().is_empty())
    }

    /// Returns the location as typed, for error messages.
    #[must_use]
    pub fn location_identifier(&self) -> String {
        if self.postal_code.is_empty() {
            format!("{}, {}", self.province, self.city)
        } else {
            self.postal_code.clone()
        }
    }
}

/// A priced line of the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The priced service. For a bundle, a renamed copy of its first item.
    pub service: Service,
    /// Quantity; 1 for a bundle.
    pub quantity: Decimal,
    /// Price before any global discount.
    pub base_price: Decimal,
}

impl LineItem {
    /// Creates a line.
    #[must_use]
    pub fn new(service: Service, quantity: Decimal, base_price: Decimal) -> Self {
        Self {
            service,
            quantity,
            base_price,
        }
    }
}

/// The discount applied to a quote. At most one per quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedDiscount {
    /// Stage that produced the discount.
    pub kind: DiscountKind,
    /// Customer-facing description.
    pub description: String,
    /// Amount subtracted from the subtotal.
    pub amount: Decimal,
    /// Discount fraction.
    pub pct: Decimal,
}

/// Breakdown of a computed quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDetail {
    /// Sum of line base prices after bundling.
    pub workload_subtotal: Decimal,
    /// The applied discount, if any.
    pub applied_discount: Option<AppliedDiscount>,
    /// Subtotal minus the discount.
    pub price_after_discount: Decimal,
    /// Amount added to reach the country minimum; zero when not applied.
    pub minimum_charge_applied: Decimal,
    /// Price charged.
    pub final_price: Decimal,
    /// Resolved zone.
    pub zone_id: ZoneId,
    /// Currency label.
    pub currency: Currency,
    /// Operator assigned to the zone.
    pub operator_name: Option<String>,
    /// Priced lines, bundled where applicable.
    pub items: Vec<LineItem>,
}

/// A computed quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Lower end of the displayed range.
    pub min: Decimal,
    /// Upper end of the displayed range.
    pub max: Decimal,
    /// Full breakdown.
    pub detail: QuoteDetail,
    /// Advisory notes for the customer.
    pub notes: Vec<String>,
    /// One-line summary ready to paste into a chat.
    pub summary: String,
}

impl QuoteResult {
    /// Returns the final price.
    #[inline]
    #[must_use]
    pub fn final_price(&self) -> Decimal {
        self.detail.final_price
    }

    /// Returns true if the range collapses to a single price.
    #[inline]
    #[must_use]
    pub fn is_single_price(&self) -> bool {
        self.min == self.max
    }
}
