//! # Tutto Quote
//!
//! Quote pricing engine for upholstery, mattress, carpet, baby-gear and
//! vehicle-interior cleaning in Argentina and Bolivia.
//!
//! Given a location, a list of requested services and a payment method, the
//! engine resolves the service zone, prices each line, bundles isolated
//! vehicle parts, selects a single discount, applies the country's minimum
//! charge and renders a customer-facing summary with advisory notes.
//!
//! # Architecture
//!
//! - [`domain`]: Catalog model and the pure pricing pipeline
//! - [`application`]: Pipeline orchestration and the quote service
//! - [`infrastructure`]: Catalog sources, configuration and logging
//!
//! # Examples
//!
//! ```
//! use tutto_quote::application::QuoteService;
//! use tutto_quote::domain::entities::QuoteInput;
//! use tutto_quote::domain::value_objects::{Country, PaymentMethod};
//! use rust_decimal::Decimal;
//!
//! let service = QuoteService::seeded();
//! let input = QuoteInput::new(Country::Argentina)
//!     .with_postal_code("1414")
//!     .with_item("sillon_2c_ar", Decimal::ONE)
//!     .with_payment_method(PaymentMethod::CashTransfer);
//!
//! let quote = service.calculate(&input).unwrap();
//! println!("{}", quote.summary);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
