//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures of a quote request as seen by a caller:
//! invalid input, overlapping requests, pricing failures and catalog
//! loading failures. Each one renders a Spanish message for end users via
//! [`ApplicationError::user_message`].
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Validation(String)       - Input validation failures
//! ├── EmptyRequest             - No items requested
//! ├── CalculationInProgress    - Another calculation is running
//! ├── ZoneNotFound { location } - No zone for the typed location
//! ├── Pricing(PricingError)    - Other pricing failures
//! └── Catalog(CatalogError)    - Catalog loading failures
//! ```
//!
//! # Examples
//!
//! ```
//! use tutto_quote::application::error::ApplicationError;
//! use tutto_quote::domain::errors::PricingError;
//!
//! let err = ApplicationError::validation("quantity must be positive");
//! assert!(err.is_validation());
//!
//! let err: ApplicationError = PricingError::service_not_found("x").into();
//! assert_eq!(err.user_message(), "El servicio seleccionado no es válido o está inactivo.");
//! ```

use crate::domain::entities::QuoteInput;
use crate::domain::errors::PricingError;
use crate::infrastructure::catalog::CatalogError;
use thiserror::Error;

/// Generic message for failures without a specific one.
pub const GENERIC_ERROR_MESSAGE: &str = "Ocurrió un error inesperado al calcular la cotización.";

/// Message for incomplete requests.
pub const VALIDATION_MESSAGE: &str = "Por favor, complete el código postal (o provincia y ciudad), seleccione un servicio y asegúrese que la cantidad sea mayor a 0.";

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// The request has no items.
    #[error("empty request")]
    EmptyRequest,

    /// A calculation is already running on this service.
    #[error("calculation already in progress")]
    CalculationInProgress,

    /// No zone matches the typed location.
    #[error("zone not found: {location}")]
    ZoneNotFound {
        /// Postal code, or `"province, city"`.
        location: String,
    },

    /// Pricing failed.
    #[error("pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// The catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a zone not found error.
    #[must_use]
    pub fn zone_not_found(location: impl Into<String>) -> Self {
        Self::ZoneNotFound {
            location: location.into(),
        }
    }

    /// Wraps a pricing error, attaching the location of `input` when the
    /// zone could not be found.
    #[must_use]
    pub fn from_pricing(err: PricingError, input: &QuoteInput) -> Self {
        match err {
            PricingError::ZoneNotFound => Self::zone_not_found(input.location_identifier()),
            other => Self::Pricing(other),
        }
    }

    /// Returns the stable code of the underlying failure.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::EmptyRequest => "EMPTY_REQUEST",
            Self::CalculationInProgress => "CALCULATION_IN_PROGRESS",
            Self::ZoneNotFound { .. } => "ZONE_NOT_FOUND",
            Self::Pricing(e) => e.code(),
            Self::Catalog(_) => "CATALOG_UNAVAILABLE",
        }
    }

    /// Returns the message shown to end users.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(_) | Self::EmptyRequest => VALIDATION_MESSAGE.to_string(),
            Self::ZoneNotFound { location } => format!(
                "La zona especificada (\"{location}\") no fue encontrada en nuestra base de datos."
            ),
            Self::Pricing(PricingError::ZoneInactive { .. }) => {
                "La zona especificada no se encuentra activa para cotizaciones en este momento."
                    .to_string()
            }
            Self::Pricing(PricingError::ServiceNotFound { .. }) => {
                "El servicio seleccionado no es válido o está inactivo.".to_string()
            }
            Self::Pricing(PricingError::ZoneNotFound) => {
                "La zona especificada no fue encontrada en nuestra base de datos.".to_string()
            }
            Self::CalculationInProgress => {
                "Ya hay una cotización en curso, espere a que termine.".to_string()
            }
            Self::Pricing(PricingError::Arithmetic(_)) | Self::Catalog(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::EmptyRequest)
    }

    /// Returns true if a catalog lookup failed.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::ZoneNotFound { .. } => true,
            Self::Pricing(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::CalculationInProgress => true,
            Self::Catalog(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
