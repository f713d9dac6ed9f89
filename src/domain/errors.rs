//! # Domain Errors
//!
//! Terminal outcomes of a quote calculation.
//!
//! Each variant carries a stable [`code`](PricingError::code) that callers
//! use to pick a user-facing message. None of them is retried: the input has
//! to change before a new calculation can succeed.
//!
//! # Examples
//!
//! ```
//! use tutto_quote::domain::errors::PricingError;
//!
//! let err = PricingError::service_not_found("aislado_xx_ar");
//! assert_eq!(err.code(), "SERVICE_NOT_FOUND");
//! assert!(err.is_not_found());
//! ```

use crate::domain::value_objects::{ArithmeticError, ServiceId, ZoneId};
use thiserror::Error;

/// Error returned by the pricing engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// No zone matches the postal code or province/city of the request.
    #[error("zone not found")]
    ZoneNotFound,

    /// A zone matched but is disabled for quoting.
    #[error("zone inactive: {zone_id}")]
    ZoneInactive {
        /// The resolved zone.
        zone_id: ZoneId,
    },

    /// A requested service does not exist, is inactive, or belongs to
    /// another country.
    #[error("service not found: {service_id}")]
    ServiceNotFound {
        /// The unresolved service id.
        service_id: ServiceId,
    },

    /// Checked decimal arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl PricingError {
    /// Creates a zone inactive error.
    #[must_use]
    pub fn zone_inactive(zone_id: impl Into<ZoneId>) -> Self {
        Self::ZoneInactive {
            zone_id: zone_id.into(),
        }
    }

    /// Creates a service not found error.
    #[must_use]
    pub fn service_not_found(service_id: impl Into<ServiceId>) -> Self {
        Self::ServiceNotFound {
            service_id: service_id.into(),
        }
    }

    /// Returns the stable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ZoneNotFound => "ZONE_NOT_FOUND",
            Self::ZoneInactive { .. } => "ZONE_INACTIVE",
            Self::ServiceNotFound { .. } => "SERVICE_NOT_FOUND",
            Self::Arithmetic(_) => "ARITHMETIC_OVERFLOW",
        }
    }

    /// Returns true if a catalog lookup failed.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ZoneNotFound | Self::ServiceNotFound { .. })
    }
}

/// Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(PricingError::ZoneNotFound.code(), "ZONE_NOT_FOUND");
        assert_eq!(PricingError::zone_inactive("CABA").code(), "ZONE_INACTIVE");
        assert_eq!(
            PricingError::service_not_found("x").code(),
            "SERVICE_NOT_FOUND"
        );
        assert_eq!(
            PricingError::from(ArithmeticError::Overflow).code(),
            "ARITHMETIC_OVERFLOW"
        );
    }

    #[test]
    fn display_includes_ids() {
        let err = PricingError::zone_inactive("LA_PLATA");
        assert!(err.to_string().contains("LA_PLATA"));
        let err = PricingError::service_not_found("colchon_9p_ar");
        assert!(err.to_string().contains("colchon_9p_ar"));
    }

    #[test]
    fn not_found_predicate() {
        assert!(PricingError::ZoneNotFound.is_not_found());
        assert!(!PricingError::zone_inactive("CABA").is_not_found());
    }
}
