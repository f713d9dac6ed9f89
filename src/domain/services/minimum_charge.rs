//! # Minimum Charge Floor
//!
//! Raises a discounted price to the country's minimum charge.

use crate::domain::value_objects::{ArithmeticResult, CheckedArithmetic};
use rust_decimal::Decimal;

/// Result of applying the minimum charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumChargeOutcome {
    /// Price charged.
    pub final_price: Decimal,
    /// Amount added to reach the minimum; zero when the floor did not apply.
    pub adjustment: Decimal,
}

impl MinimumChargeOutcome {
    /// Returns true if the price was raised.
    #[inline]
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.adjustment > Decimal::ZERO
    }
}

/// Floors `price` at `minimum`.
///
/// # Errors
///
/// Returns an arithmetic error on decimal underflow.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::services::minimum_charge::apply_minimum_charge;
/// use rust_decimal::Decimal;
///
/// let outcome = apply_minimum_charge(Decimal::new(20000, 0), Decimal::new(27999, 0)).unwrap();
/// assert_eq!(outcome.final_price, Decimal::new(27999, 0));
/// assert_eq!(outcome.adjustment, Decimal::new(7999, 0));
/// ```
pub fn apply_minimum_charge(price: Decimal, minimum: Decimal) -> ArithmeticResult<MinimumChargeOutcome> {
    if price < minimum {
        Ok(MinimumChargeOutcome {
            final_price: minimum,
            adjustment: minimum.safe_sub(price)?,
        })
    } else {
        Ok(MinimumChargeOutcome {
            final_price: price,
            adjustment: Decimal::ZERO,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn price_above_minimum_is_unchanged() {
        let outcome = apply_minimum_charge(Decimal::new(37999, 0), Decimal::new(27999, 0)).unwrap();
        assert_eq!(outcome.final_price, Decimal::new(37999, 0));
        assert!(!outcome.is_applied());
    }

    #[test]
    fn price_equal_to_minimum_is_unchanged() {
        let outcome = apply_minimum_charge(Decimal::new(140, 0), Decimal::new(140, 0)).unwrap();
        assert_eq!(outcome.adjustment, Decimal::ZERO);
    }

    #[test]
    fn price_below_minimum_is_raised() {
        let outcome = apply_minimum_charge(Decimal::new(125, 0), Decimal::new(140, 0)).unwrap();
        assert_eq!(outcome.final_price, Decimal::new(140, 0));
        assert_eq!(outcome.adjustment, Decimal::new(15, 0));
        assert!(outcome.is_applied());
    }
}
