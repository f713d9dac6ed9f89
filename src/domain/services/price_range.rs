//! # Price Range
//!
//! Turns a final price into the `min`/`max` range shown to the customer.
//!
//! Without a [`RangePolicy`] the range collapses to the final price. With
//! one, each bound is widened by its percentage and rounded to the nearest
//! multiple of the country's rounding step.
//!
//! ```text
//! min = round(final * (1 - lower_pct), step)
//! max = round(final * (1 + upper_pct), step)
//! ```

use crate::domain::value_objects::{ArithmeticResult, CheckedArithmetic, Rounding, round_to_step};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Percentages that widen the quoted price into a range.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::services::price_range::RangePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = RangePolicy::symmetric(Decimal::new(10, 2));
/// let (min, max) = policy.bounds(Decimal::new(37999, 0), Decimal::ONE_HUNDRED).unwrap();
/// assert_eq!(min, Decimal::new(34200, 0));
/// assert_eq!(max, Decimal::new(41800, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangePolicy {
    /// Fraction subtracted for the lower bound.
    pub lower_pct: Decimal,
    /// Fraction added for the upper bound.
    pub upper_pct: Decimal,
}

impl RangePolicy {
    /// Creates a policy.
    #[must_use]
    pub const fn new(lower_pct: Decimal, upper_pct: Decimal) -> Self {
        Self {
            lower_pct,
            upper_pct,
        }
    }

    /// Same fraction both ways.
    #[must_use]
    pub const fn symmetric(pct: Decimal) -> Self {
        Self::new(pct, pct)
    }

    /// Returns `(min, max)` around `final_price`.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on overflow or a non-positive step.
    pub fn bounds(&self, final_price: Decimal, step: Decimal) -> ArithmeticResult<(Decimal, Decimal)> {
        let lower = final_price.safe_mul(Decimal::ONE.safe_sub(self.lower_pct)?)?;
        let upper = final_price.safe_mul(Decimal::ONE.safe_add(self.upper_pct)?)?;
        Ok((
            round_to_step(lower, step, Rounding::Nearest)?,
            round_to_step(upper, step, Rounding::Nearest)?,
        ))
    }
}

/// Returns `(min, max)` for `final_price` under an optional policy.
///
/// # Errors
///
/// Returns an arithmetic error on overflow or a non-positive step.
pub fn price_range(
    final_price: Decimal,
    policy: Option<&RangePolicy>,
    step: Decimal,
) -> ArithmeticResult<(Decimal, Decimal)> {
    match policy {
        Some(policy) => policy.bounds(final_price, step),
        None => Ok((final_price, final_price)),
    }
}
