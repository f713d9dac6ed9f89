//! # Checked Arithmetic
//!
//! Traits and utilities for safe decimal arithmetic on money amounts.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`Rounding`] - Enum for explicit rounding direction
//! - [`round_to_step`] - Rounds an amount to a multiple of a granularity
//! - [`checked_sum`] - Sums an iterator of amounts without panicking
//!
//! # Examples
//!
//! ```
//! use tutto_quote::domain::value_objects::arithmetic::{CheckedArithmetic, ArithmeticError};
//! use rust_decimal::Decimal;
//!
//! let a = Decimal::new(37999, 0);
//! let b = Decimal::new(9000, 0);
//! assert_eq!(a.safe_add(b), Ok(Decimal::new(46999, 0)));
//! assert_eq!(a.safe_div(Decimal::ZERO), Err(ArithmeticError::DivisionByZero));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// Invalid value provided (e.g., a non-positive rounding step).
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Rounding direction used when snapping amounts to a granularity.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::value_objects::arithmetic::{Rounding, round_to_step};
/// use rust_decimal::Decimal;
///
/// let step = Decimal::new(100, 0);
/// let value = Decimal::new(37949, 0);
///
/// assert_eq!(round_to_step(value, step, Rounding::Down).unwrap(), Decimal::new(37900, 0));
/// assert_eq!(round_to_step(value, step, Rounding::Up).unwrap(), Decimal::new(38000, 0));
/// assert_eq!(round_to_step(value, step, Rounding::Nearest).unwrap(), Decimal::new(37900, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round towards zero (truncate).
    Down,
    /// Round away from zero.
    Up,
    /// Round to the nearest multiple, halves away from zero.
    #[default]
    Nearest,
}

/// Rounds `value` to a multiple of `step` in the given direction.
///
/// # Errors
///
/// Returns `ArithmeticError::InvalidValue` if `step` is zero or negative,
/// and `ArithmeticError::Overflow` if the rescaled value overflows.
#[inline]
#[must_use = "this returns the result of the operation, without modifying the original"]
pub fn round_to_step(value: Decimal, step: Decimal, rounding: Rounding) -> ArithmeticResult<Decimal> {
    if step <= Decimal::ZERO {
        return Err(ArithmeticError::InvalidValue("rounding step must be positive"));
    }

    let units = value.safe_div(step)?;
    let strategy = match rounding {
        Rounding::Down => RoundingStrategy::ToZero,
        Rounding::Up => RoundingStrategy::AwayFromZero,
        Rounding::Nearest => RoundingStrategy::MidpointAwayFromZero,
    };
    units.round_dp_with_strategy(0, strategy).safe_mul(step)
}

/// Sums amounts with overflow checking.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if the running total overflows.
pub fn checked_sum<I>(values: I) -> ArithmeticResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.safe_add(value))
}

/// Trait for checked arithmetic operations.
///
/// Provides safe arithmetic methods that return `Result` instead of
/// panicking on overflow, underflow, or division by zero.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_for_logs() {
        assert_eq!(ArithmeticError::Underflow.to_string(), "arithmetic underflow");
        assert_eq!(
            ArithmeticError::InvalidValue("rounding step must be positive").to_string(),
            "invalid value: rounding step must be positive"
        );
    }

    mod round_to_step_tests {
        use super::*;

        #[test]
        fn nearest_hundred() {
            let step = Decimal::new(100, 0);
            assert_eq!(
                round_to_step(Decimal::new(39898, 0), step, Rounding::Nearest).unwrap(),
                Decimal::new(39900, 0)
            );
            assert_eq!(
                round_to_step(Decimal::new(36099, 0), step, Rounding::Nearest).unwrap(),
                Decimal::new(36100, 0)
            );
        }

        #[test]
        fn midpoint_rounds_away_from_zero() {
            let step = Decimal::new(100, 0);
            assert_eq!(
                round_to_step(Decimal::new(150, 0), step, Rounding::Nearest).unwrap(),
                Decimal::new(200, 0)
            );
        }

        #[test]
        fn unit_step_rounds_fractions() {
            let result =
                round_to_step(Decimal::new(2145, 1), Decimal::ONE, Rounding::Nearest).unwrap();
            assert_eq!(result, Decimal::new(215, 0));
        }

        #[test]
        fn down_and_up() {
            let step = Decimal::new(100, 0);
            let value = Decimal::new(1001, 0);
            assert_eq!(
                round_to_step(value, step, Rounding::Down).unwrap(),
                Decimal::new(1000, 0)
            );
            assert_eq!(
                round_to_step(value, step, Rounding::Up).unwrap(),
                Decimal::new(1100, 0)
            );
        }

        #[test]
        fn non_positive_step_fails() {
            assert!(matches!(
                round_to_step(Decimal::ONE, Decimal::ZERO, Rounding::Nearest),
                Err(ArithmeticError::InvalidValue(_))
            ));
            assert!(matches!(
                round_to_step(Decimal::ONE, Decimal::NEGATIVE_ONE, Rounding::Nearest),
                Err(ArithmeticError::InvalidValue(_))
            ));
        }
    }

    mod checked_sum_tests {
        use super::*;

        #[test]
        fn sums_values() {
            let total = checked_sum([Decimal::new(34000, 0), Decimal::new(26000, 0)]).unwrap();
            assert_eq!(total, Decimal::new(60000, 0));
        }

        #[test]
        fn empty_is_zero() {
            assert_eq!(checked_sum(std::iter::empty()).unwrap(), Decimal::ZERO);
        }

        #[test]
        fn overflow_is_reported() {
            assert_eq!(
                checked_sum([Decimal::MAX, Decimal::ONE]),
                Err(ArithmeticError::Overflow)
            );
        }
    }

    mod decimal_ops {
        use super::*;

        #[test]
        fn discount_amount() {
            let subtotal = Decimal::new(49999, 0);
            assert_eq!(subtotal.safe_mul(Decimal::new(10, 2)).unwrap(), Decimal::new(49999, 1));
        }

        #[test]
        fn minimum_charge_gap() {
            let gap = Decimal::new(27999, 0).safe_sub(Decimal::new(16000, 0)).unwrap();
            assert_eq!(gap, Decimal::new(11999, 0));
        }

        #[test]
        fn overflow_and_zero_divisor() {
            assert_eq!(Decimal::MAX.safe_mul(Decimal::TWO), Err(ArithmeticError::Overflow));
            assert_eq!(
                Decimal::ONE_HUNDRED.safe_div(Decimal::ZERO),
                Err(ArithmeticError::DivisionByZero)
            );
        }
    }
}
