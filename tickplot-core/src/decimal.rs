//! Decimal — the numeric backend behind every scale and range.
//!
//! The scaling code never names a concrete number type. It works against the
//! [`Decimal`] trait, which carries the arithmetic, the comparisons and the
//! factory constructors (`zero`, `from_i64`) it needs. Two backends ship:
//!
//! - [`rust_decimal::Decimal`] — exact base-10 arithmetic, the default
//! - `f64` — native floats, cheaper but subject to binary rounding

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::RoundingStrategy;

/// Numeric value type used by ranges, scales and charts.
///
/// All arithmetic is closed over `Self`. Ordering must be total for the values
/// a caller feeds in; for `f64` that means no NaN.
pub trait Decimal:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// The additive identity.
    fn zero() -> Self;

    /// Builds a value from an integer.
    fn from_i64(value: i64) -> Self;

    fn is_zero(&self) -> bool;

    /// Rounds to an integer, halves away from zero.
    fn rounded(&self) -> Self;

    /// Floating point approximation, used for label formatting.
    fn as_f64(&self) -> f64;

    /// Integer part, truncated toward zero and saturated at the `i64` bounds.
    fn int_part(&self) -> i64;

    /// `None` when the sum is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// `None` on overflow or division by zero.
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

impl Decimal for rust_decimal::Decimal {
    fn zero() -> Self {
        rust_decimal::Decimal::ZERO
    }

    fn from_i64(value: i64) -> Self {
        rust_decimal::Decimal::from(value)
    }

    fn is_zero(&self) -> bool {
        rust_decimal::Decimal::is_zero(self)
    }

    fn rounded(&self) -> Self {
        self.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    fn as_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(0.0)
    }

    fn int_part(&self) -> i64 {
        match self.trunc().to_i64() {
            Some(v) => v,
            None if self.is_sign_negative() => i64::MIN,
            None => i64::MAX,
        }
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        rust_decimal::Decimal::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        rust_decimal::Decimal::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        rust_decimal::Decimal::checked_mul(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        rust_decimal::Decimal::checked_div(self, rhs)
    }
}

impl Decimal for f64 {
    fn zero() -> Self {
        0.0
    }

    fn from_i64(value: i64) -> Self {
        value as f64
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn rounded(&self) -> Self {
        f64::round(*self)
    }

    fn as_f64(&self) -> f64 {
        *self
    }

    fn int_part(&self) -> i64 {
        // `as` truncates toward zero and saturates; NaN becomes 0.
        *self as i64
    }

    // Floats overflow to infinity, which `int_part` saturates.
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        (rhs != 0.0).then(|| self / rhs)
    }
}
