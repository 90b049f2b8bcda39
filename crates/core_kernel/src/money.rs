//! Money type with precise fixed-point arithmetic
//!
//! This module provides a type-safe representation of monetary values as an
//! integer count of minor units (cents), avoiding floating-point errors
//! across repeated add/subtract cycles. Decimal conversion happens only at
//! the boundary, via rust_decimal.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Number of decimal places carried by monetary values.
const DECIMAL_PLACES: u32 = 2;

/// Minor units per major unit (cents per whole).
const MINOR_PER_MAJOR: i64 = 100;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Negative amount not allowed: {0}")]
    NegativeAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount stored as an integer count of minor units
///
/// All arithmetic in the engine happens on this type; external decimal or
/// string representations are converted at the boundary and never retained.
/// The value is signed so that intermediate differences can be expressed,
/// but domain operations saturate at zero where negatives are forbidden.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates Money from an integer amount in minor units (e.g., cents)
    pub const fn from_minor(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Creates a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns the raw amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checked addition that returns an error on overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction that returns an error on overflow
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Subtraction that saturates at zero
    ///
    /// Domain amounts (installments, payments, balances) are never negative;
    /// this is the subtraction used wherever that invariant applies.
    pub fn saturating_sub(&self, other: &Money) -> Money {
        Money((self.0 - other.0).max(0))
    }

    /// Multiplies by a ratio, rounding half-away-from-zero to the nearest
    /// minor unit
    pub fn scale(&self, ratio: Decimal) -> Result<Money, MoneyError> {
        let scaled = Decimal::from(self.0) * ratio;
        scaled
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Converts a decimal major-unit amount into Money
    ///
    /// Rounds half-away-from-zero to the minor unit.
    pub fn from_decimal(amount: Decimal) -> Result<Money, MoneyError> {
        let minor = (amount * Decimal::from(MINOR_PER_MAJOR))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        minor.to_i64().map(Money).ok_or(MoneyError::Overflow)
    }

    /// Returns the amount as a decimal in major units
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, DECIMAL_PLACES)
    }

    /// Parses a locale-formatted decimal string into Money
    ///
    /// Accepts either comma or dot as the decimal separator, with the other
    /// symbol (if present) treated as a thousands separator:
    /// `"1.234,56"`, `"1,234.56"`, `"1234,56"`, `"1234.56"`, `"1234"`.
    /// A lone separator followed by exactly three digits is read as a
    /// thousands separator (`"1.234"` is 1234, not 1.234). More than two
    /// decimal digits are rejected.
    pub fn parse(input: &str) -> Result<Money, MoneyError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoneyError::InvalidAmount("empty input".to_string()));
        }

        let invalid = || MoneyError::InvalidAmount(trimmed.to_string());

        let (sign, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let last_comma = digits.rfind(',');
        let last_dot = digits.rfind('.');

        let decimal_sep = match (last_comma, last_dot) {
            // Both present: the later symbol is the decimal separator.
            (Some(c), Some(d)) => Some(if c > d { ',' } else { '.' }),
            (Some(pos), None) => single_separator_role(digits, pos, ','),
            (None, Some(pos)) => single_separator_role(digits, pos, '.'),
            (None, None) => None,
        };

        let mut integer_part = String::with_capacity(digits.len());
        let mut fraction_part = String::new();
        let mut in_fraction = false;

        for ch in digits.chars() {
            match ch {
                '0'..='9' => {
                    if in_fraction {
                        fraction_part.push(ch);
                    } else {
                        integer_part.push(ch);
                    }
                }
                ',' | '.' => {
                    if Some(ch) == decimal_sep {
                        if in_fraction {
                            return Err(invalid());
                        }
                        in_fraction = true;
                    }
                    // Thousands separators are dropped.
                }
                _ => return Err(invalid()),
            }
        }

        if integer_part.is_empty() && fraction_part.is_empty() {
            return Err(invalid());
        }
        if fraction_part.len() > DECIMAL_PLACES as usize {
            return Err(invalid());
        }

        let whole: i64 = if integer_part.is_empty() {
            0
        } else {
            integer_part.parse().map_err(|_| invalid())?
        };
        let mut cents: i64 = if fraction_part.is_empty() {
            0
        } else {
            fraction_part.parse().map_err(|_| invalid())?
        };
        if fraction_part.len() == 1 {
            cents *= 10;
        }

        whole
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|w| w.checked_add(cents))
            .and_then(|m| m.checked_mul(sign))
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }
}

/// Decides whether a lone `,` or `.` acts as a decimal or thousands
/// separator. Repeated occurrences or exactly three trailing digits mean
/// thousands grouping.
fn single_separator_role(digits: &str, pos: usize, sep: char) -> Option<char> {
    let occurrences = digits.matches(sep).count();
    let trailing = digits.len() - pos - 1;
    if occurrences > 1 || trailing == 3 {
        None
    } else {
        Some(sep)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(
            f,
            "{}{}.{:02}",
            sign,
            abs / MINOR_PER_MAJOR as u64,
            abs % MINOR_PER_MAJOR as u64
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other).expect("Overflow in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other).expect("Overflow in Money::sub")
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(10050);
        assert_eq!(m.minor(), 10050);
        assert_eq!(m.to_decimal(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_minor(10000);
        let b = Money::from_minor(5000);

        assert_eq!((a + b).minor(), 15000);
        assert_eq!((a - b).minor(), 5000);
    }

    #[test]
    fn test_saturating_sub_clamps_at_zero() {
        let a = Money::from_minor(100);
        let b = Money::from_minor(300);

        assert_eq!(a.saturating_sub(&b), Money::zero());
        assert_eq!(b.saturating_sub(&a).minor(), 200);
    }

    #[test]
    fn test_scale_rounds_half_away_from_zero() {
        let m = Money::from_minor(201);
        assert_eq!(m.scale(dec!(0.5)).unwrap().minor(), 101);
        assert_eq!(
            Money::from_minor(-201).scale(dec!(0.5)).unwrap().minor(),
            -101
        );
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(dec!(100.50)).unwrap().minor(), 10050);
        assert_eq!(Money::from_decimal(dec!(0.005)).unwrap().minor(), 1);
    }

    #[test]
    fn test_parse_dot_decimal() {
        assert_eq!(Money::parse("1234.56").unwrap().minor(), 123456);
        assert_eq!(Money::parse("1,234.56").unwrap().minor(), 123456);
    }

    #[test]
    fn test_parse_comma_decimal() {
        assert_eq!(Money::parse("1234,56").unwrap().minor(), 123456);
        assert_eq!(Money::parse("1.234,56").unwrap().minor(), 123456);
    }

    #[test]
    fn test_parse_thousands_only() {
        assert_eq!(Money::parse("1.234").unwrap().minor(), 123400);
        assert_eq!(Money::parse("1.234.567").unwrap().minor(), 123456700);
    }

    #[test]
    fn test_parse_short_fraction() {
        assert_eq!(Money::parse("10,5").unwrap().minor(), 1050);
        assert_eq!(Money::parse("10").unwrap().minor(), 1000);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12.345,678").is_err());
        assert!(Money::parse("12,3456").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(123456).to_string(), "1234.56");
        assert_eq!(Money::from_minor(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_roundtrips_display(amount in -1_000_000_000i64..1_000_000_000i64) {
            let money = Money::from_minor(amount);
            let parsed = Money::parse(&money.to_string()).unwrap();
            prop_assert_eq!(parsed, money);
        }

        #[test]
        fn money_arithmetic_is_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_minor(a);
            let mb = Money::from_minor(b);
            let mc = Money::from_minor(c);

            prop_assert_eq!((ma + mb) + mc, ma + (mb + mc));
        }

        #[test]
        fn saturating_sub_never_negative(
            a in 0i64..1_000_000i64,
            b in 0i64..1_000_000i64
        ) {
            let result = Money::from_minor(a).saturating_sub(&Money::from_minor(b));
            prop_assert!(!result.is_negative());
        }
    }
}
