//! Money type for representing monetary amounts
//!
//! Internally stores amounts in cents (i64) so that sums and averages over
//! many records stay exact. Revenue for catalog-backed sales is computed
//! with [`Money::times`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::{TallyError, TallyResult};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use tally_cli::models::Money;
    /// let amount = Money::from_cents(4999); // $49.99
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Multiply a unit price by a quantity
    ///
    /// # Examples
    /// ```
    /// use tally_cli::models::Money;
    /// let unit_price = Money::from_cents(250);
    /// assert_eq!(unit_price.times(4), Money::from_cents(1000));
    /// ```
    pub const fn times(&self, quantity: u32) -> Self {
        Self(self.0 * quantity as i64)
    }

    /// Divide evenly across `count` items, truncating toward zero.
    ///
    /// Returns zero when `count` is zero, the caller never has to guard.
    pub const fn divided_by(&self, count: usize) -> Self {
        if count == 0 {
            Self(0)
        } else {
            Self(self.0 / count as i64)
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "49.99", "-49.99", "$49.99", "49", "49.9"
    pub fn parse(s: &str) -> TallyResult<Self> {
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);

        let bad = || TallyError::Parse(format!("invalid money amount: {:?}", s));

        let cents = match s.split_once('.') {
            Some((units_str, cents_str)) => {
                let units: i64 = units_str.parse().map_err(|_| bad())?;
                let cents: i64 = match cents_str.len() {
                    1 => cents_str.parse::<i64>().map_err(|_| bad())? * 10,
                    2 => cents_str.parse().map_err(|_| bad())?,
                    _ => return Err(bad()),
                };
                units * 100 + cents
            }
            None => s.parse::<i64>().map_err(|_| bad())? * 100,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a custom currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(4999);
        assert_eq!(m.cents(), 4999);
        assert_eq!(m.units(), 49);
        assert_eq!(m.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(4999)), "$49.99");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_times() {
        let unit_price = Money::from_cents(1999);
        assert_eq!(unit_price.times(3).cents(), 5997);
        assert_eq!(unit_price.times(0), Money::zero());
    }

    #[test]
    fn test_divided_by() {
        assert_eq!(Money::from_cents(900).divided_by(3).cents(), 300);
        assert_eq!(Money::from_cents(1000).divided_by(0), Money::zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("49.99").unwrap().cents(), 4999);
        assert_eq!(Money::parse("$49.99").unwrap().cents(), 4999);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("10.999").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(4999);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "4999");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
