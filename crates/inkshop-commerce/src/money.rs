//! Money type for representing prices.
//!
//! Studio prices are whole currency units (dinars), so amounts are plain
//! integers and never pass through floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RSD,
    EUR,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "RSD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RSD => "RSD",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
        }
    }

    /// Thousands separator used when displaying amounts.
    pub fn group_separator(&self) -> char {
        match self {
            Currency::RSD | Currency::EUR => '.',
            Currency::USD => ',',
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Format for display with grouped thousands (e.g., "10.000 RSD").
    pub fn display(&self) -> String {
        format!("{} {}", group_thousands(self.amount, self.currency.group_separator()), self.currency)
    }

    /// Format without grouping (e.g., "10000 RSD").
    ///
    /// Used in outgoing messages, where a locale-specific separator
    /// could be misread as a decimal point.
    pub fn plain(&self) -> String {
        format!("{} {}", self.amount, self.currency)
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount.saturating_mul(factor), self.currency)
    }
}

impl Add for Money {
    type Output = Money;

    /// Adds amounts; the left-hand currency wins.
    fn add(self, other: Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount), self.currency)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.saturating_multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(amount: i64, separator: char) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_groups_thousands() {
        assert_eq!(Money::new(10000, Currency::RSD).display(), "10.000 RSD");
        assert_eq!(Money::new(1234567, Currency::RSD).display(), "1.234.567 RSD");
        assert_eq!(Money::new(2500, Currency::USD).display(), "2,500 USD");
    }

    #[test]
    fn test_money_display_small_amounts() {
        assert_eq!(Money::new(0, Currency::RSD).display(), "0 RSD");
        assert_eq!(Money::new(999, Currency::RSD).display(), "999 RSD");
        assert_eq!(Money::new(-1500, Currency::EUR).display(), "-1.500 EUR");
    }

    #[test]
    fn test_money_plain() {
        assert_eq!(Money::new(10000, Currency::RSD).plain(), "10000 RSD");
    }

    #[test]
    fn test_money_multiply_saturates() {
        let m = Money::new(i64::MAX / 2, Currency::RSD);
        assert_eq!((m * 3).amount, i64::MAX);
        assert_eq!((Money::new(5000, Currency::RSD) * 2).amount, 10000);
    }

    #[test]
    fn test_money_add_saturates() {
        let sum = Money::zero(Currency::RSD) + Money::new(1000, Currency::RSD);
        assert_eq!(sum, Money::new(1000, Currency::RSD));
        assert_eq!((Money::new(i64::MAX, Currency::RSD) + sum).amount, i64::MAX);
    }
}
