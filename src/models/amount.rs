//! Amount type for expense values
//!
//! Wraps a finite `f64`. Amounts render with a fixed `$` symbol and the
//! shortest decimal form that round-trips, always keeping one fractional
//! digit (`15.0`, `12.5`, `0.1`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Currency symbol prepended to every rendered amount
pub const CURRENCY_SYMBOL: &str = "$";

/// A currency amount with no unit attached
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a float
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Parse an amount from user input
    ///
    /// Surrounding whitespace is ignored. Anything `f64` accepts is allowed
    /// (`12.50`, `-3`, `.5`, `1e3`) except infinities and NaN.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        let value: f64 = s
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::NotFinite(s.to_string()));
        }

        Ok(Self(value))
    }

    /// Format without the currency symbol
    ///
    /// Plain decimal notation, never an exponent, with at least one
    /// fractional digit.
    pub fn format_plain(&self) -> String {
        let s = self.0.to_string();
        if s.contains('.') {
            s
        } else {
            s + ".0"
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CURRENCY_SYMBOL, self.format_plain())
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountParseError {
    #[error("Invalid amount format: {0}")]
    InvalidFormat(String),
    #[error("Amount must be a finite number: {0}")]
    NotFinite(String),
}
