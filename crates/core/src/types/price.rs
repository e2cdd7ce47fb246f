//! Type-safe price representation in the smallest currency unit.
//!
//! The catalog is priced in Indonesian rupiah, which has no minor unit in
//! practice, so a price is a plain non-negative integer.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`] from user input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is negative.
    #[error("price cannot be negative")]
    Negative,
    /// The input is not a whole number.
    #[error("price must be a whole number: {0}")]
    Invalid(String),
}

/// A price in rupiah.
///
/// ## Examples
///
/// ```
/// use luxe_core::Price;
///
/// let price = Price::parse("450000").unwrap();
/// assert_eq!(price.amount(), 450_000);
/// assert_eq!(price.to_string(), "IDR 450,000");
///
/// assert!(Price::parse("-1").is_err());
/// assert!(Price::parse("12.5").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// ISO 4217 code used when displaying prices.
    pub const CURRENCY_CODE: &'static str = "IDR";

    /// Create a price from an amount in rupiah.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in rupiah.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Parse a price from form input.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, negative, or not an integer.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PriceError::Empty);
        }
        if s.starts_with('-') {
            return Err(PriceError::Negative);
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| PriceError::Invalid(s.to_owned()))
    }

    /// Format the amount with comma thousands separators (e.g. `450,000`).
    #[must_use]
    pub fn grouped(&self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Self::CURRENCY_CODE, self.grouped())
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
