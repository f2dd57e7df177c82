//! Non-negative money amounts in the storefront's single currency.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A price in the smallest currency unit (cents).
///
/// Unsigned storage keeps prices non-negative by construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Parse decimal text as typed into a number field (`"12"`, `"12.5"`, `"0.99"`).
    ///
    /// At most two fractional digits; signs, exponents and separators are rejected.
    pub fn parse(text: &str) -> DomainResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::validation("price is required"));
        }

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(DomainError::validation(format!("price is not a number: {text}")));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(format!("price is not a number: {text}")));
        }
        if fraction.len() > 2 {
            return Err(DomainError::validation("price has more than two decimal places"));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| DomainError::validation("price is too large"))?
        };
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map(|d| d * 10).unwrap_or(0),
            _ => fraction.parse().unwrap_or(0),
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .map(Price)
            .ok_or_else(|| DomainError::validation("price is too large"))
    }

    pub fn checked_add(self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }

    pub fn checked_mul(self, quantity: u32) -> Option<Price> {
        self.0.checked_mul(u64::from(quantity)).map(Price)
    }

    /// Render with a currency symbol, e.g. `$89.99`.
    pub fn with_symbol(self, symbol: &str) -> String {
        format!("{symbol}{self}")
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
