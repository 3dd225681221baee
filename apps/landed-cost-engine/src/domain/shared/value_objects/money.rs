//! Currency-amount value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217 code of the engine's reference currency.
pub const REFERENCE_CURRENCY: &str = "USD";

/// A monetary amount in a named currency.
///
/// Represented as a `Decimal` for precise financial calculations. Amounts in
/// different currencies are never numerically compared by this type; callers
/// decide comparability (see the shipping normalizer for the one documented
/// exception).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    /// Numeric value.
    pub value: Decimal,
    /// 3-letter currency code.
    pub currency: String,
}

impl CurrencyAmount {
    /// Create an amount in an arbitrary currency.
    #[must_use]
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }

    /// Create a USD amount.
    #[must_use]
    pub fn usd(value: Decimal) -> Self {
        Self::new(value, REFERENCE_CURRENCY)
    }

    /// USD zero, the synthesized Local Pickup price.
    #[must_use]
    pub fn usd_zero() -> Self {
        Self::usd(Decimal::ZERO)
    }

    /// Whether this amount is denominated in the reference currency.
    #[must_use]
    pub fn is_usd(&self) -> bool {
        self.currency == REFERENCE_CURRENCY
    }

    /// Whether two amounts share a currency and are therefore comparable.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.currency)
    }
}
