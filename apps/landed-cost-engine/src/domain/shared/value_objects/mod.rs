//! Value objects shared across bounded contexts.

pub mod identifiers;
pub mod money;

pub use identifiers::{AttributeCode, CountryCode, ItemId, Partner, PostalCode};
pub use money::{CurrencyAmount, REFERENCE_CURRENCY};
