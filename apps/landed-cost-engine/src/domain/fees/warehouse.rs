//! Warehouse reference data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::CountryCode;

/// A fulfillment warehouse carrying the tax rate applied to goods routed
/// through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    /// Country the warehouse sits in.
    pub country_code: CountryCode,
    /// State disambiguator, where one country hosts several warehouses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Tax percent applied at this warehouse.
    pub tax_percent: Decimal,
}

impl Warehouse {
    /// Create a warehouse without a state disambiguator.
    #[must_use]
    pub fn new(country_code: CountryCode, tax_percent: Decimal) -> Self {
        Self {
            country_code,
            state: None,
            tax_percent,
        }
    }

    /// Create a warehouse with a state disambiguator.
    #[must_use]
    pub fn with_state(country_code: CountryCode, state: impl Into<String>, tax_percent: Decimal) -> Self {
        Self {
            country_code,
            state: Some(state.into()),
            tax_percent,
        }
    }
}

/// Read-only warehouse lookup.
///
/// Destination-country lookups may legitimately match zero or several rows;
/// the resolver degrades both cases to the single designated default
/// warehouse.
pub trait WarehouseRepository: Send + Sync {
    /// All warehouses registered for a country.
    fn find_by_country(&self, country: &CountryCode) -> Vec<Warehouse>;

    /// The designated default warehouse (US/OR).
    fn default_warehouse(&self) -> Warehouse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn warehouse_constructors() {
        let plain = Warehouse::new(CountryCode::new("JP"), dec!(10));
        assert!(plain.state.is_none());

        let stated = Warehouse::with_state(CountryCode::new("US"), "OR", dec!(0));
        assert_eq!(stated.state.as_deref(), Some("OR"));
        assert_eq!(stated.tax_percent, dec!(0));
    }
}
