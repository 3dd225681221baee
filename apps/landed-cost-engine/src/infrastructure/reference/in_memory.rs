//! In-memory reference-data repositories.
//!
//! Warehouse and fee-rule tables loaded once at startup and queried
//! read-only. Suited to the small, rarely-changing tables these are; a
//! database-backed adapter would implement the same traits.

use crate::domain::fees::{FeeRule, FeeRuleRepository, Warehouse, WarehouseRepository};
use crate::domain::shared::{AttributeCode, CountryCode, Partner};

/// Warehouse table held in memory.
pub struct InMemoryWarehouseRepository {
    warehouses: Vec<Warehouse>,
    default: Warehouse,
}

impl InMemoryWarehouseRepository {
    /// Create a repository with its designated default warehouse.
    #[must_use]
    pub fn new(default: Warehouse) -> Self {
        Self {
            warehouses: Vec::new(),
            default,
        }
    }

    /// Register a warehouse.
    #[must_use]
    pub fn with_warehouse(mut self, warehouse: Warehouse) -> Self {
        self.warehouses.push(warehouse);
        self
    }
}

impl WarehouseRepository for InMemoryWarehouseRepository {
    fn find_by_country(&self, country: &CountryCode) -> Vec<Warehouse> {
        self.warehouses
            .iter()
            .filter(|warehouse| &warehouse.country_code == country)
            .cloned()
            .collect()
    }

    fn default_warehouse(&self) -> Warehouse {
        self.default.clone()
    }
}

/// Fee-rule table held in memory.
#[derive(Default)]
pub struct InMemoryFeeRuleRepository {
    rules: Vec<FeeRule>,
}

impl InMemoryFeeRuleRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule.
    #[must_use]
    pub fn with_rule(mut self, rule: FeeRule) -> Self {
        self.rules.push(rule);
        self
    }
}

impl FeeRuleRepository for InMemoryFeeRuleRepository {
    fn find(
        &self,
        code: &AttributeCode,
        value: &str,
        country: &CountryCode,
        partner: &Partner,
    ) -> Option<FeeRule> {
        self.rules
            .iter()
            .find(|rule| {
                &rule.code == code
                    && rule.value == value
                    && &rule.country == country
                    && &rule.partner == partner
            })
            .cloned()
    }

    fn find_by_code(
        &self,
        code: &AttributeCode,
        country: &CountryCode,
        partner: &Partner,
    ) -> Option<FeeRule> {
        self.rules
            .iter()
            .find(|rule| &rule.code == code && &rule.country == country && &rule.partner == partner)
            .cloned()
    }
}
