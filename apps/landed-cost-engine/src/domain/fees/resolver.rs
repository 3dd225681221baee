//! Fee Resolver.
//!
//! Applies a destination's tax rate and the per-attribute fee schedule of a
//! (country, partner) pair to a base price, accumulating fixed and
//! percentage components separately.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::fees::rule::{FeeKind, FeeRule, FeeRuleRepository};
use crate::domain::fees::warehouse::WarehouseRepository;
use crate::domain::shared::{AttributeCode, CountryCode, Partner};

/// Resolved fee components.
///
/// The caller combines `fixed_total + base_price * percent_total / 100`;
/// the resolver never performs that final multiply, keeping tax rate, fixed
/// charges, and percentage charges separately inspectable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeResult {
    /// Tax percent taken from the resolved warehouse.
    pub tax_percent: Decimal,
    /// Sum of fixed charges (flat rules plus enforced percent minimums).
    pub fixed_total: Decimal,
    /// Sum of percentage points from percent rules.
    pub percent_total: Decimal,
    /// The taxed-plus-shipping base the percentages apply to.
    pub base_price: Decimal,
}

/// Fee computation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    /// No rule and no default at any fallback level for an attribute.
    /// Terminal: the whole computation short-circuits with no partial total.
    #[error("no fee rule or default for attribute '{code}'='{value}'")]
    Unresolvable {
        /// Attribute code that failed to resolve.
        code: AttributeCode,
        /// Attribute value that failed to resolve.
        value: String,
    },
}

/// Fee computation service over injected read-only reference data.
pub struct FeeResolver<W, F>
where
    W: WarehouseRepository,
    F: FeeRuleRepository,
{
    warehouses: Arc<W>,
    rules: Arc<F>,
}

impl<W, F> FeeResolver<W, F>
where
    W: WarehouseRepository,
    F: FeeRuleRepository,
{
    /// Create a resolver over warehouse and fee-rule repositories.
    pub fn new(warehouses: Arc<W>, rules: Arc<F>) -> Self {
        Self { warehouses, rules }
    }

    /// Compute the fee components for an item.
    ///
    /// `attributes` is walked in the caller-supplied order; order affects
    /// only how totals accumulate, not the result. The `price` attribute
    /// matches rules on code, country, and partner alone.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::Unresolvable`] as soon as any attribute has no
    /// matching rule and no default.
    pub fn compute(
        &self,
        price: Decimal,
        shipping_cost_usd: Decimal,
        destination_country: &CountryCode,
        partner: &Partner,
        attributes: &[(AttributeCode, String)],
    ) -> Result<FeeResult, FeeError> {
        let tax_percent = self.resolve_tax_percent(destination_country);
        let base_price =
            price * (Decimal::ONE + tax_percent / Decimal::ONE_HUNDRED) + shipping_cost_usd;

        let mut fixed_total = Decimal::ZERO;
        let mut percent_total = Decimal::ZERO;

        for (code, value) in attributes {
            let rule = if code.as_str() == "price" {
                self.rules.find_by_code(code, destination_country, partner)
            } else {
                self.rules.find(code, value, destination_country, partner)
            };
            let rule = rule
                .or_else(|| self.default_rule(code, value, partner))
                .ok_or_else(|| FeeError::Unresolvable {
                    code: code.clone(),
                    value: value.clone(),
                })?;

            match rule.kind {
                FeeKind::Percent => match rule.minimum {
                    Some(minimum)
                        if base_price * rule.amount / Decimal::ONE_HUNDRED < minimum =>
                    {
                        fixed_total += minimum;
                    }
                    _ => percent_total += rule.amount,
                },
                FeeKind::Fixed => fixed_total += rule.amount,
            }
        }

        Ok(FeeResult {
            tax_percent,
            fixed_total,
            percent_total,
            base_price,
        })
    }

    /// Warehouse tax for a destination; zero or multiple matches degrade to
    /// the designated default warehouse.
    fn resolve_tax_percent(&self, destination_country: &CountryCode) -> Decimal {
        let mut matches = self.warehouses.find_by_country(destination_country);
        if matches.len() == 1 {
            matches.swap_remove(0).tax_percent
        } else {
            self.warehouses.default_warehouse().tax_percent
        }
    }

    /// Layered defaults: the country scope is widened to the wildcard first,
    /// then the value is widened too, both within the partner's schedule.
    fn default_rule(
        &self,
        code: &AttributeCode,
        value: &str,
        partner: &Partner,
    ) -> Option<FeeRule> {
        let wildcard = CountryCode::any();
        self.rules
            .find(code, value, &wildcard, partner)
            .or_else(|| self.rules.find(code, "", &wildcard, partner))
    }
}
