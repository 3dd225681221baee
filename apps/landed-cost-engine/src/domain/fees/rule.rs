//! Fee-rule reference data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{AttributeCode, CountryCode, Partner};

/// How a fee rule's value is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeKind {
    /// The value is a percentage of the base price.
    Percent,
    /// The value is a flat charge.
    Fixed,
}

/// One immutable fee rule, keyed by attribute, country, and partner.
///
/// `minimum` is only meaningful for percent rules: when the percentage of
/// the base price falls below it, the minimum is charged as a fixed amount
/// instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeRule {
    /// Attribute code (e.g. `weight`, `price`).
    pub code: AttributeCode,
    /// Attribute value the rule applies to; empty acts as a wildcard in
    /// default rules.
    pub value: String,
    /// Country scope; empty acts as the wildcard scope.
    pub country: CountryCode,
    /// Partner scope.
    pub partner: Partner,
    /// Percent or fixed.
    pub kind: FeeKind,
    /// Fee value (percent points or flat amount, per `kind`).
    pub amount: Decimal,
    /// Floor for percent rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Decimal>,
}

/// Read-only fee-rule lookup.
pub trait FeeRuleRepository: Send + Sync {
    /// Rule matching the full `(code, value, country, partner)` key.
    fn find(
        &self,
        code: &AttributeCode,
        value: &str,
        country: &CountryCode,
        partner: &Partner,
    ) -> Option<FeeRule>;

    /// Rule matching `(code, country, partner)` regardless of value; used
    /// for the `price` attribute, whose value is not part of the key.
    fn find_by_code(
        &self,
        code: &AttributeCode,
        country: &CountryCode,
        partner: &Partner,
    ) -> Option<FeeRule>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_kind_wire_names() {
        assert_eq!(serde_json::to_string(&FeeKind::Percent).unwrap(), "\"PERCENT\"");
        assert_eq!(serde_json::to_string(&FeeKind::Fixed).unwrap(), "\"FIXED\"");
    }
}
