//! Compute Landed Fee Use Case
//!
//! Wraps the fee resolver and combines its components into the final landed
//! total a caller can display or charge.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::fees::{FeeError, FeeResolver, FeeResult, FeeRuleRepository, WarehouseRepository};
use crate::domain::shared::{AttributeCode, CountryCode, Partner};

/// Input for one fee computation.
#[derive(Debug, Clone)]
pub struct ComputeLandedFeeRequest {
    /// Item price in USD, before tax and shipping.
    pub price: Decimal,
    /// Resolved shipping cost in USD.
    pub shipping_cost_usd: Decimal,
    /// Destination country.
    pub destination_country: CountryCode,
    /// Partner whose fee schedule applies.
    pub partner: Partner,
    /// Item attributes the fee schedule keys on, in display order.
    pub attributes: Vec<(AttributeCode, String)>,
}

/// A fee result combined into a chargeable total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandedQuote {
    /// The resolved fee components.
    pub fee: FeeResult,
    /// `base_price + fixed_total + base_price * percent_total / 100`.
    pub total: Decimal,
}

/// Use case for computing an item's landed cost.
pub struct ComputeLandedFeeUseCase<W, F>
where
    W: WarehouseRepository,
    F: FeeRuleRepository,
{
    resolver: FeeResolver<W, F>,
}

impl<W, F> ComputeLandedFeeUseCase<W, F>
where
    W: WarehouseRepository,
    F: FeeRuleRepository,
{
    /// Create the use case over reference-data repositories.
    pub fn new(warehouses: Arc<W>, rules: Arc<F>) -> Self {
        Self {
            resolver: FeeResolver::new(warehouses, rules),
        }
    }

    /// Compute the landed quote for the request.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::Unresolvable`] when any attribute has no matching
    /// rule and no default; no partial quote is produced.
    pub fn execute(&self, request: &ComputeLandedFeeRequest) -> Result<LandedQuote, FeeError> {
        let fee = self.resolver.compute(
            request.price,
            request.shipping_cost_usd,
            &request.destination_country,
            &request.partner,
            &request.attributes,
        )?;
        let total =
            fee.base_price + fee.fixed_total + fee.base_price * fee.percent_total / Decimal::ONE_HUNDRED;
        debug!(
            base_price = %fee.base_price,
            fixed = %fee.fixed_total,
            percent = %fee.percent_total,
            %total,
            "landed fee computed"
        );
        Ok(LandedQuote { fee, total })
    }
}
