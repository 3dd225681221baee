//! Canonical shipping option and related value objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::CurrencyAmount;

/// Service categories excluded from "cheapest shippable" comparisons.
///
/// Local Pickup and Freight are not standard parcel delivery and never win
/// a cheapest-option scan, though a Local Pickup option can still be the
/// synthesized fallback.
pub const EXCLUDED_SERVICES: [&str; 2] = ["Local Pickup", "Freight"];

/// Whether a service name is excluded from cheapest-option comparisons.
#[must_use]
pub fn is_excluded_service(name: &str) -> bool {
    EXCLUDED_SERVICES.contains(&name)
}

/// How the resolved option reaches the buyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMethod {
    /// Standard parcel delivery to the buyer's address.
    ShipToHome,
    /// Buyer collects from the seller; no parcel delivery.
    SellerArrangedLocalPickup,
}

/// Canonical output of shipping-option normalization.
///
/// The cost is always present. Its currency is USD on every carrier-lookup
/// path; embedded options keep their listed currency (see
/// [`select_embedded_option`](crate::domain::shipping::normalizer::select_embedded_option)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    /// Carrier service name, `"Local Pickup"`, or `"unknown"`.
    pub service_code: String,
    /// Shipping cost for the first unit.
    pub cost: CurrencyAmount,
    /// Per-unit surcharge applied to each unit beyond the first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_cost_per_unit: Option<CurrencyAmount>,
    /// Earliest delivery estimate, as quoted by the carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_delivery_estimate: Option<String>,
    /// Latest delivery estimate, as quoted by the carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delivery_estimate: Option<String>,
    /// How this option reaches the buyer.
    pub delivery_method: DeliveryMethod,
}

impl ShippingOption {
    /// The synthesized fallback when no usable option exists:
    /// Local Pickup at USD 0.00.
    #[must_use]
    pub fn local_pickup() -> Self {
        Self {
            service_code: "Local Pickup".to_string(),
            cost: CurrencyAmount::usd_zero(),
            additional_cost_per_unit: None,
            min_delivery_estimate: None,
            max_delivery_estimate: None,
            delivery_method: DeliveryMethod::SellerArrangedLocalPickup,
        }
    }

    /// Whether this option is a Local Pickup.
    #[must_use]
    pub fn is_local_pickup(&self) -> bool {
        self.service_code == "Local Pickup"
    }

    /// Shipping cost for `quantity` units: first-unit cost plus the
    /// per-unit surcharge for each additional unit.
    #[must_use]
    pub fn total_for_quantity(&self, quantity: u32) -> CurrencyAmount {
        let extra_units = Decimal::from(quantity.saturating_sub(1));
        let per_unit = self
            .additional_cost_per_unit
            .as_ref()
            .map_or(Decimal::ZERO, |c| c.value);
        CurrencyAmount::new(
            self.cost.value + per_unit * extra_units,
            self.cost.currency.clone(),
        )
    }
}

/// A shipping option embedded in an item/listing record, as opposed to a
/// live carrier quote. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedOption {
    /// Service name.
    #[serde(rename = "shippingServiceCode", skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,
    /// First-unit cost.
    #[serde(rename = "shippingCost", skip_serializing_if = "Option::is_none")]
    pub cost: Option<CurrencyAmount>,
    /// Per-unit surcharge beyond the first unit.
    #[serde(
        rename = "additionalShippingCostPerUnit",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_cost_per_unit: Option<CurrencyAmount>,
    /// Earliest delivery estimate.
    #[serde(
        rename = "minEstimatedDeliveryDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_delivery_estimate: Option<String>,
    /// Latest delivery estimate.
    #[serde(
        rename = "maxEstimatedDeliveryDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_delivery_estimate: Option<String>,
}
