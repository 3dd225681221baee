//! Carrier rate-response data model.
//!
//! Mirrors the carrier's quote payload closely enough to deserialize it
//! directly; the single-vs-list ambiguity of the upstream format is made
//! explicit with [`ServiceOptions`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::CurrencyAmount;

/// Carrier acknowledgment of a rate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ack {
    /// The response carries usable rate data.
    Success,
    /// The request was rejected; see the error block.
    Failure,
    /// Anything the carrier may add later.
    #[serde(other)]
    Unknown,
}

/// Error block of a failed rate response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseError {
    /// Carrier's short error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_message: Option<String>,
}

/// A cost as quoted on the wire. Unlike [`CurrencyAmount`], the currency may
/// be absent; such entries are ignored for USD comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotedCost {
    /// 3-letter currency code, when quoted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Numeric value.
    pub value: Decimal,
}

impl QuotedCost {
    /// Whether this cost is quoted in USD. A missing currency is not USD.
    #[must_use]
    pub fn is_usd(&self) -> bool {
        self.currency.as_deref() == Some(crate::domain::shared::REFERENCE_CURRENCY)
    }

    /// Canonicalize, falling back to `fallback_currency` when the entry
    /// carries none.
    #[must_use]
    pub fn to_amount(&self, fallback_currency: &str) -> CurrencyAmount {
        CurrencyAmount::new(
            self.value,
            self.currency
                .clone()
                .unwrap_or_else(|| fallback_currency.to_string()),
        )
    }
}

/// One rate-quote option from the carrier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierOption {
    /// Carrier service name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_service_name: Option<String>,
    /// First-unit cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_service_cost: Option<QuotedCost>,
    /// Per-unit surcharge beyond the first unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_service_additional_cost: Option<QuotedCost>,
    /// Earliest delivery estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_min_time: Option<String>,
    /// Latest delivery estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_max_time: Option<String>,
}

/// Either a single option object or a list of them.
///
/// The upstream format emits an object when one option exists and an array
/// otherwise; modeling that as a tagged variant keeps the normalizer free of
/// shape probing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceOptions {
    /// Exactly one option.
    One(CarrierOption),
    /// Zero or more options.
    Many(Vec<CarrierOption>),
}

/// Option blocks of a rate response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    /// Domestic options (seller's country to same country).
    #[serde(
        rename = "shippingServiceOptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub domestic: Option<ServiceOptions>,
    /// International options, quoted when the seller does not ship
    /// domestically.
    #[serde(
        rename = "internationalShippingServiceOptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub international: Option<ServiceOptions>,
}

/// Top-level cost summary. Always quoted in USD by the carrier, which makes
/// it the fallback when no per-option USD quote exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    /// Service name the summary was computed from, when quoted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_service_name: Option<String>,
    /// USD-normalized total.
    pub shipping_service_cost: QuotedCost,
    /// The originally listed cost, in the seller's currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listed_shipping_service_cost: Option<QuotedCost>,
    /// Earliest delivery estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_min_time: Option<String>,
    /// Latest delivery estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_max_time: Option<String>,
}

/// A complete carrier rate response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResponse {
    /// Acknowledgment.
    pub ack: Ack,
    /// Error block, present on failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ResponseError>,
    /// Quoted options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<ShippingDetails>,
    /// USD cost summary.
    #[serde(
        rename = "shippingCostSummary",
        skip_serializing_if = "Option::is_none"
    )]
    pub cost_summary: Option<CostSummary>,
}

impl RateResponse {
    /// Whether the carrier acknowledged the request.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.ack == Ack::Success
    }

    /// Whether this is a failure caused by an invalid or expired
    /// authentication token, the one recoverable failure class.
    #[must_use]
    pub fn is_invalid_token_failure(&self) -> bool {
        self.ack == Ack::Failure
            && self
                .errors
                .as_ref()
                .and_then(|e| e.short_message.as_deref())
                .is_some_and(|message| {
                    message.contains("Invalid token") || message.contains("token expired")
                })
    }
}
