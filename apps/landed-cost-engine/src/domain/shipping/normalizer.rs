//! Shipping Option Normalizer.
//!
//! Turns heterogeneous, partially-present shipping data (options embedded in
//! a listing, or a live carrier rate response) into one canonical
//! [`ShippingOption`]. Every path produces *some* option; missing or
//! malformed data degrades to the synthesized Local Pickup fallback rather
//! than erroring.

use rust_decimal::Decimal;

use crate::domain::shared::{CurrencyAmount, REFERENCE_CURRENCY};
use crate::domain::shipping::option::{
    DeliveryMethod, EmbeddedOption, ShippingOption, is_excluded_service,
};
use crate::domain::shipping::response::{
    CarrierOption, CostSummary, RateResponse, ServiceOptions,
};

/// A normalized shipping option together with the delivery-method tags that
/// apply to the listing after resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedShipping {
    /// The selected option.
    pub option: ShippingOption,
    /// Delivery-method tags, merged with any the listing already carried.
    pub delivery_methods: Vec<DeliveryMethod>,
}

impl ResolvedShipping {
    /// The USD shipping cost to feed into fee computation. A cost in any
    /// other currency contributes zero.
    #[must_use]
    pub fn usd_shipping_cost(&self) -> Decimal {
        if self.option.cost.is_usd() {
            self.option.cost.value
        } else {
            Decimal::ZERO
        }
    }
}

/// Select the cheapest eligible option from a listing's embedded options.
///
/// A single option with a service name is used as-is. Otherwise a greedy
/// linear scan starts from the first option (service defaulting to
/// `"unknown"`) and replaces the incumbent whenever a later option has a
/// service outside the Local Pickup/Freight exclusion and a strictly lower
/// cost; ties keep the earliest-seen option. Options lacking a cost are
/// never selected as replacements but may remain the incumbent.
///
/// Costs are compared as raw numeric values without currency normalization;
/// embedded lists are single-currency in practice and no conversion is
/// attempted. This is a documented approximation.
///
/// Returns `None` only for an empty list.
#[must_use]
pub fn select_embedded_option(options: &[EmbeddedOption]) -> Option<ShippingOption> {
    let first = options.first()?;

    let chosen = if options.len() == 1 && first.service_code.is_some() {
        first
    } else {
        let mut incumbent = first;
        let mut incumbent_price = first
            .cost
            .as_ref()
            .map_or(Decimal::ZERO, |cost| cost.value);
        for candidate in &options[1..] {
            if let (Some(service), Some(cost)) = (&candidate.service_code, &candidate.cost) {
                if !is_excluded_service(service) && cost.value < incumbent_price {
                    incumbent = candidate;
                    incumbent_price = cost.value;
                }
            }
        }
        incumbent
    };

    let service_code = chosen
        .service_code
        .clone()
        .unwrap_or_else(|| "unknown".to_string());
    let delivery_method = if is_excluded_service(&service_code) {
        DeliveryMethod::SellerArrangedLocalPickup
    } else {
        DeliveryMethod::ShipToHome
    };

    Some(ShippingOption {
        cost: chosen.cost.clone().unwrap_or_else(CurrencyAmount::usd_zero),
        additional_cost_per_unit: chosen.additional_cost_per_unit.clone(),
        min_delivery_estimate: chosen.min_delivery_estimate.clone(),
        max_delivery_estimate: chosen.max_delivery_estimate.clone(),
        service_code,
        delivery_method,
    })
}

/// Normalize a carrier rate response into one shipping option, merging
/// delivery-method tags with any the listing already carried.
///
/// Domestic options are consulted first, then international ones under the
/// same rule; when neither yields a winner the synthesized Local Pickup
/// option is returned. Failure acks and missing blocks all land on the same
/// fallback.
#[must_use]
pub fn normalize_rate_response(
    response: &RateResponse,
    existing_tags: Option<&[DeliveryMethod]>,
) -> ResolvedShipping {
    let winner = pick_winner(response);
    let eligible = winner.as_ref().is_some_and(SelectedQuote::is_eligible);
    let delivery_methods = merge_delivery_tags(existing_tags, eligible);

    let option = match winner {
        Some(quote) => ShippingOption {
            service_code: quote
                .service_name
                .unwrap_or_else(|| "unknown".to_string()),
            cost: quote.cost,
            additional_cost_per_unit: quote.additional_cost_per_unit,
            min_delivery_estimate: quote.min_estimate,
            max_delivery_estimate: quote.max_estimate,
            delivery_method: if eligible {
                DeliveryMethod::ShipToHome
            } else {
                DeliveryMethod::SellerArrangedLocalPickup
            },
        },
        None => ShippingOption::local_pickup(),
    };

    ResolvedShipping {
        option,
        delivery_methods,
    }
}

/// Merge delivery-method tags per the resolution outcome.
///
/// No availability data synthesizes `SELLER_ARRANGED_LOCAL_PICKUP`. An
/// eligible winner appends `SHIP_TO_HOME`; an ineligible one appends
/// `SELLER_ARRANGED_LOCAL_PICKUP`. Existing tags are never duplicated.
#[must_use]
pub fn merge_delivery_tags(
    existing: Option<&[DeliveryMethod]>,
    winner_eligible: bool,
) -> Vec<DeliveryMethod> {
    let mut tags = existing.map(<[DeliveryMethod]>::to_vec).unwrap_or_default();
    if tags.is_empty() {
        tags.push(DeliveryMethod::SellerArrangedLocalPickup);
    }
    let tag = if winner_eligible {
        DeliveryMethod::ShipToHome
    } else {
        DeliveryMethod::SellerArrangedLocalPickup
    };
    if !tags.contains(&tag) {
        tags.push(tag);
    }
    tags
}

/// The quote chosen before canonicalization.
struct SelectedQuote {
    service_name: Option<String>,
    cost: CurrencyAmount,
    additional_cost_per_unit: Option<CurrencyAmount>,
    min_estimate: Option<String>,
    max_estimate: Option<String>,
}

impl SelectedQuote {
    /// Eligible quotes carry a service name outside the exclusion list and
    /// upgrade the delivery method to ship-to-home.
    fn is_eligible(&self) -> bool {
        self.service_name
            .as_deref()
            .is_some_and(|name| !is_excluded_service(name))
    }

    fn from_carrier_option(option: &CarrierOption, cost: CurrencyAmount) -> Self {
        Self {
            service_name: option.shipping_service_name.clone(),
            cost,
            additional_cost_per_unit: option
                .shipping_service_additional_cost
                .as_ref()
                .map(|c| c.to_amount(REFERENCE_CURRENCY)),
            min_estimate: option.estimated_delivery_min_time.clone(),
            max_estimate: option.estimated_delivery_max_time.clone(),
        }
    }
}

fn pick_winner(response: &RateResponse) -> Option<SelectedQuote> {
    if !response.is_success() {
        return None;
    }
    let details = response.shipping_details.as_ref()?;
    let summary = response.cost_summary.as_ref();
    let set = details.domestic.as_ref().or(details.international.as_ref())?;

    match set {
        ServiceOptions::One(option) => normalize_single(option, summary),
        ServiceOptions::Many(options) => normalize_list(options, summary),
    }
}

/// Single-option case. A non-USD (or currency-less) cost is overwritten with
/// the response's top-level USD summary cost, which is the carrier's own USD
/// normalization of the same quote. No FX conversion happens here.
fn normalize_single(
    option: &CarrierOption,
    summary: Option<&CostSummary>,
) -> Option<SelectedQuote> {
    let service = option.shipping_service_name.as_deref()?;
    if is_excluded_service(service) {
        // A lone Local Pickup/Freight quote is discarded, price and all.
        return None;
    }

    let cost = match &option.shipping_service_cost {
        Some(quoted) if quoted.is_usd() => quoted.to_amount(REFERENCE_CURRENCY),
        Some(_) => summary?.shipping_service_cost.to_amount(REFERENCE_CURRENCY),
        None => CurrencyAmount::usd_zero(),
    };

    Some(SelectedQuote::from_carrier_option(option, cost))
}

/// List case. Only USD-denominated, non-excluded options participate in the
/// numeric comparison; if none exist the USD summary cost is used instead,
/// backfilling delivery estimates from whichever original option matches the
/// summary's listed cost.
fn normalize_list(
    options: &[CarrierOption],
    summary: Option<&CostSummary>,
) -> Option<SelectedQuote> {
    let mut best: Option<(&CarrierOption, Decimal)> = None;
    for option in options {
        let Some(service) = option.shipping_service_name.as_deref() else {
            continue;
        };
        let Some(cost) = option.shipping_service_cost.as_ref() else {
            continue;
        };
        if is_excluded_service(service) || !cost.is_usd() {
            continue;
        }
        match best {
            Some((_, incumbent)) if cost.value >= incumbent => {}
            _ => best = Some((option, cost.value)),
        }
    }

    if let Some((option, value)) = best {
        return Some(SelectedQuote::from_carrier_option(
            option,
            CurrencyAmount::usd(value),
        ));
    }

    // No USD option at all: fall back to the top-level USD summary.
    let summary = summary?;
    let mut min_estimate = summary.estimated_delivery_min_time.clone();
    let mut max_estimate = summary.estimated_delivery_max_time.clone();
    if min_estimate.is_none() && max_estimate.is_none() {
        if let Some(listed) = &summary.listed_shipping_service_cost {
            if let Some(source) = options.iter().find(|option| {
                option.shipping_service_cost.as_ref().is_some_and(|cost| {
                    cost.currency == listed.currency && cost.value == listed.value
                })
            }) {
                min_estimate = source.estimated_delivery_min_time.clone();
                max_estimate = source.estimated_delivery_max_time.clone();
            }
        }
    }

    Some(SelectedQuote {
        service_name: summary.shipping_service_name.clone(),
        cost: summary.shipping_service_cost.to_amount(REFERENCE_CURRENCY),
        additional_cost_per_unit: None,
        min_estimate,
        max_estimate,
    })
}
