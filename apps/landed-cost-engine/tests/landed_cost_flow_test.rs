//! Landed Cost Flow Integration Tests
//!
//! End-to-end flows wiring the in-memory adapters into the use cases:
//! shipping resolution through cache and credential refresh, followed by fee
//! computation on the resolved USD cost.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use landed_cost_engine::application::ports::{
    AuthError, CarrierError, CarrierPort, Credential, CredentialProviderPort, ForensicContext,
    ForensicSinkPort, NoOpForensicSink, RateQuoteRequest,
};
use landed_cost_engine::application::use_cases::{
    ComputeLandedFeeRequest, ComputeLandedFeeUseCase, ResolveShippingRequest,
    ResolveShippingUseCase,
};
use landed_cost_engine::domain::fees::{FeeKind, FeeRule, Warehouse};
use landed_cost_engine::domain::shared::{
    AttributeCode, CountryCode, CurrencyAmount, ItemId, Partner, PostalCode,
};
use landed_cost_engine::domain::shipping::{DeliveryMethod, EmbeddedOption, RateResponse};
use landed_cost_engine::infrastructure::cache::InMemoryRateCache;
use landed_cost_engine::infrastructure::reference::{
    InMemoryFeeRuleRepository, InMemoryWarehouseRepository,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Scripted carrier: returns queued results in order, counting calls.
struct ScriptedCarrier {
    responses: Mutex<Vec<Result<RateResponse, CarrierError>>>,
    calls: AtomicU32,
}

impl ScriptedCarrier {
    fn new(responses: Vec<Result<RateResponse, CarrierError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl CarrierPort for ScriptedCarrier {
    async fn fetch_rates(
        &self,
        _request: &RateQuoteRequest,
        _credential: &Credential,
    ) -> Result<RateResponse, CarrierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses.lock().unwrap().remove(0)
    }
}

struct StaticCredentials {
    refresh_to: Option<String>,
    refreshes: AtomicU32,
}

#[async_trait]
impl CredentialProviderPort for StaticCredentials {
    async fn default_credential(&self, automated: bool) -> Result<Credential, AuthError> {
        Ok(Credential::new("initial-token", automated))
    }

    async fn refresh(&self, _credential: &Credential) -> Result<Option<String>, AuthError> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        Ok(self.refresh_to.clone())
    }
}

#[derive(Default)]
struct CapturingSink {
    contexts: Mutex<Vec<ForensicContext>>,
}

#[async_trait]
impl ForensicSinkPort for CapturingSink {
    async fn record(&self, _payload: serde_json::Value, context: ForensicContext) {
        self.contexts.lock().unwrap().push(context);
    }
}

fn usd_success_response(service: &str, value: Decimal) -> RateResponse {
    serde_json::from_value(serde_json::json!({
        "ack": "Success",
        "shippingDetails": {
            "shippingServiceOptions": [{
                "shippingServiceName": service,
                "shippingServiceCost": {"currency": "USD", "value": value.to_string()}
            }]
        }
    }))
    .expect("valid rate response")
}

fn shipping_request(item_id: &str) -> ResolveShippingRequest {
    let mut item = landed_cost_engine::ItemRecord::new(ItemId::new(item_id));
    item.location_country = Some(CountryCode::new("JP"));
    ResolveShippingRequest {
        item,
        quantity: 1,
        destination_country: CountryCode::new("US"),
        destination_postal: PostalCode::new("97201"),
        is_automated: true,
    }
}

fn fee_use_case() -> ComputeLandedFeeUseCase<InMemoryWarehouseRepository, InMemoryFeeRuleRepository>
{
    let warehouses = InMemoryWarehouseRepository::new(Warehouse::with_state(
        CountryCode::new("US"),
        "OR",
        dec!(0),
    ))
    .with_warehouse(Warehouse::new(CountryCode::new("JP"), dec!(10)));
    let rules = InMemoryFeeRuleRepository::new().with_rule(FeeRule {
        code: AttributeCode::new("weight"),
        value: "heavy".to_string(),
        country: CountryCode::new("JP"),
        partner: Partner::new("acme"),
        kind: FeeKind::Percent,
        amount: dec!(8),
        minimum: Some(dec!(3.00)),
    });
    ComputeLandedFeeUseCase::new(Arc::new(warehouses), Arc::new(rules))
}

#[tokio::test]
async fn resolves_live_rates_then_computes_the_landed_total() {
    let carrier = Arc::new(ScriptedCarrier::new(vec![Ok(usd_success_response(
        "UPSGround",
        dec!(5.00),
    ))]));
    let resolve = ResolveShippingUseCase::new(
        Arc::clone(&carrier),
        Arc::new(InMemoryRateCache::new()),
        Arc::new(StaticCredentials {
            refresh_to: None,
            refreshes: AtomicU32::new(0),
        }),
        Arc::new(NoOpForensicSink),
        Duration::from_secs(60),
    );

    let resolved = resolve.execute(&shipping_request("v1|100|0")).await.unwrap();
    assert_eq!(resolved.option.cost.value, dec!(5.00));
    assert!(resolved.delivery_methods.contains(&DeliveryMethod::ShipToHome));

    // price 20.00, ship 5.00, JP tax 10% -> base 27.00;
    // 8% of 27.00 = 2.16 < 3.00 minimum -> flat 3.00; total 30.00.
    let quote = fee_use_case()
        .execute(&ComputeLandedFeeRequest {
            price: dec!(20.00),
            shipping_cost_usd: resolved.usd_shipping_cost(),
            destination_country: CountryCode::new("JP"),
            partner: Partner::new("acme"),
            attributes: vec![(AttributeCode::new("weight"), "heavy".to_string())],
        })
        .unwrap();
    assert_eq!(quote.fee.base_price, dec!(27.00));
    assert_eq!(quote.total, dec!(30.00));
}

#[tokio::test]
async fn second_resolution_is_served_from_cache() {
    let carrier = Arc::new(ScriptedCarrier::new(vec![Ok(usd_success_response(
        "FedExHome",
        dec!(9.99),
    ))]));
    let resolve = ResolveShippingUseCase::new(
        Arc::clone(&carrier),
        Arc::new(InMemoryRateCache::new()),
        Arc::new(StaticCredentials {
            refresh_to: None,
            refreshes: AtomicU32::new(0),
        }),
        Arc::new(NoOpForensicSink),
        Duration::from_secs(60),
    );

    let request = shipping_request("v1|101|0");
    let first = resolve.execute(&request).await.unwrap();
    let second = resolve.execute(&request).await.unwrap();

    assert_eq!(first.option, second.option);
    assert_eq!(carrier.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn expired_token_is_refreshed_once_and_the_call_retried() {
    let carrier = Arc::new(ScriptedCarrier::new(vec![
        Err(CarrierError::AuthExpired),
        Ok(usd_success_response("USPSPriority", dec!(12.00))),
    ]));
    let credentials = Arc::new(StaticCredentials {
        refresh_to: Some("rotated-token".to_string()),
        refreshes: AtomicU32::new(0),
    });
    let resolve = ResolveShippingUseCase::new(
        Arc::clone(&carrier),
        Arc::new(InMemoryRateCache::new()),
        Arc::clone(&credentials),
        Arc::new(NoOpForensicSink),
        Duration::from_secs(60),
    );

    let resolved = resolve.execute(&shipping_request("v1|102|0")).await.unwrap();

    assert_eq!(resolved.option.cost.value, dec!(12.00));
    assert_eq!(carrier.calls.load(Ordering::SeqCst), 2);
    assert_eq!(credentials.refreshes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unclassified_failure_is_recorded_and_degrades_to_local_pickup() {
    let failure: RateResponse = serde_json::from_value(serde_json::json!({
        "ack": "Failure",
        "errors": {"shortMessage": "Item not found."}
    }))
    .unwrap();
    let carrier = Arc::new(ScriptedCarrier::new(vec![Ok(failure)]));
    let sink = Arc::new(CapturingSink::default());
    let resolve = ResolveShippingUseCase::new(
        Arc::clone(&carrier),
        Arc::new(InMemoryRateCache::new()),
        Arc::new(StaticCredentials {
            refresh_to: None,
            refreshes: AtomicU32::new(0),
        }),
        Arc::clone(&sink),
        Duration::from_secs(60),
    );

    let resolved = resolve.execute(&shipping_request("v1|103|0")).await.unwrap();

    assert!(resolved.option.is_local_pickup());
    assert_eq!(resolved.option.cost.value, Decimal::ZERO);
    assert_eq!(
        resolved.delivery_methods,
        vec![DeliveryMethod::SellerArrangedLocalPickup]
    );
    let contexts = sink.contexts.lock().unwrap();
    assert_eq!(contexts.len(), 1);
    assert!(contexts[0].automated);
}

#[tokio::test]
async fn domestic_embedded_options_resolve_without_any_port_traffic() {
    let carrier = Arc::new(ScriptedCarrier::new(Vec::new()));
    let resolve = ResolveShippingUseCase::new(
        Arc::clone(&carrier),
        Arc::new(InMemoryRateCache::new()),
        Arc::new(StaticCredentials {
            refresh_to: None,
            refreshes: AtomicU32::new(0),
        }),
        Arc::new(NoOpForensicSink),
        Duration::from_secs(60),
    );

    let mut request = shipping_request("v1|104|0");
    request.item.location_country = Some(CountryCode::new("US"));
    request.item.shipping_options = vec![
        EmbeddedOption {
            service_code: Some("USPSPriority".to_string()),
            cost: Some(CurrencyAmount::usd(dec!(12.50))),
            ..EmbeddedOption::default()
        },
        EmbeddedOption {
            service_code: Some("UPSGround".to_string()),
            cost: Some(CurrencyAmount::usd(dec!(9.99))),
            ..EmbeddedOption::default()
        },
        EmbeddedOption {
            service_code: Some("Local Pickup".to_string()),
            cost: Some(CurrencyAmount::usd(dec!(0.00))),
            ..EmbeddedOption::default()
        },
    ];

    let resolved = resolve.execute(&request).await.unwrap();

    // Local Pickup is excluded from the scan even at 0.00.
    assert_eq!(resolved.option.service_code, "UPSGround");
    assert_eq!(resolved.option.cost.value, dec!(9.99));
    assert_eq!(carrier.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn local_pickup_fallback_contributes_zero_shipping_to_the_fee() {
    let quote = fee_use_case()
        .execute(&ComputeLandedFeeRequest {
            price: dec!(100.00),
            shipping_cost_usd: dec!(0),
            destination_country: CountryCode::new("JP"),
            partner: Partner::new("acme"),
            attributes: vec![(AttributeCode::new("weight"), "heavy".to_string())],
        })
        .unwrap();

    // base 110.00; 8% of 110.00 = 8.80 >= 3.00 so percent applies.
    assert_eq!(quote.fee.base_price, dec!(110.00));
    assert_eq!(quote.total, dec!(118.80));
}
