//! Resolve Shipping Use Case
//!
//! Resolves the cheapest valid shipping option for an item and destination.
//! Embedded options on a domestic listing are used directly; everything else
//! goes through the cached carrier rate lookup with a single credential
//! refresh-and-retry on auth failure.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::application::ports::{
    AuthError, CarrierError, CarrierPort, Credential, CredentialProviderPort, ForensicContext,
    ForensicSinkPort, RateCacheKey, RateCachePort, RateQuoteRequest,
};
use crate::domain::shared::{CountryCode, PostalCode};
use crate::domain::shipping::{
    ItemRecord, RateResponse, ResolvedShipping, normalize_rate_response, select_embedded_option,
};

/// Input for one shipping resolution.
#[derive(Debug, Clone)]
pub struct ResolveShippingRequest {
    /// The item being quoted.
    pub item: ItemRecord,
    /// Units being purchased.
    pub quantity: u32,
    /// Destination country.
    pub destination_country: CountryCode,
    /// Destination postal code.
    pub destination_postal: PostalCode,
    /// Whether the caller is an automated (bot) request. Selects the
    /// credential partition.
    pub is_automated: bool,
}

/// Shipping resolution error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ShippingResolutionError {
    /// Credential acquisition or refresh failed.
    #[error("credential error: {0}")]
    Credential(#[from] AuthError),

    /// The carrier call failed in a non-recoverable way.
    #[error("carrier error: {0}")]
    Carrier(#[from] CarrierError),

    /// The credential expired and the provider could not issue a new token.
    #[error("credential expired and could not be refreshed")]
    CredentialNotRefreshable,
}

/// Use case for resolving an item's shipping option.
pub struct ResolveShippingUseCase<C, K, A, S>
where
    C: CarrierPort,
    K: RateCachePort,
    A: CredentialProviderPort,
    S: ForensicSinkPort,
{
    carrier: Arc<C>,
    cache: Arc<K>,
    credentials: Arc<A>,
    forensics: Arc<S>,
    cache_ttl: Duration,
}

impl<C, K, A, S> ResolveShippingUseCase<C, K, A, S>
where
    C: CarrierPort,
    K: RateCachePort,
    A: CredentialProviderPort,
    S: ForensicSinkPort,
{
    /// Create the use case with its collaborators.
    pub fn new(
        carrier: Arc<C>,
        cache: Arc<K>,
        credentials: Arc<A>,
        forensics: Arc<S>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            carrier,
            cache,
            credentials,
            forensics,
            cache_ttl,
        }
    }

    /// Resolve the shipping option for the request.
    ///
    /// Always yields a [`ResolvedShipping`] when the carrier pipeline
    /// completes; unusable rate data degrades to the Local Pickup fallback
    /// inside normalization rather than erroring here.
    pub async fn execute(
        &self,
        request: &ResolveShippingRequest,
    ) -> Result<ResolvedShipping, ShippingResolutionError> {
        let item = &request.item;

        if item.is_domestic_to(&request.destination_country) && item.has_embedded_options() {
            debug!(item_id = %item.item_id, "resolving from embedded options");
            if let Some(option) = select_embedded_option(&item.shipping_options) {
                return Ok(ResolvedShipping {
                    option,
                    delivery_methods: item.delivery_methods.clone().unwrap_or_default(),
                });
            }
        }

        let response = self.quote_rates(request).await?;
        Ok(normalize_rate_response(
            &response,
            item.delivery_methods.as_deref(),
        ))
    }

    /// Fetch a rate response, consulting the cache first and refreshing the
    /// credential at most once on an auth failure.
    async fn quote_rates(
        &self,
        request: &ResolveShippingRequest,
    ) -> Result<RateResponse, ShippingResolutionError> {
        let key = RateCacheKey::new(
            request.item.item_id.clone(),
            request.destination_country.clone(),
            request.destination_postal.clone(),
        );

        // A broken cache is a miss, never a failed resolution.
        match self.cache.get(&key).await {
            Ok(Some(cached)) => {
                debug!(key = %key, "rate cache hit");
                return Ok(cached);
            }
            Ok(None) => {}
            Err(error) => {
                warn!(key = %key, %error, "rate cache lookup failed, treating as miss");
            }
        }

        let credential = self
            .credentials
            .default_credential(request.is_automated)
            .await?;
        let quote = RateQuoteRequest::for_item(
            &request.item,
            request.quantity,
            request.destination_country.clone(),
            request.destination_postal.clone(),
        );

        let response = match self.carrier.fetch_rates(&quote, &credential).await {
            Ok(response) => response,
            Err(CarrierError::AuthExpired) => {
                self.retry_with_refreshed_credential(&quote, credential)
                    .await?
            }
            Err(error) => return Err(error.into()),
        };

        if response.is_success() {
            if let Err(error) = self.cache.set(&key, &response, self.cache_ttl).await {
                warn!(key = %key, %error, "failed to cache rate response");
            }
        } else if !response.is_invalid_token_failure() {
            self.record_for_forensics(request, &response).await;
        }

        Ok(response)
    }

    /// Refresh the expired credential and retry the carrier call exactly
    /// once. A second auth failure propagates as-is.
    async fn retry_with_refreshed_credential(
        &self,
        quote: &RateQuoteRequest,
        credential: Credential,
    ) -> Result<RateResponse, ShippingResolutionError> {
        info!("carrier credential expired, refreshing");
        let Some(token) = self.credentials.refresh(&credential).await? else {
            return Err(ShippingResolutionError::CredentialNotRefreshable);
        };
        let refreshed = credential.with_token(token);
        Ok(self.carrier.fetch_rates(quote, &refreshed).await?)
    }

    /// Send an unclassified carrier response to the forensic sink.
    async fn record_for_forensics(&self, request: &ResolveShippingRequest, response: &RateResponse) {
        let context = ForensicContext {
            item_id: request.item.item_id.clone(),
            quantity: request.quantity,
            automated: request.is_automated,
        };
        match serde_json::to_value(response) {
            Ok(payload) => self.forensics.record(payload, context).await,
            Err(error) => warn!(%error, "failed to serialize carrier response for forensics"),
        }
    }
}
