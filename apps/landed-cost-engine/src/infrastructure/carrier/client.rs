//! Carrier HTTP client.
//!
//! Adapter implementing [`CarrierPort`] over the carrier's rate-quote REST
//! endpoint.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::application::ports::{CarrierError, CarrierPort, Credential, RateQuoteRequest};
use crate::domain::shipping::RateResponse;
use crate::infrastructure::carrier::config::CarrierConfig;
use crate::infrastructure::carrier::error::CarrierApiError;

/// HTTP client for the carrier rate API.
pub struct CarrierHttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl CarrierHttpClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierApiError::Network`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &CarrierConfig) -> Result<Self, CarrierApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    #[instrument(skip(self, credential), fields(item = %request.item_legacy_id))]
    async fn request_rates(
        &self,
        request: &RateQuoteRequest,
        credential: &Credential,
    ) -> Result<RateResponse, CarrierApiError> {
        let url = format!("{}/rates/quote", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&credential.token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(CarrierApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(CarrierApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: RateResponse = serde_json::from_str(&body)?;
        if parsed.is_invalid_token_failure() {
            return Err(CarrierApiError::InvalidToken);
        }

        debug!(success = parsed.is_success(), "carrier rate response received");
        Ok(parsed)
    }
}

#[async_trait]
impl CarrierPort for CarrierHttpClient {
    async fn fetch_rates(
        &self,
        request: &RateQuoteRequest,
        credential: &Credential,
    ) -> Result<RateResponse, CarrierError> {
        self.request_rates(request, credential)
            .await
            .map_err(Into::into)
    }
}
