//! Carrier Rate Port (Driven Port)
//!
//! Interface for fetching live shipping-rate quotes from the carrier.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::credential_port::Credential;
use crate::domain::shared::{CountryCode, PostalCode};
use crate::domain::shipping::{ItemRecord, RateResponse};

/// A rate-quote request for one item and destination.
///
/// Serializes to the carrier's wire field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuoteRequest {
    /// The item's legacy identifier, as the carrier addresses items.
    #[serde(rename = "itemId")]
    pub item_legacy_id: String,
    /// Destination country.
    #[serde(rename = "destinationCountryCode")]
    pub destination_country: CountryCode,
    /// Destination postal code.
    #[serde(rename = "destinationPostalCode")]
    pub destination_postal: PostalCode,
    /// Units being purchased.
    pub quantity: u32,
}

impl RateQuoteRequest {
    /// Build a quote request for an item.
    #[must_use]
    pub fn for_item(
        item: &ItemRecord,
        quantity: u32,
        destination_country: CountryCode,
        destination_postal: PostalCode,
    ) -> Self {
        Self {
            item_legacy_id: item.item_id.legacy_id().to_string(),
            destination_country,
            destination_postal,
            quantity,
        }
    }
}

/// Carrier port error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CarrierError {
    /// The credential was rejected as invalid or expired. Recoverable by
    /// exactly one refresh-and-retry.
    #[error("carrier credential expired or invalid")]
    AuthExpired,

    /// Network-level failure. Not retried by this engine.
    #[error("carrier transport error: {message}")]
    Transport {
        /// Error details.
        message: String,
    },

    /// The response body could not be parsed.
    #[error("carrier response parse error: {message}")]
    Parse {
        /// Error details.
        message: String,
    },

    /// The carrier rejected the request at the HTTP level.
    #[error("carrier API error: {message}")]
    Api {
        /// Error details.
        message: String,
    },
}

/// Port for carrier rate lookups.
///
/// One outbound call per invocation; the single auth refresh-and-retry is
/// orchestrated by the caller.
#[async_trait]
pub trait CarrierPort: Send + Sync {
    /// Fetch rate quotes for an item and destination.
    async fn fetch_rates(
        &self,
        request: &RateQuoteRequest,
        credential: &Credential,
    ) -> Result<RateResponse, CarrierError>;
}
