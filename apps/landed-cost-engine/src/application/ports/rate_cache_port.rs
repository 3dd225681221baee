//! Rate Cache Port (Driven Port)
//!
//! Interface for caching carrier rate responses per item and destination.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::shared::{CountryCode, ItemId, PostalCode};
use crate::domain::shipping::RateResponse;

/// Cache key for one item and destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RateCacheKey {
    /// The item being quoted.
    pub item_id: ItemId,
    /// Destination country.
    pub destination_country: CountryCode,
    /// Destination postal code.
    pub destination_postal: PostalCode,
}

impl RateCacheKey {
    /// Create a cache key.
    #[must_use]
    pub fn new(
        item_id: ItemId,
        destination_country: CountryCode,
        destination_postal: PostalCode,
    ) -> Self {
        Self {
            item_id,
            destination_country,
            destination_postal,
        }
    }
}

impl fmt::Display for RateCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shipping:{}:{}:{}",
            self.item_id, self.destination_country, self.destination_postal
        )
    }
}

/// Rate cache error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    /// The cache backend could not be reached. Callers treat this as a miss.
    #[error("rate cache unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

/// Port for the rate-response cache.
#[async_trait]
pub trait RateCachePort: Send + Sync {
    /// Look up a cached rate response.
    async fn get(&self, key: &RateCacheKey) -> Result<Option<RateResponse>, CacheError>;

    /// Store a rate response with a time-to-live.
    async fn set(
        &self,
        key: &RateCacheKey,
        response: &RateResponse,
        ttl: Duration,
    ) -> Result<(), CacheError>;
}
