//! In-memory rate cache.
//!
//! A process-local [`RateCachePort`] backed by a `RwLock`ed map with per-entry
//! expiry. Expired entries are dropped lazily on read.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::application::ports::{CacheError, RateCacheKey, RateCachePort};
use crate::domain::shipping::RateResponse;

struct CacheEntry {
    response: RateResponse,
    expires_at: Instant,
}

/// In-memory, TTL-expiring rate cache.
#[derive(Default)]
pub struct InMemoryRateCache {
    entries: RwLock<HashMap<RateCacheKey, CacheEntry>>,
}

impl InMemoryRateCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        match self.entries.read() {
            Ok(entries) => entries.values().filter(|e| e.expires_at > now).count(),
            Err(_) => 0,
        }
    }

    /// Whether the cache holds no live entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

#[async_trait]
impl RateCachePort for InMemoryRateCache {
    async fn get(&self, key: &RateCacheKey) -> Result<Option<RateResponse>, CacheError> {
        let entries = self.entries.read().map_err(|_| CacheError::Unavailable {
            message: "cache lock poisoned".to_string(),
        })?;
        Ok(entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.response.clone()))
    }

    async fn set(
        &self,
        key: &RateCacheKey,
        response: &RateResponse,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| CacheError::Unavailable {
            message: "cache lock poisoned".to_string(),
        })?;
        entries.insert(
            key.clone(),
            CacheEntry {
                response: response.clone(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }
}
