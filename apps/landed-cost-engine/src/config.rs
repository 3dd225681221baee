//! Configuration module for the landed-cost engine.
//!
//! Loads YAML configuration for the carrier client and the rate cache, with
//! sensible defaults for every field so a minimal file (or none at all, via
//! `EngineConfig::default()`) still yields a usable configuration.
//!
//! # Usage
//!
//! ```rust,ignore
//! use landed_cost_engine::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Carrier rate API settings.
    #[serde(default)]
    pub carrier: CarrierSettings,
    /// Rate cache settings.
    #[serde(default)]
    pub cache: CacheSettings,
}

/// Carrier rate API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierSettings {
    /// API base URL, without a trailing slash.
    #[serde(default = "default_carrier_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_carrier_timeout_secs")]
    pub timeout_secs: u64,
}

impl CarrierSettings {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CarrierSettings {
    fn default() -> Self {
        Self {
            base_url: default_carrier_base_url(),
            timeout_secs: default_carrier_timeout_secs(),
        }
    }
}

/// Rate cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// How long a cached rate response stays valid, in seconds.
    #[serde(default = "default_shipping_ttl_secs")]
    pub shipping_ttl_secs: u64,
}

impl CacheSettings {
    /// Rate-response TTL as a [`Duration`].
    #[must_use]
    pub const fn shipping_ttl(&self) -> Duration {
        Duration::from_secs(self.shipping_ttl_secs)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            shipping_ttl_secs: default_shipping_ttl_secs(),
        }
    }
}

fn default_carrier_base_url() -> String {
    "https://api.carrier.example.com".to_string()
}

const fn default_carrier_timeout_secs() -> u64 {
    30
}

const fn default_shipping_ttl_secs() -> u64 {
    3600
}

/// Load configuration from a YAML file.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read or the YAML cannot be
/// parsed.
pub fn load_config(path: Option<&str>) -> Result<EngineConfig, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    let config: EngineConfig = serde_yaml_bw::from_str(&contents)?;
    Ok(config)
}
