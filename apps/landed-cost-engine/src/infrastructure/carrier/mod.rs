//! Carrier rate API adapter.

pub mod client;
pub mod config;
pub mod error;

pub use client::CarrierHttpClient;
pub use config::CarrierConfig;
pub use error::CarrierApiError;
