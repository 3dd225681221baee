//! Driven ports for the application layer.
//!
//! Each port is an async trait implemented by an infrastructure adapter.

pub mod carrier_port;
pub mod credential_port;
pub mod forensic_port;
pub mod rate_cache_port;

pub use carrier_port::{CarrierError, CarrierPort, RateQuoteRequest};
pub use credential_port::{AuthError, Credential, CredentialProviderPort};
pub use forensic_port::{ForensicContext, ForensicSinkPort, NoOpForensicSink};
pub use rate_cache_port::{CacheError, RateCacheKey, RateCachePort};
