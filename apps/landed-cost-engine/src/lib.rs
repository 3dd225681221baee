// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Landed Cost Engine - Rust Core Library
//!
//! Resolves the cheapest valid shipping option for a marketplace item and
//! computes the landed-cost fee (tax plus the partner's fee schedule) on top
//! of it, everything denominated in USD.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, normalization, fee math)
//!   - `shipping`: embedded-option selection, carrier response normalization,
//!     delivery-method tagging
//!   - `fees`: warehouse tax lookup, per-attribute fee rules with layered
//!     defaults and percent minimums
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`CarrierPort`,
//!     `RateCachePort`, `CredentialProviderPort`, `ForensicSinkPort`)
//!   - `use_cases`: `ResolveShipping` (cache, auth refresh, normalization),
//!     `ComputeLandedFee`
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `carrier`: HTTP rate-quote client
//!   - `cache`: in-memory TTL cache
//!   - `reference`: in-memory warehouse and fee-rule tables

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading.
pub mod config;

// Domain re-exports
pub use domain::fees::{FeeError, FeeResolver, FeeResult};
pub use domain::shared::{CountryCode, CurrencyAmount, ItemId, Partner, PostalCode};
pub use domain::shipping::{DeliveryMethod, ItemRecord, ResolvedShipping, ShippingOption};

// Application re-exports
pub use application::use_cases::{
    ComputeLandedFeeRequest, ComputeLandedFeeUseCase, LandedQuote, ResolveShippingRequest,
    ResolveShippingUseCase, ShippingResolutionError,
};
