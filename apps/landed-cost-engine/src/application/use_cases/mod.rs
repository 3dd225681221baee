//! Application use cases.

pub mod compute_landed_fee;
pub mod resolve_shipping;

pub use compute_landed_fee::{ComputeLandedFeeRequest, ComputeLandedFeeUseCase, LandedQuote};
pub use resolve_shipping::{
    ResolveShippingRequest, ResolveShippingUseCase, ShippingResolutionError,
};
