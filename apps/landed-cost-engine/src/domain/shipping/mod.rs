//! Shipping Resolution Context
//!
//! Data model for embedded listing options and carrier rate responses, plus
//! the normalizer that reduces either source to one canonical option.

pub mod item;
pub mod normalizer;
pub mod option;
pub mod response;

pub use item::ItemRecord;
pub use normalizer::{
    ResolvedShipping, merge_delivery_tags, normalize_rate_response, select_embedded_option,
};
pub use option::{DeliveryMethod, EmbeddedOption, ShippingOption, is_excluded_service};
pub use response::{
    Ack, CarrierOption, CostSummary, QuotedCost, RateResponse, ResponseError, ServiceOptions,
    ShippingDetails,
};
