//! Marketplace item record, at the slice this engine needs.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{CountryCode, ItemId};
use crate::domain::shipping::option::{DeliveryMethod, EmbeddedOption};

/// The shipping-relevant slice of a marketplace item record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Composite marketplace item identifier.
    pub item_id: ItemId,
    /// Country the item ships from, when the listing carries it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_country: Option<CountryCode>,
    /// Shipping options embedded in the listing.
    #[serde(default)]
    pub shipping_options: Vec<EmbeddedOption>,
    /// Delivery-method tags already present on the listing's availability
    /// data, when any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_methods: Option<Vec<DeliveryMethod>>,
}

impl ItemRecord {
    /// Create an item record with no embedded shipping data.
    #[must_use]
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
            location_country: None,
            shipping_options: Vec::new(),
            delivery_methods: None,
        }
    }

    /// Whether the item ships from the destination's home region, so its
    /// embedded domestic options are directly usable.
    #[must_use]
    pub fn is_domestic_to(&self, destination: &CountryCode) -> bool {
        self.location_country
            .as_ref()
            .is_some_and(|location| location == destination)
    }

    /// Whether the listing carries any embedded shipping options.
    #[must_use]
    pub fn has_embedded_options(&self) -> bool {
        !self.shipping_options.is_empty()
    }
}
