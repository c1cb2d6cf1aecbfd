use serde::{Deserialize, Serialize};
use super::item_category::ItemCategory;

/// One raw line from an upstream price overview. Field names follow the
/// upstream JSON; anything the overview omits falls back to its default so
/// malformed lines flow through rather than failing the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceListing {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub chaos_value: f64,
    #[serde(default)]
    pub base_type: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub listing_count: u32,
    #[serde(default)]
    pub details_id: String,
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub item_type: String,
    // Stamped per batch after the fetch; not part of the upstream line
    #[serde(default)]
    pub category: ItemCategory,
}

/// One canonical price per logical item name, produced by the deduplicator.
/// Within a single run every name appears at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalPriceRecord {
    pub name: String,
    pub chaos: f64,
    pub base_type: String,
    pub icon: String,
    pub listing_count: u32,
    pub variant: Option<String>,
    pub item_type: String,
    pub category: ItemCategory,
}

impl CanonicalPriceRecord {
    pub fn from_listing(listing: &PriceListing) -> Self {
        Self {
            name: listing.name.clone(),
            chaos: listing.chaos_value,
            base_type: listing.base_type.clone(),
            icon: listing.icon.clone(),
            listing_count: listing.listing_count,
            variant: listing.variant.clone(),
            item_type: listing.item_type.clone(),
            category: listing.category.clone(),
        }
    }
}
