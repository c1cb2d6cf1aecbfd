use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use super::dust_value::DustValueRecord;
use super::item_category::ItemCategory;
use super::price_listing::CanonicalPriceRecord;
use crate::pipeline::catalyst::CatalystEvaluation;

/// Per-item view model handed to the presentation layer. Derived fresh on
/// every merge run, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedItem {
    /// Stable row identity within one run: name plus `-{baseType}` when the
    /// base type is known. Uniqueness is guaranteed by the deduplicator, not
    /// re-checked here.
    pub unique_id: String,
    pub name: String,
    pub variant: Option<String>,
    pub price: f64,
    pub listing_count: u32,
    pub dust_value: f64,
    pub dust_per_price: f64,
    pub slot_count: u32,
    pub dust_per_price_per_slot: i64,
    pub category: ItemCategory,
    pub icon: String,
    pub recommend_catalyst: bool,
}

impl MergedItem {
    pub fn from_parts(
        record: &CanonicalPriceRecord,
        dust: &DustValueRecord,
        evaluation: &CatalystEvaluation,
    ) -> Self {
        let unique_id = if record.base_type.is_empty() {
            record.name.clone()
        } else {
            format!("{}-{}", record.name, record.base_type)
        };

        Self {
            unique_id,
            name: record.name.clone(),
            variant: record.variant.clone(),
            price: record.chaos,
            listing_count: record.listing_count,
            dust_value: evaluation.dust_value,
            dust_per_price: evaluation.dust_per_price,
            slot_count: dust.slot_count,
            dust_per_price_per_slot: (evaluation.dust_per_price / dust.slot_count as f64).round()
                as i64,
            category: record.category.clone(),
            icon: record.icon.clone(),
            recommend_catalyst: evaluation.recommend_catalyst,
        }
    }
}

/// Result of a single merge pass over one canonical price list.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeResult {
    pub items: Vec<MergedItem>,
    pub scarcity_threshold: u32,
}

/// Full pipeline output consumed by the presentation layer.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub items: Vec<MergedItem>,
    pub last_updated: SystemTime,
    pub scarcity_threshold: u32,
}
