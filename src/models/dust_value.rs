use serde::{Deserialize, Serialize};
use crate::calculator;
use crate::errors::Result;

/// Static disenchant reference data for one unique item, keyed by name.
/// Loaded once at startup and only read after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DustValueRecord {
    pub name: String,
    pub base_type: String,
    pub dust_value_at_max_level: f64,
    pub dust_value_at_max_level_with_quality: f64,
    pub slot_count: u32,
}

const MAX_ITEM_LEVEL: u32 = 84;
const MAX_QUALITY: u32 = 20;

impl DustValueRecord {
    /// Recompute a record from an item's base dust yield. Used to regenerate
    /// the static dataset offline; both stored values assume max item level.
    pub fn from_base_dust(
        name: String,
        base_type: String,
        base_dust: f64,
        slot_count: u32,
    ) -> Result<Self> {
        let at_max_level = calculator::compute_dust_value(base_dust, MAX_ITEM_LEVEL, 0)?;
        let with_quality = calculator::compute_dust_value(base_dust, MAX_ITEM_LEVEL, MAX_QUALITY)?;
        Ok(Self {
            name,
            base_type,
            dust_value_at_max_level: at_max_level as f64,
            dust_value_at_max_level_with_quality: with_quality as f64,
            slot_count,
        })
    }
}
