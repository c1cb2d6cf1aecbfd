use crate::errors::{DustError, Result};

// Dust yield flattens outside this item level band
const MIN_ITEM_LEVEL: u32 = 65;
const MAX_ITEM_LEVEL: u32 = 84;

/// Dust yielded by disenchanting an item, common case: no influence and no
/// corruption implicits.
pub fn compute_dust_value(base_dust: f64, item_level: u32, quality: u32) -> Result<u64> {
    compute_dust_value_full(base_dust, item_level, quality, 0, 0)
}

/// Dust yielded by disenchanting an item.
///
/// `item_level` is clamped to `[65, 84]`. Quality adds 2% per point,
/// influences and corruption implicits 50% each, all additive, on top of a
/// level-scaled base of `125 x (20 - (84 - ilvl))`.
pub fn compute_dust_value_full(
    base_dust: f64,
    item_level: u32,
    quality: u32,
    influence_count: u32,
    corruption_implicit_count: u32,
) -> Result<u64> {
    if !base_dust.is_finite() || base_dust <= 0.0 {
        return Err(DustError::InvalidArgument(format!(
            "base dust must be a positive number, got {}",
            base_dust
        )));
    }
    if item_level == 0 {
        return Err(DustError::InvalidArgument(
            "item level must be positive".to_string(),
        ));
    }

    let clamped_level = item_level.clamp(MIN_ITEM_LEVEL, MAX_ITEM_LEVEL);
    let bonus_percent = 2.0 * quality as f64
        + 50.0 * influence_count as f64
        + 50.0 * corruption_implicit_count as f64;
    let multiplier = (bonus_percent + 100.0) / 100.0;
    let global_multiplier = 125.0 * (20 - (MAX_ITEM_LEVEL - clamped_level)) as f64 * multiplier;

    Ok((base_dust * global_multiplier).round() as u64)
}

/// Gold fee charged for disenchanting an item.
pub fn compute_gold_cost(
    base_dust: f64,
    quality: u32,
    influence_count: u32,
    corruption_implicit_count: u32,
) -> Result<u64> {
    if !base_dust.is_finite() || base_dust <= 0.0 {
        return Err(DustError::InvalidArgument(format!(
            "base dust must be a positive number, got {}",
            base_dust
        )));
    }

    let inner = floor_to_step(base_dust.powf(0.45), 0.01);
    let multiplier =
        1.0 + 0.02 * quality as f64 + 0.5 * (influence_count + corruption_implicit_count) as f64;

    Ok((2000.0 * inner * multiplier).floor() as u64)
}

fn floor_to_step(value: f64, step: f64) -> f64 {
    (value / step).floor() * step
}
