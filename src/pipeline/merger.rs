use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::errors::Result;
use crate::models::{CanonicalPriceRecord, DustValueRecord, MergeResult, MergedItem};
use crate::pipeline::catalyst::evaluate_catalyst_upgrade;

/// Join canonical prices against the static dust dataset and produce the
/// per-item view models plus the low-stock threshold.
///
/// Missing dust coverage is expected and tolerated: the item is skipped with
/// a warning. Advisor precondition failures abort the whole merge since they
/// point at corrupt reference data rather than missing coverage.
pub fn merge_items(
    prices: &[CanonicalPriceRecord],
    dust_data: &[DustValueRecord],
    ignored_names: &HashSet<String>,
    cheapest_catalyst_price: Option<f64>,
) -> Result<MergeResult> {
    // one lookup for the whole run, not one per item
    let dust_by_name: HashMap<&str, &DustValueRecord> = dust_data
        .iter()
        .map(|record| (record.name.as_str(), record))
        .collect();

    let mut items = Vec::with_capacity(prices.len());
    for record in prices {
        if ignored_names.contains(&record.name) {
            continue;
        }

        let Some(dust) = dust_by_name.get(record.name.as_str()) else {
            warn!(name = %record.name, "no dust value entry for priced item, skipping");
            continue;
        };

        let evaluation = evaluate_catalyst_upgrade(
            &record.category,
            record.chaos,
            dust.dust_value_at_max_level,
            dust.dust_value_at_max_level_with_quality,
            cheapest_catalyst_price,
        )?;

        items.push(MergedItem::from_parts(record, dust, &evaluation));
    }

    let scarcity_threshold = scarcity_threshold(&items);
    Ok(MergeResult {
        items,
        scarcity_threshold,
    })
}

/// 10th-percentile listing count across the merged set, nearest-rank method,
/// clamped to at least 1. Items below it are flagged as low stock upstream.
pub fn scarcity_threshold(items: &[MergedItem]) -> u32 {
    if items.is_empty() {
        return 1;
    }

    let mut counts: Vec<u32> = items.iter().map(|item| item.listing_count).collect();
    counts.sort_unstable();
    let index = (0.1 * (counts.len() - 1) as f64).floor() as usize;
    counts[index].max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemCategory;
    use crate::pipeline::catalyst::CatalystEvaluation;

    fn price(name: &str, chaos: f64, listing_count: u32) -> CanonicalPriceRecord {
        CanonicalPriceRecord {
            name: name.to_string(),
            chaos,
            base_type: format!("{} Base", name),
            icon: String::new(),
            listing_count,
            variant: None,
            item_type: String::new(),
            category: ItemCategory::Armour,
        }
    }

    fn dust(name: &str, at_max: f64, with_quality: f64, slot_count: u32) -> DustValueRecord {
        DustValueRecord {
            name: name.to_string(),
            base_type: format!("{} Base", name),
            dust_value_at_max_level: at_max,
            dust_value_at_max_level_with_quality: with_quality,
            slot_count,
        }
    }

    fn merged(name: &str, listing_count: u32) -> MergedItem {
        let evaluation = CatalystEvaluation {
            dust_value: 1_000.0,
            dust_per_price: 100.0,
            recommend_catalyst: false,
        };
        MergedItem::from_parts(&price(name, 10.0, listing_count), &dust(name, 1_000.0, 1_400.0, 1), &evaluation)
    }

    #[test]
    fn test_merge_joins_on_name() {
        let prices = [price("Goldrim", 2.0, 10), price("Unknown Hat", 3.0, 4)];
        let dust_data = [dust("Goldrim", 20_000.0, 28_000.0, 4)];

        let result = merge_items(&prices, &dust_data, &HashSet::new(), None).unwrap();
        // the unmatched item is dropped, not fatal
        assert_eq!(result.items.len(), 1);
        let item = &result.items[0];
        assert_eq!(item.name, "Goldrim");
        assert_eq!(item.dust_value, 28_000.0);
        assert_eq!(item.dust_per_price, 14_000.0);
        assert_eq!(item.slot_count, 4);
        assert_eq!(item.dust_per_price_per_slot, 3_500);
        assert!(!item.recommend_catalyst);
    }

    #[test]
    fn test_ignored_names_are_skipped() {
        let prices = [price("Goldrim", 2.0, 10)];
        let dust_data = [dust("Goldrim", 20_000.0, 28_000.0, 4)];
        let ignored: HashSet<String> = ["Goldrim".to_string()].into_iter().collect();

        let result = merge_items(&prices, &dust_data, &ignored, None).unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.scarcity_threshold, 1);
    }

    #[test]
    fn test_zero_priced_record_aborts_merge() {
        // a zero price survives dedup but violates the advisor precondition;
        // such items belong on the ignore list
        let prices = [price("Legacy Outlier", 0.0, 1)];
        let dust_data = [dust("Legacy Outlier", 20_000.0, 28_000.0, 4)];

        assert!(merge_items(&prices, &dust_data, &HashSet::new(), None).is_err());
    }

    #[test]
    fn test_merge_is_deterministic() {
        let prices = [price("Goldrim", 2.0, 10), price("Tabula Rasa", 9.0, 3)];
        let dust_data = [
            dust("Goldrim", 20_000.0, 28_000.0, 4),
            dust("Tabula Rasa", 15_000.0, 21_000.0, 6),
        ];

        let first = merge_items(&prices, &dust_data, &HashSet::new(), Some(2.0)).unwrap();
        let second = merge_items(&prices, &dust_data, &HashSet::new(), Some(2.0)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scarcity_threshold_nearest_rank() {
        let items: Vec<MergedItem> = (1..=100).map(|count| merged("Item", count)).collect();
        // floor(0.1 * 99) = 9 -> the 0-indexed 9th ascending count, value 10
        assert_eq!(scarcity_threshold(&items), 10);
    }

    #[test]
    fn test_scarcity_threshold_empty_defaults_to_one() {
        assert_eq!(scarcity_threshold(&[]), 1);
    }

    #[test]
    fn test_scarcity_threshold_clamps_to_one() {
        let items = [merged("Item", 0), merged("Item", 0)];
        assert_eq!(scarcity_threshold(&items), 1);
    }
}
