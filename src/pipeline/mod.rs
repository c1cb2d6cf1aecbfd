pub mod catalyst;
pub mod dedup;
pub mod merger;

pub use catalyst::{evaluate_catalyst_upgrade, CatalystEvaluation};
pub use dedup::dedupe;
pub use merger::merge_items;

use std::collections::HashSet;
use std::time::SystemTime;

use crate::errors::Result;
use crate::models::{DustValueRecord, MergeResult, PipelineOutput, PriceListing};

/// Run the full pipeline: dedupe each category batch, join the combined
/// canonical list against the dust dataset and stamp the result.
///
/// A `None` batch stands for an upstream response without a listings array
/// and fails the run, matching the deduplicator's contract.
pub fn run(
    price_batches: &[Option<Vec<PriceListing>>],
    dust_data: &[DustValueRecord],
    ignored_names: &HashSet<String>,
    cheapest_catalyst_price: Option<f64>,
) -> Result<PipelineOutput> {
    let mut canonical = Vec::new();
    for batch in price_batches {
        canonical.extend(dedup::dedupe(batch.as_deref())?);
    }

    let MergeResult {
        items,
        scarcity_threshold,
    } = merger::merge_items(&canonical, dust_data, ignored_names, cheapest_catalyst_price)?;

    Ok(PipelineOutput {
        items,
        last_updated: SystemTime::now(),
        scarcity_threshold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemCategory;

    fn listing(name: &str, chaos: f64, details_id: &str, count: u32) -> PriceListing {
        PriceListing {
            name: name.to_string(),
            chaos_value: chaos,
            base_type: format!("{} Base", name),
            icon: String::new(),
            listing_count: count,
            details_id: details_id.to_string(),
            variant: None,
            item_type: String::new(),
            category: ItemCategory::Armour,
        }
    }

    fn dust(name: &str) -> DustValueRecord {
        DustValueRecord {
            name: name.to_string(),
            base_type: format!("{} Base", name),
            dust_value_at_max_level: 10_000.0,
            dust_value_at_max_level_with_quality: 14_000.0,
            slot_count: 4,
        }
    }

    #[test]
    fn test_run_dedupes_each_batch_before_merging() {
        let batches = [
            Some(vec![
                listing("Goldrim", 2.0, "goldrim", 3),
                listing("Goldrim", 5.0, "goldrim", 4),
            ]),
            Some(vec![listing("Tabula Rasa", 9.0, "tabula-rasa", 2)]),
        ];
        let dust_data = [dust("Goldrim"), dust("Tabula Rasa")];

        let output = run(&batches, &dust_data, &HashSet::new(), None).unwrap();
        assert_eq!(output.items.len(), 2);
        assert_eq!(output.items[0].price, 2.0);
        assert_eq!(output.items[0].listing_count, 7);
    }

    #[test]
    fn test_run_fails_on_missing_batch() {
        let batches = [Some(vec![listing("Goldrim", 2.0, "goldrim", 3)]), None];
        assert!(run(&batches, &[dust("Goldrim")], &HashSet::new(), None).is_err());
    }

    #[test]
    fn test_run_with_no_batches_yields_empty_output() {
        let output = run(&[], &[dust("Goldrim")], &HashSet::new(), None).unwrap();
        assert!(output.items.is_empty());
        assert_eq!(output.scarcity_threshold, 1);
    }
}
