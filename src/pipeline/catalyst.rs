use crate::errors::{DustError, Result};
use crate::models::ItemCategory;

// 20 catalysts take an item from 0% to 20% quality
const CATALYSTS_PER_ITEM: f64 = 20.0;

// Used when no catalyst market price is available
const DEFAULT_CATALYST_PRICE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalystEvaluation {
    pub dust_value: f64,
    pub dust_per_price: f64,
    pub recommend_catalyst: bool,
}

/// Decide whether buying catalysts to quality an item improves its dust per
/// chaos. Weapons and armour are qualitied cheaply elsewhere, so for anything
/// that is not jewellery the quality-adjusted value applies unconditionally.
pub fn evaluate_catalyst_upgrade(
    category: &ItemCategory,
    base_price: f64,
    dust_at_max_level: f64,
    dust_with_quality: f64,
    cheapest_catalyst_price: Option<f64>,
) -> Result<CatalystEvaluation> {
    if !base_price.is_finite() || base_price <= 0.0 {
        return Err(DustError::InvalidArgument(format!(
            "base price must be positive, got {}",
            base_price
        )));
    }

    if !category.is_jewellery() {
        return Ok(CatalystEvaluation {
            dust_value: dust_with_quality,
            dust_per_price: dust_with_quality / base_price,
            recommend_catalyst: false,
        });
    }

    let catalyst_price = cheapest_catalyst_price.unwrap_or(DEFAULT_CATALYST_PRICE);
    let cost_to_add_quality = catalyst_price * CATALYSTS_PER_ITEM;

    let without_catalysts = dust_at_max_level / base_price;
    let with_catalysts = dust_with_quality / (base_price + cost_to_add_quality);

    if with_catalysts > without_catalysts {
        Ok(CatalystEvaluation {
            dust_value: dust_with_quality,
            dust_per_price: with_catalysts,
            recommend_catalyst: true,
        })
    } else {
        Ok(CatalystEvaluation {
            dust_value: dust_at_max_level,
            dust_per_price: without_catalysts,
            recommend_catalyst: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_jewellery_never_recommends_catalysts() {
        for category in [ItemCategory::Weapon, ItemCategory::Armour, ItemCategory::Flask] {
            let evaluation =
                evaluate_catalyst_upgrade(&category, 1.0, 10_000.0, 14_000.0, Some(0.01)).unwrap();
            assert!(!evaluation.recommend_catalyst);
            assert_eq!(evaluation.dust_value, 14_000.0);
            assert_eq!(evaluation.dust_per_price, 14_000.0);
        }
    }

    #[test]
    fn test_cheap_catalysts_win_on_jewellery() {
        // 100 chaos item: plain 10000/100 = 100, catalysed 14000/102 > 100
        let evaluation = evaluate_catalyst_upgrade(
            &ItemCategory::Jewellery,
            100.0,
            10_000.0,
            14_000.0,
            Some(0.1),
        )
        .unwrap();
        assert!(evaluation.recommend_catalyst);
        assert_eq!(evaluation.dust_value, 14_000.0);
        assert!(evaluation.dust_per_price > 100.0);
    }

    #[test]
    fn test_expensive_catalysts_lose_on_jewellery() {
        // 1 chaos item: plain 10000, catalysed 14000/201 = 69.6
        let evaluation = evaluate_catalyst_upgrade(
            &ItemCategory::Jewellery,
            1.0,
            10_000.0,
            14_000.0,
            Some(10.0),
        )
        .unwrap();
        assert!(!evaluation.recommend_catalyst);
        assert_eq!(evaluation.dust_value, 10_000.0);
        assert_eq!(evaluation.dust_per_price, 10_000.0);
    }

    #[test]
    fn test_missing_catalyst_price_defaults_to_one() {
        let with_default =
            evaluate_catalyst_upgrade(&ItemCategory::Jewellery, 50.0, 10_000.0, 14_000.0, None)
                .unwrap();
        let with_one = evaluate_catalyst_upgrade(
            &ItemCategory::Jewellery,
            50.0,
            10_000.0,
            14_000.0,
            Some(1.0),
        )
        .unwrap();
        assert_eq!(with_default, with_one);
    }

    #[test]
    fn test_strict_tie_keeps_plain_strategy() {
        // both strategies at exactly 100 dust per chaos: no recommendation
        let evaluation = evaluate_catalyst_upgrade(
            &ItemCategory::Jewellery,
            100.0,
            10_000.0,
            12_000.0,
            Some(1.0),
        )
        .unwrap();
        assert!(!evaluation.recommend_catalyst);
        assert_eq!(evaluation.dust_per_price, 100.0);
    }

    #[test]
    fn test_zero_price_is_an_error() {
        assert!(matches!(
            evaluate_catalyst_upgrade(&ItemCategory::Jewellery, 0.0, 10_000.0, 14_000.0, None),
            Err(DustError::InvalidArgument(_))
        ));
    }
}
