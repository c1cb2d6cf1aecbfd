use std::collections::HashMap;

use crate::errors::{DustError, Result};
use crate::models::{CanonicalPriceRecord, PriceListing};

// A details id ending in one of these marks a rarer, separately priced
// variant of the same logical item
const SPECIAL_SUFFIXES: [&str; 3] = ["-relic", "-5l", "-6l"];

// Alternate monster-origin form sharing disenchant value with its base item
const FOULBORN_PREFIX: &str = "Foulborn ";

/// Collapse raw price listings into one canonical record per logical item
/// name. `None` stands for an upstream response with no listings array at
/// all; an empty slice is a valid, empty batch.
pub fn dedupe(listings: Option<&[PriceListing]>) -> Result<Vec<CanonicalPriceRecord>> {
    let listings = listings
        .ok_or_else(|| DustError::InvalidInput("price listings are missing".to_string()))?;

    let collapsed = collapse_name_groups(listings);
    Ok(merge_foulborn_pairs(collapsed))
}

fn is_special(listing: &PriceListing) -> bool {
    SPECIAL_SUFFIXES
        .iter()
        .any(|suffix| listing.details_id.ends_with(suffix))
}

fn is_foulborn(name: &str) -> bool {
    name.starts_with(FOULBORN_PREFIX)
}

fn base_name(name: &str) -> &str {
    name.strip_prefix(FOULBORN_PREFIX).unwrap_or(name)
}

/// Cheapest element under a strict `<` fold. Ties keep the first-encountered
/// element; a NaN price never displaces a finite best because its comparisons
/// are always false. Callers guarantee a non-empty slice.
fn cheapest_by<'a, T>(items: &'a [T], price: impl Fn(&T) -> f64) -> &'a T {
    let mut best = &items[0];
    for item in &items[1..] {
        if price(item) < price(best) {
            best = item;
        }
    }
    best
}

// First pass: exact-name groups, reduced one group at a time. Group build and
// reduction stay separate so no group sees partially reduced state.
fn collapse_name_groups(listings: &[PriceListing]) -> Vec<CanonicalPriceRecord> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&PriceListing>> = HashMap::new();
    for listing in listings {
        match groups.get_mut(listing.name.as_str()) {
            Some(group) => group.push(listing),
            None => {
                // side list keeps first-seen key order so output is
                // deterministic for identical input
                order.push(listing.name.as_str());
                groups.insert(listing.name.as_str(), vec![listing]);
            }
        }
    }

    order
        .into_iter()
        .map(|name| collapse_group(&groups[name]))
        .collect()
}

fn collapse_group(group: &[&PriceListing]) -> CanonicalPriceRecord {
    if group.len() == 1 {
        return CanonicalPriceRecord::from_listing(group[0]);
    }

    let non_special: Vec<&PriceListing> = group
        .iter()
        .copied()
        .filter(|listing| !is_special(listing))
        .collect();

    if non_special.is_empty() {
        // only rare variants are listed; keep the cheapest with its own count
        return CanonicalPriceRecord::from_listing(*cheapest_by(group, |l| l.chaos_value));
    }

    // specials are discarded entirely, including their listing counts
    let mut record =
        CanonicalPriceRecord::from_listing(*cheapest_by(&non_special, |l| l.chaos_value));
    record.listing_count = non_special.iter().map(|l| l.listing_count).sum();
    record
}

// Second pass: pair Foulborn entries with their base item. Groups holding
// only one side pass through untouched.
fn merge_foulborn_pairs(records: Vec<CanonicalPriceRecord>) -> Vec<CanonicalPriceRecord> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<CanonicalPriceRecord>> = HashMap::new();
    for record in records {
        let key = base_name(&record.name).to_string();
        match groups.get_mut(&key) {
            Some(group) => group.push(record),
            None => {
                order.push(key.clone());
                groups.insert(key, vec![record]);
            }
        }
    }

    let mut merged = Vec::with_capacity(order.len());
    for key in order {
        if let Some(group) = groups.remove(&key) {
            merged.extend(merge_base_group(group));
        }
    }
    merged
}

fn merge_base_group(group: Vec<CanonicalPriceRecord>) -> Vec<CanonicalPriceRecord> {
    let has_foulborn = group.iter().any(|r| is_foulborn(&r.name));
    let has_plain = group.iter().any(|r| !is_foulborn(&r.name));
    if !has_foulborn || !has_plain {
        return group;
    }

    // both sides contribute their listings to availability
    let total_count: u32 = group.iter().map(|r| r.listing_count).sum();

    let (foulborn, plain): (Vec<_>, Vec<_>) =
        group.into_iter().partition(|r| is_foulborn(&r.name));

    // two-step reduction: cheapest per side first, then the cheaper of those
    // two. Deliberately not a flat minimum over the combined group.
    let foulborn_best = cheapest_by(&foulborn, |r| r.chaos);
    let mut record = cheapest_by(&plain, |r| r.chaos).clone();
    if foulborn_best.chaos < record.chaos {
        record.chaos = foulborn_best.chaos;
    }
    record.listing_count = total_count;
    vec![record]
}
