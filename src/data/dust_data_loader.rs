use std::collections::{HashMap, HashSet};

use crate::errors::Result;
use crate::models::DustValueRecord;

// Items the pipeline cannot price sensibly: disenchant-locked uniques and
// variant-heavy items whose overview price tracks a specific roll rather
// than the base item.
const IGNORED_ITEMS: &[&str] = &[
    "Kalandra's Touch",
    "Watcher's Eye",
    "Grand Spectrum",
    "Combat Focus",
    "That Which Was Taken",
    "Precursor's Emblem",
];

pub fn ignored_names() -> HashSet<String> {
    IGNORED_ITEMS.iter().map(|name| name.to_string()).collect()
}

/// Holds the static dust dataset for the lifetime of the process. Loaded
/// once at startup, read-only afterwards.
pub struct DustDataLoader {
    records: Vec<DustValueRecord>,
}

impl DustDataLoader {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    // Load dust records from a JSON file
    pub async fn load_from_file(&mut self, path: &str) -> Result<()> {
        let content = tokio::fs::read_to_string(path).await?;
        self.records = serde_json::from_str(&content)?;
        Ok(())
    }

    pub fn records(&self) -> &[DustValueRecord] {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&DustValueRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // Get statistics about the loaded dataset
    pub fn dataset_stats(&self) -> serde_json::Value {
        let mut base_type_counts = HashMap::new();
        for record in &self.records {
            *base_type_counts.entry(record.base_type.clone()).or_insert(0) += 1;
        }

        serde_json::json!({
            "total_records": self.records.len(),
            "base_types": base_type_counts,
        })
    }
}
