//! Summary report over a generated dataset.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::dataset::DatasetRow;
use crate::inventory::AssetInventory;

/// SHA-256 over every field of every row, in order.
pub fn content_digest(rows: &[DatasetRow]) -> String {
    let mut hasher = Sha256::new();
    for row in rows {
        for field in [&row.word, &row.sign, &row.sov_example, &row.category] {
            hasher.update(field.as_bytes());
            hasher.update([0u8]);
        }
    }
    hex::encode(hasher.finalize())
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub entries: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub total_entries: usize,
    pub unique_signs: usize,
    /// Unique signs backed by an asset file.
    pub valid_signs: usize,
    pub valid_percent: f64,
    /// Largest category first; ties broken by name.
    pub categories: Vec<CategoryCount>,
    pub unique_words: usize,
    pub digest: String,
}

impl DatasetSummary {
    pub fn compute(rows: &[DatasetRow], inventory: &AssetInventory) -> Self {
        let signs: BTreeSet<&str> = rows.iter().map(|r| r.sign.as_str()).collect();
        let valid_signs = signs.iter().filter(|s| inventory.contains(s)).count();
        let valid_percent = if signs.is_empty() {
            0.0
        } else {
            valid_signs as f64 * 100.0 / signs.len() as f64
        };

        let mut per_category: BTreeMap<&str, usize> = BTreeMap::new();
        for row in rows {
            *per_category.entry(row.category.as_str()).or_insert(0) += 1;
        }
        let mut categories: Vec<CategoryCount> = per_category
            .into_iter()
            .map(|(category, entries)| CategoryCount {
                category: category.to_string(),
                entries,
            })
            .collect();
        categories.sort_by(|a, b| {
            b.entries
                .cmp(&a.entries)
                .then_with(|| a.category.cmp(&b.category))
        });

        let unique_words = rows
            .iter()
            .map(|r| r.word.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            total_entries: rows.len(),
            unique_signs: signs.len(),
            valid_signs,
            valid_percent,
            categories,
            unique_words,
            digest: content_digest(rows),
        }
    }

    pub fn report(&self) {
        println!("Dataset statistics:");
        println!("Total entries: {}", self.total_entries);
        println!("Unique sign actions: {}", self.unique_signs);
        println!(
            "Valid sign files: {}/{} ({:.1}%)",
            self.valid_signs, self.unique_signs, self.valid_percent
        );
        println!();
        println!("Entries by category:");
        for c in &self.categories {
            println!("  {}: {}", c.category, c.entries);
        }
        println!();
        println!("Unique words: {}", self.unique_words);
        println!("Digest: {}", self.digest);
    }
}
