use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actions::{resolve_action, ActionMap};
use crate::categories::category_of;
use crate::config::Config;
use crate::example::sov_example;
use crate::inventory::AssetInventory;
use crate::variants::expand;

/// One entry of the exported dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// Vocabulary word or one of its derived forms.
    pub word: String,
    /// Action the avatar performs for this word.
    pub sign: String,
    #[serde(rename = "sovExample")]
    pub sov_example: String,
    pub category: String,
}

/// Build the dataset: for every word, in iteration order, the base row
/// followed by its `-ing` and `-ed` variants.
pub fn generate_dataset(
    vocabulary: &BTreeSet<String>,
    map: &ActionMap,
    inventory: &AssetInventory,
    config: &Config,
) -> Vec<DatasetRow> {
    let mut rows = Vec::with_capacity(vocabulary.len() * 3);
    for word in vocabulary {
        let category = category_of(word);
        let sign = resolve_action(word, map, inventory, &config.fallback_actions);
        debug!("{word} -> {sign} ({category})");
        let base = DatasetRow {
            word: word.clone(),
            sign,
            sov_example: sov_example(word, category),
            category: category.to_string(),
        };
        let variants = expand(&base);
        rows.push(base);
        rows.extend(variants);
    }
    rows
}
