//! Generator for the ISL sign action dataset.
//!
//! Vocabulary words are resolved to the action the signing avatar performs,
//! given a templated example sentence and a category, expanded with `-ing`
//! and `-ed` forms, and exported as JSON, CSV and TypeScript.

pub mod actions;
pub mod categories;
pub mod config;
pub mod dataset;
pub mod error;
pub mod example;
pub mod export;
pub mod inventory;
pub mod io_utils;
pub mod stats;
pub mod variants;
pub mod vocabulary;

pub use actions::{resolve_action, stem, ActionMap};
pub use categories::{category_of, CATEGORIES, DEFAULT_CATEGORY};
pub use config::Config;
pub use dataset::{generate_dataset, DatasetRow};
pub use error::{DatasetError, Result};
pub use export::{export_csv, export_json, export_typescript, load_csv, load_json, load_rows};
pub use inventory::AssetInventory;
pub use stats::{content_digest, DatasetSummary};
pub use variants::{ed_form, expand, ing_form};
pub use vocabulary::{aggregate, builtin_vocabulary};

/// Log filter for the binaries: `RUST_LOG` when set and valid, else `default`.
pub fn log_filter(default: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
}

/// Load the inventory named by `config`, then build the dataset from the
/// built-in vocabulary and dictionary.
pub fn build_from_config(config: &Config) -> Result<(Vec<DatasetRow>, AssetInventory)> {
    config.validate()?;
    let inventory = AssetInventory::load(&config.asset_dir, &config.extension)?;
    let vocabulary = builtin_vocabulary();
    let map = ActionMap::builtin();
    tracing::info!(
        "building dataset from {} words and {} action mappings",
        vocabulary.len(),
        map.len()
    );
    let rows = generate_dataset(&vocabulary, &map, &inventory, config);
    Ok((rows, inventory))
}

/// Write all three artifacts to the paths in `config`.
pub fn export_all(rows: &[DatasetRow], config: &Config) -> Result<()> {
    export_json(rows, &config.json_output)?;
    export_csv(rows, &config.csv_output)?;
    export_typescript(rows, &config.ts_output)?;
    Ok(())
}
