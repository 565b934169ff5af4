use std::path::PathBuf;

use crate::error::{DatasetError, Result};

/// Directory scanned for sign assets when none is given.
pub const DEFAULT_ASSET_DIR: &str = "public/SignFiles";
/// Extension identifying a sign asset file.
pub const DEFAULT_EXTENSION: &str = "sigml";
pub const DEFAULT_JSON_OUTPUT: &str = "isl-dataset.json";
pub const DEFAULT_CSV_OUTPUT: &str = "isl-dataset.csv";
pub const DEFAULT_TS_OUTPUT: &str = "isl-dataset.ts";
/// Generic actions tried, in order, when nothing else resolves to an asset.
pub const DEFAULT_FALLBACK_ACTIONS: &[&str] = &["do", "work"];

/// Runtime configuration for a generator run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the sign asset files.
    pub asset_dir: PathBuf,
    /// Asset file extension, without the leading dot.
    pub extension: String,
    pub json_output: PathBuf,
    pub csv_output: PathBuf,
    pub ts_output: PathBuf,
    /// Last resort actions. The final entry is used even when no asset backs it.
    pub fallback_actions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            json_output: PathBuf::from(DEFAULT_JSON_OUTPUT),
            csv_output: PathBuf::from(DEFAULT_CSV_OUTPUT),
            ts_output: PathBuf::from(DEFAULT_TS_OUTPUT),
            fallback_actions: DEFAULT_FALLBACK_ACTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() {
            return Err(DatasetError::Config("asset extension is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fallback_actions, vec!["do", "work"]);
    }

    #[test]
    fn rejects_empty_extension() {
        let config = Config {
            extension: ".".into(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(DatasetError::Config(_))));
    }
}
