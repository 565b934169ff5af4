//! Set of action identifiers that have a sign asset on disk.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{DatasetError, Result};

/// Lower-cased stems of the asset files found in one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetInventory {
    names: BTreeSet<String>,
}

impl AssetInventory {
    /// Scan `dir` (non-recursively) for files ending in `.extension`.
    ///
    /// A missing directory yields an empty inventory. Any other failure to
    /// read the directory is returned.
    pub fn load<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Self> {
        let dir = dir.as_ref();
        let wanted = extension.trim_start_matches('.');
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "asset directory {} not found, continuing with no assets",
                    dir.display()
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(DatasetError::io(dir, e)),
        };

        let mut names = BTreeSet::new();
        for entry in entries {
            let path = entry.map_err(|e| DatasetError::io(dir, e))?.path();
            if !path.is_file() {
                continue;
            }
            let matches_ext = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(wanted));
            if !matches_ext {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                debug!("asset {}", path.display());
                names.insert(stem.to_lowercase());
            }
        }

        info!("found {} available .{} files", names.len(), wanted);
        Ok(Self { names })
    }

    /// Build an inventory from names already in memory.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
