use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    /// Filesystem failure, tagged with the path being read or written.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON export or import failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV export or import failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Input file in a format we cannot read back.
    #[error("unsupported format: {0}")]
    Format(String),
}

impl DatasetError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DatasetError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;
