use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a dataset library error into a CLI error with a hint.
pub fn dataset_cli_error(context: &str, err: crate::DatasetError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a dataset error variant.
pub fn cli_hint(err: &crate::DatasetError) -> String {
    use crate::DatasetError::*;
    match err {
        Io { path, source } => format_io_error("accessing", path, source),
        Json(e) => format!("{e}. Is the input a JSON export of this tool?"),
        Csv(e) => format!("{e}. Is the input a CSV export of this tool?"),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Format(msg) => format!("{msg}. Expected a .json or .csv file."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_hint_names_path_and_suggestion() {
        let err = crate::DatasetError::io(
            "out/isl-dataset.csv",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let hint = cli_hint(&err);
        assert!(hint.contains("out/isl-dataset.csv"));
        assert!(hint.contains("Check that the file exists"));
    }
}
