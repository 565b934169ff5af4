//! Writers for the three dataset artifacts, and readers for two of them.
//!
//! Every writer preserves row order and produces identical bytes for an
//! identical row collection.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::dataset::DatasetRow;
use crate::error::{DatasetError, Result};
use crate::stats::content_digest;

/// Column order of the tabular export.
pub const CSV_HEADER: [&str; 4] = ["word", "sign", "sovExample", "category"];

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| DatasetError::io(path, e))
}

/// Write `rows` as an indented JSON array.
pub fn export_json<P: AsRef<Path>>(rows: &[DatasetRow], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut out = create(path)?;
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.write_all(b"\n").map_err(|e| DatasetError::io(path, e))?;
    out.flush().map_err(|e| DatasetError::io(path, e))?;
    info!("exported {} entries to {}", rows.len(), path.display());
    Ok(())
}

/// Write `rows` as CSV with a header line, even when `rows` is empty.
pub fn export_csv<P: AsRef<Path>>(rows: &[DatasetRow], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| DatasetError::io(path, e))?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|e| DatasetError::io(path, e))?;
    info!("exported {} entries to {}", rows.len(), path.display());
    Ok(())
}

fn ts_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Render `rows` as a TypeScript module exporting `ISL_DATASET`.
pub fn render_typescript(rows: &[DatasetRow]) -> String {
    let mut ts = String::new();
    ts.push_str("// Auto-generated ISL dataset. Do not edit by hand.\n");
    ts.push_str(&format!(
        "// Generator: {} {}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    ts.push_str(&format!("// Total entries: {}\n", rows.len()));
    ts.push_str("// Sources: CISLR (~4,700), INCLUDE (~4,287), ISLTranslate (~31k)\n");
    ts.push_str(&format!("// Content digest (sha256): {}\n", content_digest(rows)));
    ts.push('\n');
    ts.push_str("export const ISL_DATASET = [\n");
    for row in rows {
        ts.push_str(&format!(
            "  {{ word: {}, sign: {}, sovExample: {}, category: {} }},\n",
            ts_string(&row.word),
            ts_string(&row.sign),
            ts_string(&row.sov_example),
            ts_string(&row.category)
        ));
    }
    ts.push_str("];\n");
    ts
}

/// Write `rows` as a TypeScript source file.
pub fn export_typescript<P: AsRef<Path>>(rows: &[DatasetRow], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut out = create(path)?;
    out.write_all(render_typescript(rows).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| DatasetError::io(path, e))?;
    info!("exported TypeScript dataset to {}", path.display());
    Ok(())
}

/// Read rows back from a JSON export.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Vec<DatasetRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DatasetError::io(path, e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Read rows back from a CSV export.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<DatasetRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DatasetError::io(path, e))?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Read rows from a `.json` or `.csv` export, chosen by extension.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<DatasetRow>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        Some(ext) if ext.eq_ignore_ascii_case("csv") => load_csv(path),
        _ => Err(DatasetError::Format(format!(
            "cannot read '{}'",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ts_strings_are_escaped() {
        assert_eq!(ts_string("walk"), "'walk'");
        assert_eq!(ts_string("o'clock"), "'o\\'clock'");
        assert_eq!(ts_string("a\\b"), "'a\\\\b'");
    }
}
