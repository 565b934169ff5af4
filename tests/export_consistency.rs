use std::collections::BTreeSet;
use std::fs;

use sign_dataset::{
    build_from_config, content_digest, export_all, export_csv, load_csv, load_json, Config,
    DatasetRow,
};

fn pairs(rows: &[DatasetRow]) -> BTreeSet<(String, String)> {
    rows.iter().map(|r| (r.word.clone(), r.sign.clone())).collect()
}

fn config_in(dir: &std::path::Path) -> Config {
    let assets = dir.join("assets");
    fs::create_dir(&assets).unwrap();
    for name in ["run", "do", "walk", "cut", "give"] {
        fs::write(assets.join(format!("{name}.sigml")), b"<sigml/>").unwrap();
    }
    Config {
        asset_dir: assets,
        json_output: dir.join("isl-dataset.json"),
        csv_output: dir.join("isl-dataset.csv"),
        ts_output: dir.join("isl-dataset.ts"),
        ..Config::default()
    }
}

#[test]
fn json_and_csv_agree() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let (rows, _) = build_from_config(&config).unwrap();
    export_all(&rows, &config).unwrap();

    let from_json = load_json(&config.json_output).unwrap();
    let from_csv = load_csv(&config.csv_output).unwrap();
    assert_eq!(from_json.len(), rows.len());
    assert_eq!(from_csv.len(), rows.len());

    assert_eq!(pairs(&from_json), pairs(&from_csv));
    assert_eq!(from_json, rows);
}

#[test]
fn csv_header_and_json_field_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let (rows, _) = build_from_config(&config).unwrap();
    export_all(&rows, &config).unwrap();

    let csv = fs::read_to_string(&config.csv_output).unwrap();
    assert!(csv.starts_with("word,sign,sovExample,category\n"));
    assert!(!csv.contains('\r'));
    assert!(csv.ends_with('\n'));
    assert!(csv.contains("evacuate,run,I people evacuate,Disaster Management"));

    let json = fs::read_to_string(&config.json_output).unwrap();
    let word = json.find("\"word\"").unwrap();
    let sign = json.find("\"sign\"").unwrap();
    let example = json.find("\"sovExample\"").unwrap();
    let category = json.find("\"category\"").unwrap();
    assert!(word < sign && sign < example && example < category);
    assert!(json.contains("sauté"));
}

#[test]
fn typescript_has_provenance_and_every_row() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let (rows, _) = build_from_config(&config).unwrap();
    export_all(&rows, &config).unwrap();

    let ts = fs::read_to_string(&config.ts_output).unwrap();
    assert!(ts.starts_with("// Auto-generated ISL dataset"));
    assert!(ts.contains(&format!("// Total entries: {}", rows.len())));
    assert!(ts.contains(&content_digest(&rows)));
    assert!(ts.contains("export const ISL_DATASET = ["));
    assert!(ts.contains(
        "  { word: 'walk', sign: 'walk', sovExample: 'I now walk', category: 'Movement Actions' },"
    ));
    assert_eq!(ts.lines().filter(|l| l.starts_with("  { word:")).count(), rows.len());
    assert!(ts.ends_with("];\n"));
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let (rows, _) = build_from_config(&config).unwrap();
    export_all(&rows, &config).unwrap();
    let first: Vec<Vec<u8>> = [&config.json_output, &config.csv_output, &config.ts_output]
        .iter()
        .map(|p| fs::read(p).unwrap())
        .collect();

    let (rows, _) = build_from_config(&config).unwrap();
    export_all(&rows, &config).unwrap();
    let second: Vec<Vec<u8>> = [&config.json_output, &config.csv_output, &config.ts_output]
        .iter()
        .map(|p| fs::read(p).unwrap())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn empty_collection_still_has_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    export_csv(&[], &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "word,sign,sovExample,category\n");
    assert!(load_csv(&path).unwrap().is_empty());
}

#[test]
fn write_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.json");
    let err = sign_dataset::export_json(&[], &path).unwrap_err();
    assert!(matches!(err, sign_dataset::DatasetError::Io { .. }));
}
