use std::fs;

use sign_dataset::AssetInventory;

#[test]
fn scans_matching_files_only() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Run.sigml"), b"<sigml/>").unwrap();
    fs::write(dir.path().join("do.SIGML"), b"<sigml/>").unwrap();
    fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("walk.sigml"), b"<sigml/>").unwrap();

    let inv = AssetInventory::load(dir.path(), "sigml").unwrap();
    assert_eq!(inv.iter().collect::<Vec<_>>(), vec!["do", "run"]);
    assert!(inv.contains("RUN"));
    assert!(!inv.contains("walk"));
}

#[test]
fn missing_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let inv = AssetInventory::load(dir.path().join("absent"), "sigml").unwrap();
    assert!(inv.is_empty());
}

#[test]
fn empty_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let inv = AssetInventory::load(dir.path(), ".sigml").unwrap();
    assert_eq!(inv.len(), 0);
}
