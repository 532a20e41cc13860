use std::fs;
use std::path::PathBuf;

use gesture_core::storage::list_capture_files;
use gesture_core::{load_capture, save_capture, RawCapture, Sample, StorageError};

fn tmp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gesture_core_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_save_and_load_capture() {
    let dir = tmp_dir("storage_roundtrip");

    let capture = RawCapture::new(
        "A",
        vec![Sample::new(0.1, 0.2, 0.3, 0.0), Sample::new(-1.0, 2.0, 9.81, 16.0)],
    );

    let path = save_capture(&capture, &dir).expect("kunne ikke lagre opptak");
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("A_") && name.ends_with(".json"), "{name}");

    let loaded = load_capture(&path).expect("kunne ikke laste opptak");
    assert_eq!(loaded, capture);

    // lagret format: { label, readings: [{ x, y, z, msElapsedSinceStart }] }
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["label"], "A");
    assert_eq!(v["readings"][1]["msElapsedSinceStart"], 16.0);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_load_reports_json_path_on_error() {
    let dir = tmp_dir("storage_bad");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.json");
    fs::write(&path, r#"{"label": "x", "readings": {"not": "a list"}}"#).unwrap();

    match load_capture(&path) {
        Err(StorageError::Parse { at, .. }) => assert_eq!(at, "readings"),
        other => panic!("expected parse error, got {other:?}"),
    }

    assert!(matches!(load_capture(dir.join("missing.json")), Err(StorageError::Io { .. })));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_list_only_top_level_json() {
    let dir = tmp_dir("storage_list");
    fs::create_dir_all(dir.join("datasets")).unwrap();
    fs::write(dir.join("b_2.json"), "{}").unwrap();
    fs::write(dir.join("a_1.json"), "{}").unwrap();
    fs::write(dir.join("notes.txt"), "x").unwrap();
    fs::write(dir.join("datasets").join("nested.json"), "{}").unwrap();

    let files = list_capture_files(&dir).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a_1.json", "b_2.json"]);

    assert!(list_capture_files(dir.join("nope")).unwrap().is_empty());
    fs::remove_dir_all(&dir).ok();
}
