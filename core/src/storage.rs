use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_path_to_error as spte;

use crate::error::StorageError;
use crate::models::RawCapture;

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io { path: path.to_path_buf(), source }
}

/// Filnavn-trygg label (ingen katalogseparatorer).
fn file_stem(label: &str) -> String {
    label
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect()
}

/// Leser inn ett lagret opptak (JSON). Parse-feil peker på feltstien.
pub fn load_capture(path: impl AsRef<Path>) -> Result<RawCapture, StorageError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(io_err(path))?;

    let mut de = serde_json::Deserializer::from_str(&contents);
    let capture: RawCapture = spte::deserialize(&mut de).map_err(|e| StorageError::Parse {
        path: path.to_path_buf(),
        at: e.path().to_string(),
        message: e.inner().to_string(),
    })?;

    log::debug!(
        "📂 capture loaded from {} (label='{}', {} readings)",
        path.display(),
        capture.label,
        capture.readings.len()
    );
    Ok(capture)
}

/// Lagrer opptaket som `<dir>/<label>_<unix_ms>.json` (pretty-print). Returnerer stien.
pub fn save_capture(capture: &RawCapture, dir: impl AsRef<Path>) -> Result<PathBuf, StorageError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(io_err(dir))?;

    let filename = format!("{}_{}.json", file_stem(&capture.label), Utc::now().timestamp_millis());
    let path = dir.join(filename);

    let json = serde_json::to_string_pretty(capture)?;
    fs::write(&path, json).map_err(io_err(&path))?;

    log::info!(
        "✅ capture saved to {} (label='{}', {} readings)",
        path.display(),
        capture.label,
        capture.readings.len()
    );
    Ok(path)
}

/// Alle `*.json` rett under `dir` (ikke rekursivt), sortert på navn.
/// Manglende katalog gir tom liste.
pub fn list_capture_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, StorageError> {
    let dir = dir.as_ref();
    if !dir.exists() {
        log::warn!("⚠️ capture dir {} not found, nothing to list", dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let entry = entry.map_err(io_err(dir))?;
        let path = entry.path();
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_file && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
