use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::ExportError;
use crate::metrics;
use crate::models::RawCapture;
use crate::payload::build_feature_payload_with;
use crate::resample::TargetLen;
use crate::storage::{list_capture_files, load_capture};
use crate::types::{dataset_header, DatasetRow};

/// Ett lagret opptak som ikke ble med i datasettet.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFailure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub failures: Vec<ExportFailure>,
}

/// Én rad per opptak. Ingen tilstand deles mellom opptak.
pub fn row_from_capture(capture: &RawCapture, target: TargetLen) -> DatasetRow {
    build_feature_payload_with(&capture.readings, Some(capture.label.as_str()), target).into_row()
}

/// Leser og prosesserer hver fil for seg. En ødelagt fil logges og hoppes over;
/// allerede beregnede rader beholdes.
pub fn build_rows(files: &[PathBuf], target: TargetLen) -> (Vec<DatasetRow>, Vec<ExportFailure>) {
    let mut rows = Vec::with_capacity(files.len());
    let mut failures = Vec::new();

    for path in files {
        match load_capture(path) {
            Ok(capture) => rows.push(row_from_capture(&capture, target)),
            Err(e) => {
                log::warn!("⚠️ export: skipping {}: {}", path.display(), e);
                metrics::global().export_row_failures_total().inc();
                failures.push(ExportFailure {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    (rows, failures)
}

/// Tall som i JSON: heltall uten desimaler, -0 blir 0.
fn format_number(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        v.to_string()
    }
}

/// Skriver header + rader. Header følger `n` punkter (86 kolonner for n = 20).
pub fn write_csv<W: Write>(rows: &[DatasetRow], n: usize, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(dataset_header(n))?;

    for row in rows {
        let mut record = Vec::with_capacity(1 + row.features.len());
        record.push(row.label.clone());
        record.extend(row.features.values().map(format_number));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Hele eksporten: alle `*.json` i `data_dir` → `dataset_dir/sensor-data_<unix_ms>.csv`.
/// Filen skrives i én operasjon etter at alle rader er beregnet.
pub fn export_dataset(
    data_dir: impl AsRef<Path>,
    dataset_dir: impl AsRef<Path>,
    target: TargetLen,
) -> Result<ExportSummary, ExportError> {
    let data_dir = data_dir.as_ref();
    let dataset_dir = dataset_dir.as_ref();

    let files = list_capture_files(data_dir)?;
    log::info!("export: {} capture files in {}", files.len(), data_dir.display());

    let (rows, failures) = build_rows(&files, target);

    let mut buf = Vec::new();
    write_csv(&rows, target.get(), &mut buf)?;

    fs::create_dir_all(dataset_dir)?;
    let path = dataset_dir.join(format!("sensor-data_{}.csv", Utc::now().timestamp_millis()));
    fs::write(&path, buf)?;

    metrics::global().export_rows_total().inc_by(rows.len() as u64);
    log::info!(
        "✅ dataset written to {} ({} rows, {} skipped)",
        path.display(),
        rows.len(),
        failures.len()
    );

    Ok(ExportSummary {
        path,
        rows: rows.len(),
        failures,
    })
}
