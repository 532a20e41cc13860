use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use serde::Deserialize;
use serde_json as json;
use serde_path_to_error as spte;

use crate::export::export_dataset;
use crate::models::{RawCapture, SampleIn};
use crate::payload::build_feature_payload;
use crate::resample::TargetLen;

// ──────────────────────────────────────────────────────────────────────────────
// INPUT-REPR (untagged): PRØV REN LISTE FØRST, SÅ OBJECT
// (RawCapture aksepterer også sekvenser, så listen må testes først)
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PayloadIn {
    Bare(Vec<SampleIn>),
    Capture(RawCapture),
}

fn call_build_payload_from_json(json_in: &str) -> Result<String, String> {
    let mut de = json::Deserializer::from_str(json_in);
    let parsed: PayloadIn = spte::deserialize(&mut de)
        .map_err(|e| format!("parse error (PayloadIn) at {}: {}", e.path(), e.inner()))?;

    let payload = match parsed {
        PayloadIn::Capture(c) => build_feature_payload(&c.readings, Some(c.label.as_str())),
        PayloadIn::Bare(samples) => build_feature_payload(&samples, None),
    };

    json::to_string(&payload).map_err(|e| format!("serialize error: {e}"))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

/// `[samples]` eller `{label, readings}` → `{"features": {...}}` (JSON-streng)
#[pyfunction]
fn build_feature_payload_json(json_in: &str) -> PyResult<String> {
    call_build_payload_from_json(json_in).map_err(PyValueError::new_err)
}

/// Eksporterer alle lagrede opptak; returnerer stien til CSV-filen.
#[pyfunction]
fn export_dataset_csv(data_dir: &str, out_dir: &str) -> PyResult<String> {
    let summary = export_dataset(data_dir, out_dir, TargetLen::DEFAULT)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(summary.path.display().to_string())
}

#[pymodule]
fn gesture_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(build_feature_payload_json, m)?)?;
    m.add_function(wrap_pyfunction!(export_dataset_csv, m)?)?;
    Ok(())
}
