use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

/// Prometheus-tellere for pipeline, eksport og predictor.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    payloads_built: IntCounter,
    export_rows: IntCounter,
    export_row_failures: IntCounter,
    predictions: IntCounter,
    prediction_failures: IntCounter,
}

fn counter(registry: &Registry, name: &str, help: &str) -> Result<IntCounter, prometheus::Error> {
    let c = IntCounter::new(name, help)?;
    registry.register(Box::new(c.clone()))?;
    Ok(c)
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        Ok(Self {
            payloads_built: counter(
                &registry,
                "gesture_payloads_built_total",
                "Feature payloads built from raw captures",
            )?,
            export_rows: counter(
                &registry,
                "gesture_export_rows_total",
                "Dataset rows written by the exporter",
            )?,
            export_row_failures: counter(
                &registry,
                "gesture_export_row_failures_total",
                "Stored captures skipped during export",
            )?,
            predictions: counter(
                &registry,
                "gesture_predictions_total",
                "Successful predictions from the remote classifier",
            )?,
            prediction_failures: counter(
                &registry,
                "gesture_prediction_failures_total",
                "Prediction calls that ended as unavailable",
            )?,
            registry,
        })
    }

    pub fn payloads_built_total(&self) -> &IntCounter {
        &self.payloads_built
    }

    pub fn export_rows_total(&self) -> &IntCounter {
        &self.export_rows
    }

    pub fn export_row_failures_total(&self) -> &IntCounter {
        &self.export_row_failures
    }

    pub fn predictions_total(&self) -> &IntCounter {
        &self.predictions
    }

    pub fn prediction_failures_total(&self) -> &IntCounter {
        &self.prediction_failures
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Tekstformat (Prometheus exposition).
    pub fn gather_text(&self) -> String {
        let mut buf = Vec::new();
        if let Err(e) = TextEncoder::new().encode(&self.registry.gather(), &mut buf) {
            log::warn!("metrics encode failed: {e}");
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

static GLOBAL: Lazy<Metrics> =
    Lazy::new(|| Metrics::new().expect("static metric definitions are valid"));

/// Prosess-global instans.
pub fn global() -> &'static Metrics {
    &GLOBAL
}
