// core/src/predictor.rs
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ureq::Agent;

use crate::error::PredictError;
use crate::metrics;
use crate::models::CandidateSample;
use crate::payload::build_feature_payload;
use crate::types::FeatureVector;

pub const DEFAULT_MODEL_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub probabilities: Option<Value>,
}

/// Det brukeren ser: en label, eller eksplisitt "utilgjengelig" – aldri en gjettet label.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionState {
    Ready(Prediction),
    Unavailable(String),
}

impl From<Result<Prediction, PredictError>> for PredictionState {
    fn from(r: Result<Prediction, PredictError>) -> Self {
        match r {
            Ok(p) => PredictionState::Ready(p),
            Err(e) => PredictionState::Unavailable(e.to_string()),
        }
    }
}

impl fmt::Display for PredictionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionState::Ready(p) => write!(f, "{}", p.label),
            PredictionState::Unavailable(reason) => write!(f, "prediction unavailable ({reason})"),
        }
    }
}

/// Ekstern klassifikator (prod: HttpPredictor, test: StaticPredictor)
pub trait Predictor {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError>;
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    features: &'a FeatureVector,
}

#[derive(Debug, Clone, Deserialize)]
struct PredictResp {
    #[serde(default)]
    ok: Option<bool>,
    #[serde(default)]
    result: Option<PredictResult>,
    #[serde(default)]
    probabilities: Option<Value>,
    #[serde(default, alias = "error")]
    message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PredictResult {
    #[serde(default)]
    prediction: Value,
}

/// Label som streng; tall rendres som tekst, enkelt-element-lister pakkes ut.
fn label_from_value(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) if items.len() == 1 => label_from_value(&items[0]),
        _ => None,
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<PredictResp>(body)
        .ok()
        .and_then(|r| r.message)
        .unwrap_or_else(|| "Prediction failed".to_string())
}

fn parse_response(resp: PredictResp) -> Result<Prediction, PredictError> {
    if resp.ok == Some(false) {
        return Err(PredictError::Rejected(
            resp.message.unwrap_or_else(|| "Prediction failed".to_string()),
        ));
    }
    let result = resp
        .result
        .ok_or_else(|| PredictError::InvalidResponse("missing 'result'".into()))?;
    let label = label_from_value(&result.prediction)
        .ok_or_else(|| PredictError::InvalidResponse("missing 'result.prediction'".into()))?;

    Ok(Prediction {
        label,
        probabilities: resp.probabilities.filter(|p| !p.is_null()),
    })
}

/// HTTP-klient mot modellserveren – enkel blocking-versjon (ureq)
pub struct HttpPredictor {
    agent: Agent,
    base_url: String,
}

impl HttpPredictor {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { agent, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health` → `{ ok: true }`
    pub fn health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        let Ok(resp) = self.agent.get(&url).call() else {
            return false;
        };
        resp.into_json::<Value>()
            .map(|v| v.get("ok").and_then(Value::as_bool) == Some(true))
            .unwrap_or(false)
    }
}

impl Default for HttpPredictor {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_URL, Duration::from_secs(10))
    }
}

impl Predictor for HttpPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError> {
        let url = format!("{}/predict", self.base_url);

        let resp = match self.agent.post(&url).send_json(PredictRequest { features }) {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                return Err(PredictError::Status {
                    status,
                    message: error_message(&body),
                });
            }
            Err(ureq::Error::Transport(t)) => return Err(PredictError::Transport(t.to_string())),
        };

        let body: PredictResp = resp
            .into_json()
            .map_err(|e| PredictError::InvalidResponse(e.to_string()))?;
        let prediction = parse_response(body)?;

        log::info!("[predictor] {} => '{}'", self.base_url, prediction.label);
        Ok(prediction)
    }
}

/// Fast svar, for tester og offline-modus.
#[derive(Debug, Clone)]
pub struct StaticPredictor {
    pub outcome: Result<Prediction, PredictError>,
}

impl StaticPredictor {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            outcome: Ok(Prediction {
                label: label.into(),
                probabilities: None,
            }),
        }
    }

    pub fn failing(err: PredictError) -> Self {
        Self { outcome: Err(err) }
    }
}

impl Predictor for StaticPredictor {
    fn predict(&self, _features: &FeatureVector) -> Result<Prediction, PredictError> {
        self.outcome.clone()
    }
}

/// Bygger payload fra rå samples og spør predictor. Feil blir `Unavailable`.
pub fn predict_capture<T: CandidateSample>(predictor: &dyn Predictor, raw: &[T]) -> PredictionState {
    let payload = build_feature_payload(raw, None);
    let result = predictor.predict(&payload.features);

    match &result {
        Ok(_) => metrics::global().predictions_total().inc(),
        Err(e) => {
            log::warn!("⚠️ prediction unavailable: {e}");
            metrics::global().prediction_failures_total().inc();
        }
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(json: &str) -> PredictResp {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_string_and_numeric_predictions() {
        let p = parse_response(resp(r#"{"ok":true,"result":{"prediction":"A"},"probabilities":null}"#)).unwrap();
        assert_eq!(p.label, "A");
        assert!(p.probabilities.is_none());

        let p = parse_response(resp(r#"{"ok":true,"result":{"prediction":3}}"#)).unwrap();
        assert_eq!(p.label, "3");
    }

    #[test]
    fn ok_false_is_rejected_with_message() {
        let err = parse_response(resp(r#"{"ok":false,"message":"Missing 'features' or 'data'."}"#)).unwrap_err();
        assert_eq!(err, PredictError::Rejected("Missing 'features' or 'data'.".into()));
    }

    #[test]
    fn missing_prediction_is_invalid() {
        let err = parse_response(resp(r#"{"ok":true,"result":{}}"#)).unwrap_err();
        assert!(matches!(err, PredictError::InvalidResponse(_)));
    }

    #[test]
    fn error_message_falls_back_to_generic() {
        assert_eq!(error_message("not json"), "Prediction failed");
        assert_eq!(error_message(r#"{"error":"boom"}"#), "boom");
    }
}
