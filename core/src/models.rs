use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Én akselerometer-måling: tre akser + ms siden opptaksstart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64, // m/s²
    pub y: f64,
    pub z: f64,
    #[serde(rename = "msElapsedSinceStart", alias = "ms_elapsed_since_start")]
    pub ms_elapsed_since_start: f64, // ms
}

impl Sample {
    pub fn new(x: f64, y: f64, z: f64, ms_elapsed_since_start: f64) -> Self {
        Self { x, y, z, ms_elapsed_since_start }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.z.is_finite()
            && self.ms_elapsed_since_start.is_finite()
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// TOLERANT INNGANG (lagrede filer / nettleser-JSON)
// ──────────────────────────────────────────────────────────────────────────────

/// Kandidat-sample slik den kommer fra disk eller klient.
/// Felt kan mangle, være null eller ha feil type – validatoren sorterer bort.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SampleIn {
    #[serde(default, deserialize_with = "lenient_number")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub y: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub z: Option<f64>,
    #[serde(
        default,
        rename = "msElapsedSinceStart",
        alias = "ms_elapsed_since_start",
        alias = "t",
        deserialize_with = "lenient_number"
    )]
    pub ms_elapsed_since_start: Option<f64>,
}

impl From<Sample> for SampleIn {
    fn from(s: Sample) -> Self {
        Self {
            x: Some(s.x),
            y: Some(s.y),
            z: Some(s.z),
            ms_elapsed_since_start: Some(s.ms_elapsed_since_start),
        }
    }
}

/// Alt som kan bli et gyldig `Sample` (eller ikke).
pub trait CandidateSample {
    fn candidate(&self) -> Option<Sample>;
}

impl CandidateSample for Sample {
    fn candidate(&self) -> Option<Sample> {
        self.is_finite().then_some(*self)
    }
}

impl CandidateSample for SampleIn {
    fn candidate(&self) -> Option<Sample> {
        let s = Sample {
            x: self.x?,
            y: self.y?,
            z: self.z?,
            ms_elapsed_since_start: self.ms_elapsed_since_start?,
        };
        s.candidate()
    }
}

/// Tall aksepteres, alt annet (streng, bool, objekt) blir None.
/// Literaler utenfor f64-området (f.eks. `1e400`) blir None eller ±inf og
/// droppes av validatoren, ikke hele opptaket.
fn lenient_number<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(v.and_then(|v| v.as_f64()))
}

fn null_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(match v {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}

/// Ett opptak (én gest) slik det lagres: `{ label, readings }`.
/// Eldre filer bruker `data` i stedet for `readings`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawCapture {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub label: String,
    #[serde(default, alias = "data")]
    pub readings: Vec<SampleIn>,
}

impl RawCapture {
    pub fn new(label: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self {
            label: label.into(),
            readings: samples.into_iter().map(SampleIn::from).collect(),
        }
    }

    /// Tom label betyr "umerket".
    pub fn is_labeled(&self) -> bool {
        !self.label.is_empty()
    }
}
