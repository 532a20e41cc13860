use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Fast antall punkter etter resampling (systemkonstant).
pub const TARGET_POINTS: usize = 20;

/// Aggregatnøkler i den rekkefølgen klassifikatoren forventer dem.
pub const AGGREGATE_KEYS: [&str; 6] = [
    "duration_ms",
    "total_path_length",
    "avg_step_length",
    "range_x",
    "range_y",
    "range_z",
];

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Aggregates {
    pub duration_ms: f64,
    pub total_path_length: f64,
    pub avg_step_length: f64,
    pub range_x: f64,
    pub range_y: f64,
    pub range_z: f64,
}

impl Aggregates {
    /// Verdiene i samme rekkefølge som `AGGREGATE_KEYS`.
    pub fn values(&self) -> [f64; 6] {
        [
            self.duration_ms,
            self.total_path_length,
            self.avg_step_length,
            self.range_x,
            self.range_y,
            self.range_z,
        ]
    }
}

/// Flat, ordnet mapping nøkkel → tall.
///
/// Innsettingsrekkefølgen er en del av kontrakten (predictor + CSV-kolonner),
/// så vi lagrer en `Vec` og serialiserer den som et JSON-objekt i samme rekkefølge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureVector {
    entries: Vec<(String, f64)>,
}

impl FeatureVector {
    pub fn with_capacity(cap: usize) -> Self {
        Self { entries: Vec::with_capacity(cap) }
    }

    pub fn push(&mut self, key: impl Into<String>, value: f64) {
        self.entries.push((key.into(), value));
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Transport-payload: serialiseres som `{ "features": { ... } }`.
/// Label følger med for tabelleksport, men sendes aldri til predictor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturePayload {
    #[serde(skip_serializing)]
    pub label: Option<String>,
    pub features: FeatureVector,
}

impl FeaturePayload {
    pub fn into_row(self) -> DatasetRow {
        DatasetRow {
            label: self.label.unwrap_or_default(),
            features: self.features,
        }
    }
}

/// Én rad i eksportert datasett: label + features.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRow {
    pub label: String,
    pub features: FeatureVector,
}

/// `p{i}_x, p{i}_y, p{i}_z, p{i}_t` for punkt i (1-basert).
pub fn point_keys(i: usize) -> [String; 4] {
    [
        format!("p{i}_x"),
        format!("p{i}_y"),
        format!("p{i}_z"),
        format!("p{i}_t"),
    ]
}

/// Feature-nøkler for `n` punkter: 6 aggregater + 4·n posisjonsnøkler.
pub fn feature_keys(n: usize) -> Vec<String> {
    let mut keys: Vec<String> = AGGREGATE_KEYS.iter().map(|k| k.to_string()).collect();
    keys.reserve(4 * n);
    for i in 1..=n {
        keys.extend(point_keys(i));
    }
    keys
}

/// CSV-header: `label` + feature-nøkler (86 kolonner for n = 20).
pub fn dataset_header(n: usize) -> Vec<String> {
    let mut header = Vec::with_capacity(1 + AGGREGATE_KEYS.len() + 4 * n);
    header.push("label".to_string());
    header.extend(feature_keys(n));
    header
}
