use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::error::{ConfigError, PipelineError};
use crate::predictor::DEFAULT_MODEL_URL;
use crate::resample::TargetLen;
use crate::types::TARGET_POINTS;

pub const ENV_MODEL_URL: &str = "PY_MODEL_URL";
pub const ENV_DATA_DIR: &str = "GESTURE_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Basis-URL for modellserveren (`/predict`, `/health`)
    #[serde(alias = "modelUrl")]
    pub model_url: String,
    /// Lagrede rå-opptak (*.json)
    pub data_dir: PathBuf,
    /// CSV-utdata; `None` → `<data_dir>/datasets`
    pub dataset_dir: Option<PathBuf>,
    pub target_points: usize,
    pub timeout_secs: u64,
    /// 0.0 = av; live-visningen bruker 0.5
    pub deadzone: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_url: DEFAULT_MODEL_URL.to_string(),
            data_dir: PathBuf::from("sensor-data"),
            dataset_dir: None,
            target_points: TARGET_POINTS,
            timeout_secs: 10,
            deadzone: 0.0,
        }
    }
}

impl Config {
    /// Leser JSON fra disk. Finnes ikke filen, brukes default.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("⚠️ config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json(&contents)?;
        log::info!("📂 config loaded from {}", path.display());
        Ok(cfg)
    }

    pub fn from_json(json_in: &str) -> Result<Self, ConfigError> {
        let mut de = serde_json::Deserializer::from_str(json_in);
        let cfg: Config = spte::deserialize(&mut de).map_err(|e| ConfigError::Parse {
            at: e.path().to_string(),
            message: e.inner().to_string(),
        })?;
        cfg.target()?;
        Ok(cfg)
    }

    /// `PY_MODEL_URL` og `GESTURE_DATA_DIR` overstyrer filverdier.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(ENV_MODEL_URL).ok(),
            std::env::var(ENV_DATA_DIR).ok(),
        )
    }

    pub fn with_overrides(mut self, model_url: Option<String>, data_dir: Option<String>) -> Self {
        if let Some(url) = model_url.filter(|u| !u.trim().is_empty()) {
            self.model_url = url;
        }
        if let Some(dir) = data_dir.filter(|d| !d.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }

    pub fn dataset_dir(&self) -> PathBuf {
        self.dataset_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("datasets"))
    }

    pub fn target(&self) -> Result<TargetLen, PipelineError> {
        TargetLen::new(self.target_points)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
