pub mod capture;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod features;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod payload;
pub mod predictor;
pub mod resample;
pub mod storage;
pub mod trajectory;
pub mod types;
pub mod validate;

#[cfg(feature = "python")]
pub mod py;

// Re-eksporter kjerne-API-et på crate-roten
pub use capture::CaptureSession;
pub use config::Config;
pub use error::{ConfigError, ExportError, PipelineError, PredictError, StorageError};
pub use export::{export_dataset, ExportSummary};
pub use features::aggregate;
pub use models::{RawCapture, Sample, SampleIn};
pub use normalize::normalize_to_origin;
pub use payload::{build_feature_payload, build_features, flatten};
pub use predictor::{HttpPredictor, Prediction, PredictionState, Predictor, StaticPredictor};
pub use resample::{resample, TargetLen};
pub use storage::{load_capture, save_capture};
pub use types::{Aggregates, DatasetRow, FeaturePayload, FeatureVector, TARGET_POINTS};
pub use validate::validate_samples;
