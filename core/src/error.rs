use std::path::PathBuf;

use thiserror::Error;

/// Strukturelle feil i pipelinen. Datakvalitet gir aldri feil her.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {path} at {at}: {message}")]
    Parse {
        path: PathBuf,
        at: String,
        message: String,
    },
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alt som gjør at vi ikke har en prediksjon å vise.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("predictor returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("predictor rejected request: {0}")]
    Rejected(String),
    #[error("invalid predictor response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error at {at}: {message}")]
    Parse { at: String, message: String },
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}
