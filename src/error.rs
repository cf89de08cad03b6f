use crate::types::signals::Signal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("signal {signal} out of range [0, 100]: {value}")]
    Validation { signal: Signal, value: f64 },

    #[error("comparison selection is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("invalid filter criteria: {0}")]
    InvalidCriteria(String),

    #[error("invalid weight table: {0}")]
    InvalidWeights(String),

    #[error("repository not found: {0}")]
    RecordNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HealthError>;
