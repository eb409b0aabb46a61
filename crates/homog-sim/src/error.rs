//! Error types for simulation runs.
use homog_core::error::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)] Model(#[from] ModelError),
    #[error("config: {0}")] Config(#[from] config::ConfigError),
    #[error("{name} = {value} outside [{min}, {max}]")] InputOutOfRange { name: &'static str, value: f64, min: f64, max: f64 },
    #[error("invalid sampling: {0}")] InvalidSampling(String),
    #[error("io: {0}")] Io(#[from] std::io::Error),
    #[error("json: {0}")] Json(#[from] serde_json::Error),
}
