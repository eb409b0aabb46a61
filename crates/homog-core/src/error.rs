//! Error types for the homogenizer decay model.
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ModelError {
    #[error("invalid parameter {name}: {value} (must be finite and > 0)")] InvalidParameter { name: &'static str, value: f64 },
    #[error("time to target undefined: target {target} µm not in (0, {initial}) µm")] UndefinedTimeToTarget { initial: f64, target: f64 },
    #[error("degenerate decay rate constant: {rate}")] DegenerateDecay { rate: f64 },
}
