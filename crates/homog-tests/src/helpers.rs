//! Shared test helpers.

use homog_core::types::ModelParameters;
use homog_decay::model::DecayModel;

/// Reference operating point: 1 mm, 20 Hz, 1 g bead, water, 100 → 10 µm, 10 mm tube.
pub fn reference_params() -> ModelParameters {
    ModelParameters::new(0.001, 20.0, 0.001, 0.001, 100.0, 10.0, 0.01)
}

/// Model at the reference operating point.
pub fn reference_model() -> DecayModel {
    DecayModel::new(reference_params()).unwrap()
}

/// Relative difference `|a - b| / |b|`.
pub fn rel_diff(a: f64, b: f64) -> f64 {
    ((a - b) / b).abs()
}
