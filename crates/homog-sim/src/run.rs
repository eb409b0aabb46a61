//! Simulation runs.
//!
//! Each run takes a snapshot of the configuration, builds a fresh
//! [`DecayModel`], and returns everything the display needs in one
//! [`SimulationReport`]. Nothing is cached between runs.

use homog_core::constants::MAX_SAMPLE_COUNT;
use homog_core::traits::DecayKinetics;
use homog_core::types::{DecaySeries, DerivedQuantities, ModelParameters};
use homog_decay::model::DecayModel;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::error::SimError;

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// SI parameters the model was built from.
    pub parameters: ModelParameters,
    pub derived: DerivedQuantities,
    /// Seconds until the globule size reaches the target.
    pub time_to_target: f64,
    pub series: DecaySeries,
}

/// Validate `config`, convert it to SI, and build the model.
pub fn build_model(config: &SimulationConfig) -> Result<DecayModel, SimError> {
    config.validate()?;
    let params = config.to_parameters();
    debug!(?params, "building decay model");
    Ok(DecayModel::new(params)?)
}

/// Run the model for `config` and sample its display curve.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationReport, SimError> {
    let model = build_model(config)?;
    let derived = model.derived();
    info!(
        peak_velocity = derived.peak_velocity,
        kinetic_energy = derived.kinetic_energy,
        shear_rate = derived.shear_rate,
        decay_rate_constant = derived.decay_rate_constant,
        "derived quantities"
    );

    let series = config.sampling_plan().sample(&model)?;
    info!(
        time_to_target = series.time_to_target,
        samples = series.len(),
        target_size = series.target_size,
        "decay curve sampled"
    );

    Ok(SimulationReport {
        parameters: *model.parameters(),
        derived,
        time_to_target: series.time_to_target,
        series,
    })
}

/// Derived quantities only; does not require a reachable target.
pub fn derive_quantities(config: &SimulationConfig) -> Result<DerivedQuantities, SimError> {
    let model = build_model(config)?;
    let derived = model.derived();
    if model.checked_rate().is_err() {
        warn!(rate = derived.decay_rate_constant, "decay rate constant is degenerate");
    }
    Ok(derived)
}

/// Bead displacement over `periods` cycles, as `(times, displacements)`.
pub fn oscillation_trace(
    config: &SimulationConfig,
    periods: f64,
    samples: usize,
) -> Result<(Vec<f64>, Vec<f64>), SimError> {
    if !(periods.is_finite() && periods > 0.0) {
        return Err(SimError::InvalidSampling(format!(
            "periods must be > 0, got {periods}"
        )));
    }
    if samples > MAX_SAMPLE_COUNT {
        return Err(SimError::InvalidSampling(format!(
            "samples must be at most {MAX_SAMPLE_COUNT}, got {samples}"
        )));
    }
    let bead = build_model(config)?.oscillation();
    debug!(
        amplitude = bead.amplitude(),
        frequency = bead.frequency(),
        periods,
        samples,
        "sampling bead oscillation"
    );
    Ok(bead.sample_periods(periods, samples))
}
