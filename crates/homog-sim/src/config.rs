//! Simulation configuration in user-facing units.
//!
//! [`SimulationConfig`] mirrors the input form: lengths in mm, mass in g,
//! sizes in µm. Values are layered from an optional file and `HOMOG_*`
//! environment variables on top of the defaults, then converted to SI
//! [`ModelParameters`] by [`SimulationConfig::to_parameters`].

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use homog_core::constants::{
    DEFAULT_ALPHA, DEFAULT_AMPLITUDE_MM, DEFAULT_BEAD_MASS_G, DEFAULT_FREQUENCY_HZ,
    DEFAULT_INITIAL_SIZE_UM, DEFAULT_SAMPLE_COUNT, DEFAULT_TARGET_SIZE_UM,
    DEFAULT_TUBE_DIAMETER_MM, DEFAULT_VISCOSITY_PA_S, DISPLAY_TIME_MARGIN, G_PER_KG, INPUT_MAX,
    INPUT_MIN, MAX_SAMPLE_COUNT, MM_PER_M,
};
use homog_core::types::ModelParameters;
use homog_decay::sampling::SamplingPlan;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Prefix of environment variables read by [`SimulationConfig::load`].
pub const ENV_PREFIX: &str = "HOMOG";

/// Parameters of one simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Oscillation amplitude (mm).
    pub amplitude_mm: f64,
    /// Oscillation frequency (Hz).
    pub frequency_hz: f64,
    /// Bead mass (g).
    pub bead_mass_g: f64,
    /// Fluid dynamic viscosity (Pa·s).
    pub viscosity_pa_s: f64,
    /// Initial globule size (µm).
    pub initial_size_um: f64,
    /// Target globule size (µm).
    pub target_size_um: f64,
    /// Tube inner diameter (mm).
    pub tube_diameter_mm: f64,
    /// Empirical decay-efficiency constant.
    pub alpha: f64,
    /// Number of samples in the displayed curve.
    pub samples: usize,
    /// Curve horizon as a multiple of the time to target.
    pub time_margin: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            amplitude_mm: DEFAULT_AMPLITUDE_MM,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            bead_mass_g: DEFAULT_BEAD_MASS_G,
            viscosity_pa_s: DEFAULT_VISCOSITY_PA_S,
            initial_size_um: DEFAULT_INITIAL_SIZE_UM,
            target_size_um: DEFAULT_TARGET_SIZE_UM,
            tube_diameter_mm: DEFAULT_TUBE_DIAMETER_MM,
            alpha: DEFAULT_ALPHA,
            samples: DEFAULT_SAMPLE_COUNT,
            time_margin: DISPLAY_TIME_MARGIN,
        }
    }
}

/// Per-user config file, used by [`SimulationConfig::load`] when present.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("homogenizer").join("simulation.toml"))
}

impl SimulationConfig {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist; without one the per-user file is read
    /// if it exists. `HOMOG_*` environment variables (e.g.
    /// `HOMOG_FREQUENCY_HZ=50`) override file values. The file format follows
    /// the extension (toml, json, yaml).
    pub fn load(path: Option<&Path>) -> Result<Self, SimError> {
        let mut builder = Config::builder();
        match path {
            Some(path) => builder = builder.add_source(File::from(path).required(true)),
            None => {
                if let Some(path) = default_config_path() {
                    builder = builder.add_source(File::from(path).required(false));
                }
            }
        }
        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// The seven form inputs with their names, in form order.
    pub fn inputs(&self) -> [(&'static str, f64); 7] {
        [
            ("amplitude_mm", self.amplitude_mm),
            ("frequency_hz", self.frequency_hz),
            ("bead_mass_g", self.bead_mass_g),
            ("viscosity_pa_s", self.viscosity_pa_s),
            ("initial_size_um", self.initial_size_um),
            ("target_size_um", self.target_size_um),
            ("tube_diameter_mm", self.tube_diameter_mm),
        ]
    }

    /// Reject inputs outside `[INPUT_MIN, INPUT_MAX]` and unusable sampling.
    ///
    /// Out-of-range values are reported, never clamped.
    pub fn validate(&self) -> Result<(), SimError> {
        for (name, value) in self.inputs() {
            if !(INPUT_MIN..=INPUT_MAX).contains(&value) {
                return Err(SimError::InputOutOfRange {
                    name,
                    value,
                    min: INPUT_MIN,
                    max: INPUT_MAX,
                });
            }
        }
        if !(2..=MAX_SAMPLE_COUNT).contains(&self.samples) {
            return Err(SimError::InvalidSampling(format!(
                "samples must be in [2, {MAX_SAMPLE_COUNT}], got {}",
                self.samples
            )));
        }
        if !(self.time_margin.is_finite() && self.time_margin >= 1.0) {
            return Err(SimError::InvalidSampling(format!(
                "time margin must be >= 1, got {}",
                self.time_margin
            )));
        }
        Ok(())
    }

    /// SI parameter snapshot for the model (mm → m, g → kg).
    pub fn to_parameters(&self) -> ModelParameters {
        ModelParameters::new(
            self.amplitude_mm / MM_PER_M,
            self.frequency_hz,
            self.bead_mass_g / G_PER_KG,
            self.viscosity_pa_s,
            self.initial_size_um,
            self.target_size_um,
            self.tube_diameter_mm / MM_PER_M,
        )
        .with_alpha(self.alpha)
    }

    pub fn sampling_plan(&self) -> SamplingPlan {
        SamplingPlan::new(self.samples, self.time_margin)
    }
}
