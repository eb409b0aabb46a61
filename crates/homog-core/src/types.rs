//! Core data types: the parameter snapshot, derived quantities and the
//! sampled decay series.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ALPHA;
use crate::error::ModelError;

/// Physical parameters of one homogenizer run, in SI base units.
///
/// Sizes are the exception: globule sizes stay in µm, matching the curve
/// they parameterise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Oscillation amplitude (m).
    pub amplitude: f64,
    /// Oscillation frequency (Hz).
    pub frequency: f64,
    /// Bead mass (kg).
    pub bead_mass: f64,
    /// Fluid dynamic viscosity (Pa·s).
    pub viscosity: f64,
    /// Initial globule size (µm).
    pub initial_size: f64,
    /// Target globule size (µm).
    pub target_size: f64,
    /// Tube inner diameter (m).
    pub tube_diameter: f64,
    /// Empirical decay-efficiency constant (dimensionless).
    pub alpha: f64,
}

impl ModelParameters {
    /// Parameter set with the default [`DEFAULT_ALPHA`].
    pub fn new(
        amplitude: f64,
        frequency: f64,
        bead_mass: f64,
        viscosity: f64,
        initial_size: f64,
        target_size: f64,
        tube_diameter: f64,
    ) -> Self {
        Self {
            amplitude,
            frequency,
            bead_mass,
            viscosity,
            initial_size,
            target_size,
            tube_diameter,
            alpha: DEFAULT_ALPHA,
        }
    }

    /// Replace the decay-efficiency constant.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Every parameter paired with its field name, in declaration order.
    pub fn named_values(&self) -> [(&'static str, f64); 8] {
        [
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("bead_mass", self.bead_mass),
            ("viscosity", self.viscosity),
            ("initial_size", self.initial_size),
            ("target_size", self.target_size),
            ("tube_diameter", self.tube_diameter),
            ("alpha", self.alpha),
        ]
    }

    /// Check that every parameter is finite and strictly positive.
    ///
    /// Reports the first offending field. The ordering of initial and target
    /// size is not checked here; see
    /// [`DecayKinetics::time_to_target`](crate::traits::DecayKinetics::time_to_target).
    pub fn validate(&self) -> Result<(), ModelError> {
        for (name, value) in self.named_values() {
            if !(value.is_finite() && value > 0.0) {
                return Err(ModelError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Scalar quantities derived from a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedQuantities {
    /// ω = 2πf (rad/s).
    pub angular_frequency: f64,
    /// v_max = Aω (m/s).
    pub peak_velocity: f64,
    /// Ek = ½·m·v_max² (J).
    pub kinetic_energy: f64,
    /// γ̇ = v_max / d (s⁻¹).
    pub shear_rate: f64,
    /// k_d = α·f·Ek / µ (s⁻¹).
    pub decay_rate_constant: f64,
}

/// A decay curve sampled for display.
///
/// `times[i]` (s) pairs with `sizes[i]` (µm). `target_size` is where the
/// consumer draws its horizontal reference line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecaySeries {
    pub times: Vec<f64>,
    pub sizes: Vec<f64>,
    pub target_size: f64,
    pub time_to_target: f64,
}

impl DecaySeries {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// `(time, size)` pairs in sample order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.sizes.iter().copied())
    }

    /// Index of the first sample at or below the target size.
    pub fn first_below_target(&self) -> Option<usize> {
        self.sizes.iter().position(|&r| r <= self.target_size)
    }

    /// Size at the last sample, if any.
    pub fn final_size(&self) -> Option<f64> {
        self.sizes.last().copied()
    }
}
