//! Trait interfaces for the homogenizer model.
//!
//! - [`DecayKinetics`]: first-order globule decay (homog-decay implements)

use crate::error::ModelError;

/// First-order exponential decay of globule size.
///
/// Implementors supply the initial and target sizes and the rate constant;
/// the kinetics built on top of them are provided as default methods. Sizes
/// are in µm, times in seconds, the rate constant in s⁻¹.
pub trait DecayKinetics: Send + Sync {
    /// Globule size at `t = 0` (µm).
    fn initial_size(&self) -> f64;

    /// Globule size the process should reach (µm).
    fn target_size(&self) -> f64;

    /// Decay-rate constant `k_d` (s⁻¹).
    fn decay_rate_constant(&self) -> f64;

    /// The rate constant, rejected when it is zero, negative or non-finite.
    fn checked_rate(&self) -> Result<f64, ModelError> {
        let rate = self.decay_rate_constant();
        if rate.is_finite() && rate > 0.0 {
            Ok(rate)
        } else {
            Err(ModelError::DegenerateDecay { rate })
        }
    }

    /// Elapsed time for the size to fall from the initial to the target size.
    ///
    /// `t* = ln(R0 / R_target) / k_d`. Requires `0 < R_target < R0`.
    ///
    /// A time that overflows (or rounds to zero) is reported as
    /// [`ModelError::DegenerateDecay`].
    fn time_to_target(&self) -> Result<f64, ModelError> {
        let initial = self.initial_size();
        let target = self.target_size();
        if !(target > 0.0 && target < initial) {
            return Err(ModelError::UndefinedTimeToTarget { initial, target });
        }
        let rate = self.checked_rate()?;
        let time = (initial / target).ln() / rate;
        if time.is_finite() && time > 0.0 {
            Ok(time)
        } else {
            Err(ModelError::DegenerateDecay { rate })
        }
    }

    /// Globule size at a single time `t`.
    fn size_at(&self, t: f64) -> Result<f64, ModelError> {
        let rate = self.checked_rate()?;
        Ok(self.initial_size() * (-rate * t).exp())
    }

    /// Globule size `R0 · exp(−k_d · t)` at each sample time.
    ///
    /// An empty slice yields an empty curve.
    fn decay_curve(&self, times: &[f64]) -> Result<Vec<f64>, ModelError> {
        let rate = self.checked_rate()?;
        let initial = self.initial_size();
        Ok(times.iter().map(|&t| initial * (-rate * t).exp()).collect())
    }
}
