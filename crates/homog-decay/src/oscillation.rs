//! Sinusoidal bead kinematics.
//!
//! The bead oscillates along the tube axis as `x(t) = A·sin(ωt)`, so its
//! velocity `A·ω·cos(ωt)` peaks at the model's `v_max`.

use std::f64::consts::TAU;

use crate::sampling::linspace;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeadOscillation {
    /// Amplitude (m).
    amplitude: f64,
    /// Frequency (Hz).
    frequency: f64,
}

impl BeadOscillation {
    pub fn new(amplitude: f64, frequency: f64) -> Self {
        Self { amplitude, frequency }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn angular_frequency(&self) -> f64 {
        TAU * self.frequency
    }

    /// Duration of one full cycle (s).
    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }

    pub fn peak_velocity(&self) -> f64 {
        self.amplitude * self.angular_frequency()
    }

    /// Position relative to the tube centre at time `t` (m).
    pub fn displacement(&self, t: f64) -> f64 {
        self.amplitude * (self.angular_frequency() * t).sin()
    }

    /// Axial velocity at time `t` (m/s).
    pub fn velocity(&self, t: f64) -> f64 {
        self.peak_velocity() * (self.angular_frequency() * t).cos()
    }

    /// Displacement at each sample time.
    pub fn trace(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.displacement(t)).collect()
    }

    /// `samples` evenly spaced times over `periods` cycles and the
    /// displacement at each.
    pub fn sample_periods(&self, periods: f64, samples: usize) -> (Vec<f64>, Vec<f64>) {
        let times = linspace(0.0, periods * self.period(), samples);
        let displacements = self.trace(&times);
        (times, displacements)
    }
}
