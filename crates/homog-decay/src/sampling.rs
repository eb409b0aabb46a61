//! Time sampling for displayed decay curves.
//!
//! A display curve is `samples` evenly spaced times from zero to
//! `margin × time_to_target`, both ends included, evaluated through
//! [`DecayKinetics::decay_curve`].

use homog_core::constants::{DEFAULT_SAMPLE_COUNT, DISPLAY_TIME_MARGIN};
use homog_core::error::ModelError;
use homog_core::traits::DecayKinetics;
use homog_core::types::DecaySeries;

/// `samples` evenly spaced values from `start` to `end` inclusive.
///
/// Zero samples give an empty vector and one sample gives `[start]`. The
/// last value is exactly `end`.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let last = n - 1;
            let step = (end - start) / last as f64;
            (0..n)
                .map(|i| if i == last { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// How many samples a display curve has and how far past the target it runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingPlan {
    pub samples: usize,
    pub margin: f64,
}

impl Default for SamplingPlan {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLE_COUNT,
            margin: DISPLAY_TIME_MARGIN,
        }
    }
}

impl SamplingPlan {
    pub fn new(samples: usize, margin: f64) -> Self {
        Self { samples, margin }
    }

    /// Last sample time for a given time to target.
    pub fn horizon(&self, time_to_target: f64) -> f64 {
        self.margin * time_to_target
    }

    /// Sample the decay curve of `kinetics` for display.
    ///
    /// The margin must be finite and > 0; otherwise the sample times would be
    /// negative or NaN.
    pub fn sample<K: DecayKinetics + ?Sized>(&self, kinetics: &K) -> Result<DecaySeries, ModelError> {
        if !(self.margin.is_finite() && self.margin > 0.0) {
            return Err(ModelError::InvalidParameter { name: "margin", value: self.margin });
        }
        let time_to_target = kinetics.time_to_target()?;
        let horizon = self.horizon(time_to_target);
        if !horizon.is_finite() {
            return Err(ModelError::InvalidParameter { name: "margin", value: self.margin });
        }
        let times = linspace(0.0, horizon, self.samples);
        let sizes = kinetics.decay_curve(&times)?;
        Ok(DecaySeries {
            times,
            sizes,
            target_size: kinetics.target_size(),
            time_to_target,
        })
    }
}
