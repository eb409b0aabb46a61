//! Model constants and the default operating point of the homogenizer.
//!
//! Model inputs are SI base units. The `DEFAULT_*` input values are in the
//! user-facing units of the input form (mm, g) and are converted with
//! [`MM_PER_M`] and [`G_PER_KG`] before they reach the model.

/// Empirical decay-efficiency constant used when none is supplied.
pub const DEFAULT_ALPHA: f64 = 0.8;

/// Number of time samples in a display curve.
pub const DEFAULT_SAMPLE_COUNT: usize = 300;

/// Largest number of samples a curve or trace may request.
pub const MAX_SAMPLE_COUNT: usize = 1_000_000;

/// Display horizon as a multiple of the time to target.
///
/// The curve runs past the target time so the target line is visibly
/// crossed instead of landing on the right edge.
///
/// # Examples
///
/// ```
/// use homog_core::constants::DISPLAY_TIME_MARGIN;
/// assert!(DISPLAY_TIME_MARGIN > 1.0);
/// ```
pub const DISPLAY_TIME_MARGIN: f64 = 1.2;

/// Millimetres per metre.
pub const MM_PER_M: f64 = 1_000.0;

/// Grams per kilogram.
pub const G_PER_KG: f64 = 1_000.0;

/// Smallest value accepted for any user-facing input.
pub const INPUT_MIN: f64 = 0.0001;

/// Largest value accepted for any user-facing input.
pub const INPUT_MAX: f64 = 100_000.0;

/// Default oscillation amplitude (mm).
pub const DEFAULT_AMPLITUDE_MM: f64 = 1.0;

/// Default oscillation frequency (Hz).
pub const DEFAULT_FREQUENCY_HZ: f64 = 20.0;

/// Default bead mass (g).
pub const DEFAULT_BEAD_MASS_G: f64 = 1.0;

/// Default dynamic viscosity (Pa·s), roughly water at room temperature.
pub const DEFAULT_VISCOSITY_PA_S: f64 = 0.001;

/// Default initial globule size (µm).
pub const DEFAULT_INITIAL_SIZE_UM: f64 = 100.0;

/// Default target globule size (µm).
pub const DEFAULT_TARGET_SIZE_UM: f64 = 10.0;

/// Default tube inner diameter (mm).
pub const DEFAULT_TUBE_DIAMETER_MM: f64 = 10.0;
