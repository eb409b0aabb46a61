//! # homog-sim
//!
//! Runs the homogenizer decay model from a user-facing configuration:
//! - [`config`]: parameters in input-form units, layered loading, SI conversion
//! - [`run`]: build a model from a config snapshot and sample its curve
//! - [`export`]: CSV, JSON and text renderings of a run

pub mod config;
pub mod error;
pub mod export;
pub mod run;

pub use config::SimulationConfig;
pub use error::SimError;
pub use run::{run_simulation, SimulationReport};
