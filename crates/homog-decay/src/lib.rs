//! # homog-decay: Globule decay model for an oscillating-bead homogenizer.
//!
//! All calculations are closed-form and deterministic.
//!
//! - **Bead mechanics**: peak velocity `v = A·2πf`, kinetic energy
//!   `Ek = ½·m·v²` and shear rate `γ̇ = v / d` from the oscillation.
//! - **First-order decay**: globule size follows `R(t) = R0·exp(−k_d·t)` with
//!   `k_d = α·f·Ek / µ`.
//! - **Display sampling**: evenly spaced samples from zero to a margin past
//!   the time to target.
//! - **Oscillation kinematics**: bead displacement and velocity over time.

pub mod model;
pub mod oscillation;
pub mod sampling;

pub use homog_core::traits::DecayKinetics;
pub use model::DecayModel;
pub use oscillation::BeadOscillation;
pub use sampling::{linspace, SamplingPlan};
