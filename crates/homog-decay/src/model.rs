//! Decay model implementing the [`DecayKinetics`] trait.
//!
//! Converts the mechanical and material parameters of a run into the bead's
//! peak velocity, kinetic energy and shear rate, and from those into the
//! first-order decay-rate constant. Every quantity is recomputed from the
//! stored parameters on demand.

use std::f64::consts::TAU;

use homog_core::error::ModelError;
use homog_core::traits::DecayKinetics;
use homog_core::types::{DerivedQuantities, ModelParameters};

use crate::oscillation::BeadOscillation;

/// Immutable decay model for one parameter snapshot.
///
/// Built fresh for each simulation request and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayModel {
    params: ModelParameters,
}

impl DecayModel {
    /// Validate `params` and build the model.
    ///
    /// Fails with [`ModelError::InvalidParameter`] when any parameter is not
    /// finite and strictly positive.
    pub fn new(params: ModelParameters) -> Result<Self, ModelError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    /// ω = 2πf (rad/s).
    pub fn angular_frequency(&self) -> f64 {
        TAU * self.params.frequency
    }

    /// v_max = A·ω (m/s).
    pub fn peak_velocity(&self) -> f64 {
        self.params.amplitude * self.angular_frequency()
    }

    /// Ek = ½·m·v_max² (J).
    pub fn kinetic_energy(&self) -> f64 {
        let v = self.peak_velocity();
        0.5 * self.params.bead_mass * v * v
    }

    /// γ̇ = v_max / d (s⁻¹).
    pub fn shear_rate(&self) -> f64 {
        self.peak_velocity() / self.params.tube_diameter
    }

    /// All derived scalars in one record.
    pub fn derived(&self) -> DerivedQuantities {
        DerivedQuantities {
            angular_frequency: self.angular_frequency(),
            peak_velocity: self.peak_velocity(),
            kinetic_energy: self.kinetic_energy(),
            shear_rate: self.shear_rate(),
            decay_rate_constant: self.decay_rate_constant(),
        }
    }

    /// Kinematics of the bead driving this model.
    pub fn oscillation(&self) -> BeadOscillation {
        BeadOscillation::new(self.params.amplitude, self.params.frequency)
    }
}

impl DecayKinetics for DecayModel {
    fn initial_size(&self) -> f64 {
        self.params.initial_size
    }

    fn target_size(&self) -> f64 {
        self.params.target_size
    }

    /// k_d = α·f·Ek / µ (s⁻¹).
    fn decay_rate_constant(&self) -> f64 {
        self.params.alpha * self.params.frequency * self.kinetic_energy() / self.params.viscosity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::LN_10;

    fn reference_params() -> ModelParameters {
        ModelParameters::new(0.001, 20.0, 0.001, 0.001, 100.0, 10.0, 0.01)
    }

    fn model() -> DecayModel {
        DecayModel::new(reference_params()).unwrap()
    }

    fn with(f: impl FnOnce(&mut ModelParameters)) -> DecayModel {
        let mut p = reference_params();
        f(&mut p);
        DecayModel::new(p).unwrap()
    }

    fn rel_eq(a: f64, b: f64, tol: f64) -> bool {
        ((a - b) / b).abs() < tol
    }

    // --- reference operating point ---

    #[test]
    fn reference_peak_velocity() {
        let v = model().peak_velocity();
        assert!((v - 0.125_664).abs() < 1e-6, "v_max = {v}");
    }

    #[test]
    fn reference_kinetic_energy() {
        let ek = model().kinetic_energy();
        assert!((ek - 7.895_68e-6).abs() < 1e-10, "Ek = {ek}");
    }

    #[test]
    fn reference_shear_rate() {
        let g = model().shear_rate();
        assert!((g - 12.566_37).abs() < 1e-4, "shear = {g}");
    }

    #[test]
    fn reference_decay_rate_constant() {
        let k = model().decay_rate_constant();
        assert!((k - 0.126_331).abs() < 1e-5, "k_d = {k}");
    }

    #[test]
    fn reference_time_to_target() {
        let m = model();
        let t = m.time_to_target().unwrap();
        assert!((t - 18.2266).abs() < 1e-3, "t* = {t}");
        assert!(rel_eq(t, LN_10 / m.decay_rate_constant(), 1e-12));
    }

    #[test]
    fn derived_matches_accessors() {
        let m = model();
        let d = m.derived();
        assert_eq!(d.peak_velocity, m.peak_velocity());
        assert_eq!(d.kinetic_energy, m.kinetic_energy());
        assert_eq!(d.shear_rate, m.shear_rate());
        assert_eq!(d.decay_rate_constant, m.decay_rate_constant());
        assert_eq!(d.angular_frequency, TAU * 20.0);
    }

    // --- construction ---

    #[test]
    fn rejects_nonpositive_mechanical_parameters() {
        let cases: [(&str, fn(&mut ModelParameters)); 5] = [
            ("amplitude", |p: &mut ModelParameters| p.amplitude = 0.0),
            ("frequency", |p: &mut ModelParameters| p.frequency = -20.0),
            ("bead_mass", |p: &mut ModelParameters| p.bead_mass = 0.0),
            ("viscosity", |p: &mut ModelParameters| p.viscosity = -0.001),
            ("tube_diameter", |p: &mut ModelParameters| p.tube_diameter = 0.0),
        ];
        for (field, mutate) in cases {
            let mut p = reference_params();
            mutate(&mut p);
            match DecayModel::new(p) {
                Err(ModelError::InvalidParameter { name, .. }) => assert_eq!(name, field),
                other => panic!("{field}: expected InvalidParameter, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_nonpositive_sizes_and_alpha() {
        let p = ModelParameters { initial_size: 0.0, ..reference_params() };
        assert!(DecayModel::new(p).is_err());
        let p = ModelParameters { target_size: -1.0, ..reference_params() };
        assert!(DecayModel::new(p).is_err());
        let p = reference_params().with_alpha(0.0);
        assert!(DecayModel::new(p).is_err());
    }

    #[test]
    fn parameters_round_trip() {
        assert_eq!(*model().parameters(), reference_params());
    }

    // --- time to target ---

    #[test]
    fn target_equal_to_initial_is_undefined() {
        let m = with(|p| p.target_size = p.initial_size);
        assert_eq!(
            m.time_to_target(),
            Err(ModelError::UndefinedTimeToTarget { initial: 100.0, target: 100.0 })
        );
    }

    #[test]
    fn target_above_initial_is_undefined() {
        let m = with(|p| p.target_size = 150.0);
        assert!(matches!(
            m.time_to_target(),
            Err(ModelError::UndefinedTimeToTarget { .. })
        ));
    }

    #[test]
    fn underflowing_rate_is_degenerate() {
        let m = with(|p| {
            p.amplitude = 1e-200;
            p.bead_mass = 1e-200;
        });
        assert_eq!(m.decay_rate_constant(), 0.0);
        assert!(matches!(
            m.time_to_target(),
            Err(ModelError::DegenerateDecay { .. })
        ));
        assert!(matches!(
            m.decay_curve(&[0.0]),
            Err(ModelError::DegenerateDecay { .. })
        ));
    }

    #[test]
    fn overflowing_rate_is_degenerate() {
        let m = with(|p| {
            p.amplitude = 1e200;
            p.viscosity = 1e-200;
        });
        assert!(matches!(
            m.checked_rate(),
            Err(ModelError::DegenerateDecay { .. })
        ));
    }

    // --- decay curve ---

    #[test]
    fn curve_starts_at_initial_size() {
        let sizes = model().decay_curve(&[0.0]).unwrap();
        assert_eq!(sizes, vec![100.0]);
    }

    #[test]
    fn curve_of_empty_times_is_empty() {
        assert!(model().decay_curve(&[]).unwrap().is_empty());
    }

    #[test]
    fn curve_hits_target_at_time_to_target() {
        let m = model();
        let t = m.time_to_target().unwrap();
        let r = m.size_at(t).unwrap();
        assert!((r - 10.0).abs() < 1e-9, "R(t*) = {r}");
    }

    #[test]
    fn curve_decreasing_and_positive() {
        let m = model();
        let times: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let sizes = m.decay_curve(&times).unwrap();
        for w in sizes.windows(2) {
            assert!(w[1] < w[0], "not decreasing: {} -> {}", w[0], w[1]);
        }
        assert!(sizes.iter().all(|&r| r > 0.0));
    }

    #[test]
    fn curve_matches_size_at() {
        let m = model();
        let times = [0.0, 2.5, 7.0, 30.0];
        let sizes = m.decay_curve(&times).unwrap();
        for (t, r) in times.iter().zip(&sizes) {
            assert_eq!(*r, m.size_at(*t).unwrap());
        }
    }

    // --- scaling laws ---

    #[test]
    fn doubling_viscosity_halves_rate() {
        let k1 = model().decay_rate_constant();
        let k2 = with(|p| p.viscosity *= 2.0).decay_rate_constant();
        assert!(rel_eq(k2, k1 / 2.0, 1e-12), "{k2} vs {}", k1 / 2.0);
    }

    #[test]
    fn doubling_amplitude_doubles_peak_velocity() {
        let v1 = model().peak_velocity();
        let v2 = with(|p| p.amplitude *= 2.0).peak_velocity();
        assert!(rel_eq(v2, 2.0 * v1, 1e-12));
    }

    #[test]
    fn doubling_frequency_doubles_peak_velocity() {
        let v1 = model().peak_velocity();
        let v2 = with(|p| p.frequency *= 2.0).peak_velocity();
        assert!(rel_eq(v2, 2.0 * v1, 1e-12));
    }

    #[test]
    fn rate_linear_in_alpha() {
        let k1 = model().decay_rate_constant();
        let k2 = with(|p| p.alpha *= 3.0).decay_rate_constant();
        assert!(rel_eq(k2, 3.0 * k1, 1e-12));
    }

    #[test]
    fn larger_mass_decays_faster() {
        let t1 = model().time_to_target().unwrap();
        let t2 = with(|p| p.bead_mass *= 4.0).time_to_target().unwrap();
        assert!(t2 < t1, "{t2} should be < {t1}");
    }

    #[test]
    fn oscillation_shares_peak_velocity() {
        let m = model();
        assert!(rel_eq(m.oscillation().peak_velocity(), m.peak_velocity(), 1e-12));
    }

    #[test]
    fn model_is_object_safe() {
        let m = model();
        let dyn_m: &dyn DecayKinetics = &m;
        assert_eq!(dyn_m.initial_size(), 100.0);
    }

    // --- proptest ---

    fn arb_params() -> impl Strategy<Value = ModelParameters> {
        (
            1e-4f64..1e-2,
            1.0f64..200.0,
            1e-4f64..1e-2,
            1e-4f64..1.0,
            1.0f64..1_000.0,
            0.05f64..0.66,
            1e-3f64..0.1,
            0.1f64..2.0,
        )
            .prop_map(|(a, f, m, mu, r0, ratio, d, alpha)| {
                ModelParameters::new(a, f, m, mu, r0, r0 * ratio, d).with_alpha(alpha)
            })
    }

    proptest! {
        #[test]
        fn curve_at_zero_is_initial(p in arb_params()) {
            let m = DecayModel::new(p).unwrap();
            prop_assert_eq!(m.decay_curve(&[0.0]).unwrap()[0], p.initial_size);
        }

        #[test]
        fn time_to_target_round_trip(p in arb_params()) {
            let m = DecayModel::new(p).unwrap();
            let t = m.time_to_target().unwrap();
            prop_assert!(t.is_finite() && t > 0.0);
            let r = m.size_at(t).unwrap();
            prop_assert!(
                ((r - p.target_size) / p.target_size).abs() < 1e-9,
                "R(t*) = {} vs target {}", r, p.target_size
            );
        }

        #[test]
        fn curve_monotonic(p in arb_params(), a in 0.0f64..1.0, b in 0.0f64..1.0) {
            let m = DecayModel::new(p).unwrap();
            let t = m.time_to_target().unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let r = m.decay_curve(&[lo * t, hi * t]).unwrap();
            prop_assert!(r[1] <= r[0], "R({}) = {} > R({}) = {}", hi * t, r[1], lo * t, r[0]);
        }

        #[test]
        fn viscosity_inverse(p in arb_params(), factor in 1.1f64..10.0) {
            let k1 = DecayModel::new(p).unwrap().decay_rate_constant();
            let scaled = ModelParameters { viscosity: p.viscosity * factor, ..p };
            let k2 = DecayModel::new(scaled).unwrap().decay_rate_constant();
            prop_assert!(((k2 * factor - k1) / k1).abs() < 1e-12);
        }

        #[test]
        fn deterministic(p in arb_params()) {
            let a = DecayModel::new(p).unwrap();
            let b = DecayModel::new(p).unwrap();
            prop_assert_eq!(a.derived(), b.derived());
            prop_assert_eq!(a.time_to_target(), b.time_to_target());
        }
    }
}
