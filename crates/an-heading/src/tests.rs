//! Unit tests for an-heading.

use an_core::{NavConfig, NoNoise, NoiseSource, Pose, SimRng, Vec2};

use crate::HeadingModel;

/// Noise source that replays a fixed value.
struct Constant(f64);

impl NoiseSource for Constant {
    fn perturbation(&mut self, amplitude: f64) -> f64 {
        self.0.clamp(-amplitude, amplitude)
    }
}

fn reference_model() -> HeadingModel {
    HeadingModel::new(&NavConfig::default())
}

#[cfg(test)]
mod step_geometry {
    use super::*;

    #[test]
    fn step_length_is_constant_for_any_heading() {
        let model = reference_model();
        let mut rng = SimRng::new(3);
        for k in 0..200 {
            let pose = Pose::new(Vec2::new(k as f64 * 0.05 - 5.0, 2.0), k as f64 * 1.3 - 40.0);
            let next = model.compute(pose, &mut rng);
            let d = pose.position.distance(next.position);
            assert!((d - 0.15).abs() < 1e-12, "step {k}: moved {d}");
        }
    }

    #[test]
    fn moves_along_new_heading() {
        let model = reference_model();
        let pose = Pose::new(Vec2::new(1.0, -2.0), 0.4);
        let next = model.compute(pose, &mut NoNoise);
        let delta = next.position - pose.position;
        assert!((delta.y.atan2(delta.x) - next.heading).abs() < 1e-12);
    }
}

#[cfg(test)]
mod heading_update {
    use super::*;

    #[test]
    fn first_step_from_dock_matches_closed_form() {
        let model = reference_model();
        let start = Pose::new(Vec2::ZERO, 0.0);
        let next = model.compute(start, &mut NoNoise);

        let bearing = 7.0f64.atan2(6.0);
        let heading = 0.7 * 0.0 + 0.3 * bearing;
        assert!((next.heading - heading).abs() < 1e-12);
        assert!((next.position.x - 0.15 * heading.cos()).abs() < 1e-12);
        assert!((next.position.y - 0.15 * heading.sin()).abs() < 1e-12);
    }

    #[test]
    fn aligned_heading_is_a_fixed_point() {
        let model = reference_model();
        let pos = Vec2::new(1.0, 1.0);
        let bearing = pos.bearing_to(Vec2::new(6.0, 7.0));
        let next = model.compute(Pose::new(pos, bearing), &mut NoNoise);
        assert!((next.heading - bearing).abs() < 1e-12);
    }

    #[test]
    fn noise_is_added_after_smoothing() {
        let model = reference_model();
        let pose = Pose::new(Vec2::new(-3.0, 4.0), 2.0);
        let clean = model.compute(pose, &mut NoNoise);
        let noisy = model.compute(pose, &mut Constant(0.25));
        assert!((noisy.heading - clean.heading - 0.25).abs() < 1e-12);
    }

    #[test]
    fn noise_is_bounded_by_amplitude() {
        let model = reference_model();
        let pose = Pose::new(Vec2::new(2.0, 2.0), 0.1);
        let clean = model.biased_heading(pose.position, pose.heading);
        let mut rng = SimRng::new(11);
        for _ in 0..1_000 {
            let next = model.compute(pose, &mut rng);
            assert!((next.heading - clean).abs() <= 0.3 + 1e-12);
        }
    }

    #[test]
    fn zero_amplitude_config_ignores_noise_source() {
        let model = HeadingModel::new(&NavConfig::default().without_noise());
        let pose = Pose::new(Vec2::new(0.5, 0.5), -1.0);
        let a = model.compute(pose, &mut SimRng::new(1));
        let b = model.compute(pose, &mut NoNoise);
        assert_eq!(a, b);
    }

    #[test]
    fn heading_is_not_wrapped() {
        let model = reference_model();
        let pose = Pose::new(Vec2::ZERO, 100.0);
        let next = model.compute(pose, &mut NoNoise);
        assert!(next.heading > 60.0, "heading was normalised: {}", next.heading);
    }

    #[test]
    fn seeded_runs_reproduce() {
        let model = reference_model();
        let mut a = SimRng::new(2024);
        let mut b = SimRng::new(2024);
        let mut pa = Pose::default();
        let mut pb = Pose::default();
        for _ in 0..50 {
            pa = model.compute(pa, &mut a);
            pb = model.compute(pb, &mut b);
        }
        assert_eq!(pa, pb);
    }
}
