//! Unit tests for an-core primitives.

#[cfg(test)]
mod geo {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::Vec2;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn bearing_points_at_target() {
        let origin = Vec2::ZERO;
        assert_eq!(origin.bearing_to(Vec2::new(1.0, 0.0)), 0.0);
        assert!((origin.bearing_to(Vec2::new(0.0, 2.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((origin.bearing_to(Vec2::new(-1.0, 0.0)) - PI).abs() < 1e-12);
    }

    #[test]
    fn from_angle_is_unit_length() {
        for k in 0..16 {
            let v = Vec2::from_angle(k as f64 * 0.7 - 3.0);
            assert!((v.length() - 1.0).abs() < 1e-12, "got {}", v.length());
        }
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(0.5, -1.0);
        assert_eq!(a + b, Vec2::new(1.5, 1.0));
        assert_eq!(a - b, Vec2::new(0.5, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn square_check() {
        assert!(Vec2::new(6.0, 7.0).within_square(10.0));
        assert!(!Vec2::new(10.5, 0.0).within_square(10.0));
    }

    #[test]
    fn display() {
        assert_eq!(Vec2::new(6.0, 7.0).to_string(), "(6.000, 7.000)");
    }
}

#[cfg(test)]
mod config {
    use crate::{MAX_RETURN_WAYPOINTS, NavConfig, NavError, SimConfig, Vec2};

    #[test]
    fn defaults_match_reference_layout() {
        let cfg = NavConfig::default();
        assert_eq!(cfg.dock, Vec2::new(0.0, 0.0));
        assert_eq!(cfg.shelf, Vec2::new(6.0, 7.0));
        assert_eq!(cfg.step_size, 0.15);
        assert_eq!(cfg.contact_threshold, 0.3);
        assert_eq!(cfg.pause_dwell_ticks, 20);
        assert_eq!(cfg.warehouse_half_extent, 10.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_step_rejected() {
        let cfg = NavConfig { step_size: 0.0, ..NavConfig::default() };
        assert!(matches!(cfg.validate(), Err(NavError::InvalidConfiguration(_))));
    }

    #[test]
    fn negative_or_nan_step_rejected() {
        for step in [-0.1, f64::NAN, f64::INFINITY] {
            let cfg = NavConfig { step_size: step, ..NavConfig::default() };
            assert!(cfg.validate().is_err(), "step {step} should be rejected");
        }
    }

    #[test]
    fn non_positive_contact_threshold_rejected() {
        for t in [0.0, -0.3] {
            let cfg = NavConfig { contact_threshold: t, ..NavConfig::default() };
            assert!(cfg.validate().is_err(), "threshold {t} should be rejected");
        }
    }

    #[test]
    fn smoothing_out_of_range_rejected() {
        let cfg = NavConfig { heading_smoothing: 1.5, ..NavConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_noise_rejected() {
        let cfg = NavConfig { noise_amplitude: -0.1, ..NavConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_finite_targets_rejected() {
        let cfg = NavConfig { shelf: Vec2::new(f64::NAN, 1.0), ..NavConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = NavConfig { dock: Vec2::new(0.0, f64::INFINITY), ..NavConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn targets_outside_the_warehouse_rejected() {
        let cfg = NavConfig { dock: Vec2::new(-10.5, 0.0), ..NavConfig::default() };
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.contains("dock"), "got {msg}");

        let cfg = NavConfig { shelf: Vec2::new(6.0, 10.01), ..NavConfig::default() };
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.contains("shelf"), "got {msg}");

        // Corners are on the floor.
        let cfg = NavConfig {
            dock: Vec2::new(-10.0, -10.0),
            shelf: Vec2::new(10.0, 10.0),
            ..NavConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn far_apart_targets_rejected_even_with_huge_floor() {
        let cfg = NavConfig {
            warehouse_half_extent: f64::MAX,
            dock: Vec2::new(-1e308, 0.0),
            shelf: Vec2::new(1e308, 0.0),
            ..NavConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(NavError::InvalidConfiguration(_))));

        let cfg = NavConfig {
            warehouse_half_extent: 1e10,
            dock: Vec2::new(1e9, 0.0),
            ..NavConfig::default()
        };
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.contains("waypoints"), "got {msg}");
    }

    #[test]
    fn oversized_contact_threshold_rejected() {
        let cfg = NavConfig { contact_threshold: 1e300, ..NavConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn worst_case_return_waypoints_bounds_reference_layout() {
        let cfg = NavConfig::default();
        // (0.3 + |(6, 7)|) / 0.15 = 63.46...
        assert_eq!(cfg.worst_case_return_waypoints(), 63.0);
        assert!(cfg.worst_case_return_waypoints() <= MAX_RETURN_WAYPOINTS);
    }

    #[test]
    fn error_message_names_the_field() {
        let cfg = NavConfig { step_size: 0.0, ..NavConfig::default() };
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.starts_with("invalid configuration"), "got {msg}");
        assert!(msg.contains("step_size"), "got {msg}");
    }

    #[test]
    fn without_noise_zeroes_amplitude() {
        let cfg = NavConfig::default().without_noise();
        assert_eq!(cfg.noise_amplitude, 0.0);
        assert_eq!(cfg.step_size, 0.15);
    }

    #[test]
    fn sim_config_defaults_and_validation() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.total_ticks, 400);
        assert_eq!(cfg.frame_interval_ms, 50);
        assert!(cfg.validate().is_ok());

        let bad = SimConfig { frame_interval_ms: 0, ..SimConfig::default() };
        assert!(bad.validate().is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::{FrameClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn multiple_of_handles_zero_interval() {
        assert!(Tick(0).is_multiple_of(1));
        assert!(Tick(10).is_multiple_of(5));
        assert!(!Tick(7).is_multiple_of(5));
        assert!(!Tick(10).is_multiple_of(0));
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = FrameClock::new(50);
        assert_eq!(clock.elapsed_ms(), 0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_ms(), 100);
    }

    #[test]
    fn reference_run_lasts_twenty_seconds() {
        let cfg = SimConfig::default();
        let mut clock = cfg.make_clock();
        for _ in 0..cfg.total_ticks {
            clock.advance();
        }
        assert_eq!(clock.current_tick, cfg.end_tick());
        assert_eq!(clock.elapsed_ms(), 20_000);
    }
}

#[cfg(test)]
mod rng {
    use crate::{NoNoise, NoiseSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.perturbation(0.3), r2.perturbation(0.3));
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r0 = SimRng::new(1);
        let mut r1 = SimRng::new(2);
        let a: Vec<f64> = (0..8).map(|_| r0.perturbation(0.3)).collect();
        let b: Vec<f64> = (0..8).map(|_| r1.perturbation(0.3)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn perturbation_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..10_000 {
            let v = rng.perturbation(0.3);
            assert!((-0.3..=0.3).contains(&v), "got {v}");
        }
    }

    #[test]
    fn zero_amplitude_is_exactly_zero() {
        let mut rng = SimRng::new(7);
        assert_eq!(rng.perturbation(0.0), 0.0);
        assert_eq!(NoNoise.perturbation(0.3), 0.0);
    }

    #[test]
    fn borrowed_source_forwards() {
        fn draw<N: NoiseSource>(mut source: N) -> f64 {
            source.perturbation(0.3)
        }
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        assert_eq!(a.perturbation(0.3), draw(&mut b));
    }
}
