//! Unit tests for bm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ParticleId, TrialId};

    #[test]
    fn index_roundtrip() {
        let id = ParticleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ParticleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_default() {
        assert_eq!(TrialId::default(), TrialId::INVALID);
        assert_eq!(TrialId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(TrialId(7).to_string(), "TrialId(7)");
    }
}

#[cfg(test)]
mod particle {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{Particle, TrialRng};

    #[test]
    fn advance_moves_along_velocity() {
        let mut p = Particle::new(0.0, 0.0, 1.0, FRAC_PI_2, 1e-4);
        p.advance(1.0);
        assert!((p.x - 0.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn randomize_direction_preserves_speed() {
        let mut rng = TrialRng::from_seed(3);
        let p = Particle::new(0.3, -0.1, 2.5, 0.4, 1e-3);
        let speed = p.speed();
        for _ in 0..1000 {
            let theta = rng.angle();
            let mut q = p;
            q.randomize_direction(theta);
            assert!((q.speed() - speed).abs() <= 8.0 * f64::EPSILON * speed);
            assert_eq!((q.x, q.y), (p.x, p.y));
            let expected = if theta > PI { theta - 2.0 * PI } else { theta };
            assert!((q.angle() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn solver_is_symmetric() {
        let mut rng = TrialRng::from_seed(11);
        let mut hits = 0;
        for _ in 0..10_000 {
            let a = Particle::new(
                2.0 * rng.unit() - 1.0, 2.0 * rng.unit() - 1.0, 1.0, rng.angle(), 0.5,
            );
            let b = Particle::new(
                2.0 * rng.unit() - 1.0, 2.0 * rng.unit() - 1.0, 1.0, rng.angle(), 0.5,
            );
            let ab = a.collision_time(&b);
            assert_eq!(ab, b.collision_time(&a));
            hits += ab.is_some() as usize;
        }
        assert!(hits > 0, "a loose tolerance should produce some collisions");
    }

    #[test]
    fn tolerance_comparison_is_strict() {
        // tx = 1, ty = 1.5 exactly.
        let b = Particle::with_velocity(1.0, 1.5, 0.0, 0.0, 0.5);
        let a = Particle::with_velocity(0.0, 0.0, 1.0, 1.0, 0.5);
        assert_eq!(a.collision_time(&b), None);

        let loose = Particle { epsilon: 0.500_001, ..a };
        assert_eq!(loose.collision_time(&b), Some(1.0));
    }

    #[test]
    fn past_meetings_are_rejected() {
        let a = Particle::with_velocity(0.0, 0.0, 1.0, 1.0, 0.1);
        let behind = Particle::with_velocity(-1.0, -1.0, 0.0, 0.0, 0.1);
        assert_eq!(a.collision_time(&behind), None);

        let now = Particle::with_velocity(0.0, 0.0, -1.0, 0.0, 0.1);
        assert_eq!(a.collision_time(&now), None, "t = 0 is not in the future");
    }

    #[test]
    fn relocated_keeps_velocity() {
        let p = Particle::new(3.0, 4.0, 2.0, 1.0, 0.1);
        let q = p.relocated(0.0, 0.0);
        assert_eq!((q.vx, q.vy, q.epsilon), (p.vx, p.vy, p.epsilon));
        assert_eq!(q.distance_to_origin(), 0.0);
        assert!((p.distance_to_origin() - 5.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod rng {
    use crate::{TrialId, TrialRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = TrialRng::new(42, TrialId(3));
        let mut b = TrialRng::new(42, TrialId(3));
        for _ in 0..100 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn trials_get_distinct_streams() {
        let mut a = TrialRng::new(42, TrialId(0));
        let mut b = TrialRng::new(42, TrialId(1));
        let same = (0..100).filter(|_| a.unit() == b.unit()).count();
        assert!(same < 5);
    }

    #[test]
    fn angle_in_range() {
        let mut rng = TrialRng::from_seed(9);
        for _ in 0..1000 {
            let a = rng.angle();
            assert!((0.0..std::f64::consts::TAU).contains(&a));
        }
    }
}

#[cfg(test)]
mod config {
    use std::f64::consts::PI;

    use crate::{BmError, Model, TrialConfig};

    #[test]
    fn presets_validate() {
        TrialConfig::disk().validate().unwrap();
        TrialConfig::disk_substep().validate().unwrap();
        TrialConfig::square().validate().unwrap();
        TrialConfig::interacting().validate().unwrap();
    }

    #[test]
    fn disk_particle_count_uses_tick_radius() {
        let cfg = TrialConfig::disk();
        // R = (1 + 1) * 0.1 = 0.2
        assert!((cfg.disk_radius().unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(cfg.particle_count(), (1e4 * PI * 0.04f64).floor() as usize);
    }

    #[test]
    fn square_particle_count() {
        let cfg = TrialConfig::square();
        assert_eq!(cfg.particle_count(), (1e4 * 4.0 * 0.04f64).floor() as usize);
        assert_eq!(cfg.disk_radius(), None);
    }

    #[test]
    fn field_epsilon_is_scaled_only_for_interacting() {
        let mut cfg = TrialConfig::interacting();
        cfg.model = Model::Interacting { half_width: 0.2, field_tolerance_scale: 4.0 };
        assert!((cfg.field_epsilon() - 0.005 / 4.0).abs() < 1e-15);
        assert_eq!(TrialConfig::square().field_epsilon(), 0.005);
    }

    #[test]
    fn rejects_bad_parameters() {
        let mut cfg = TrialConfig::square();
        cfg.epsilon = 0.0;
        assert!(matches!(cfg.validate(), Err(BmError::InvalidParam { name: "epsilon", .. })));

        let mut cfg = TrialConfig::square();
        cfg.target_collisions = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = TrialConfig::interacting();
        cfg.model = Model::Interacting { half_width: 0.2, field_tolerance_scale: 0.0 };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_disk_is_a_config_error() {
        let mut cfg = TrialConfig::disk();
        cfg.density = 0.0;
        assert!(matches!(cfg.validate(), Err(BmError::Config(_))));

        // An empty square is legal: the trial simply ends stuck.
        let mut cfg = TrialConfig::square();
        cfg.density = 0.0;
        cfg.validate().unwrap();
    }

    #[test]
    fn model_labels() {
        assert_eq!(TrialConfig::disk().model.to_string(), "disk");
        assert_eq!(TrialConfig::interacting().model.as_str(), "interacting");
        assert!(TrialConfig::square().model.is_persistent());
        assert!(!TrialConfig::disk_substep().model.is_persistent());
    }
}
