//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, PlaceId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(PlaceId(100) > PlaceId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(PlaceId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(PlaceId(7).to_string(), "PlaceId(7)");
    }
}

#[cfg(test)]
mod location {
    use crate::{Location, PlaceId};

    #[test]
    fn place_accessor() {
        assert_eq!(Location::AtPlace(PlaceId(3)).place(), Some(PlaceId(3)));
        assert_eq!(Location::InTransit.place(), None);
    }

    #[test]
    fn predicates() {
        assert!(Location::AtPlace(PlaceId(0)).is_at_place());
        assert!(Location::InTransit.is_in_transit());
        assert!(!Location::InTransit.is_at_place());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn config_tunables_mirror_initial_values() {
        let config = SimConfig {
            transmission_probability: 0.5,
            speed_multiplier: 7.0,
            tick_interval_ms: 16,
            ..SimConfig::default()
        };
        let t = config.tunables();
        assert_eq!(t.transmission_probability, 0.5);
        assert_eq!(t.speed_multiplier, 7.0);
        assert_eq!(t.tick_interval_ms, 16);
    }

    #[test]
    fn end_tick_is_total() {
        let config = SimConfig { total_ticks: 123, ..SimConfig::default() };
        assert_eq!(config.end_tick(), Tick(123));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = AgentRng::new(99, AgentId(5));
        let mut b = AgentRng::new(99, AgentId(5));
        for _ in 0..32 {
            assert_eq!(a.gen_range(0u64..1_000_000), b.gen_range(0u64..1_000_000));
        }
    }

    #[test]
    fn different_agents_different_streams() {
        let mut a = AgentRng::new(99, AgentId(0));
        let mut b = AgentRng::new(99, AgentId(1));
        let va: Vec<u64> = (0..8).map(|_| a.gen_range(0..u64::MAX)).collect();
        let vb: Vec<u64> = (0..8).map(|_| b.gen_range(0..u64::MAX)).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(1, AgentId(0));
        assert!(rng.gen_bool(1.0));
        assert!(!rng.gen_bool(0.0));
        // Out-of-range probabilities are clamped, not panicking.
        assert!(rng.gen_bool(2.0));
    }

    #[test]
    fn sim_rng_reproducible() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0u32..100), b.gen_range(0u32..100));
        }
    }
}
