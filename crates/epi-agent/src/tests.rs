//! Unit tests for agent records, the store, and the factory.

use epi_core::{AgentId, Location, PlaceId, PlaceKind, SimConfig, SimRng, Tick};

use crate::{Agent, AgentError, AgentFactory, AgentStore, CommuteLeg, CommutePhase, Health};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn factory() -> AgentFactory {
    AgentFactory::from_config(&SimConfig::default())
}

const HOMES: [PlaceId; 3] = [PlaceId(0), PlaceId(1), PlaceId(2)];
const WORKPLACES: [PlaceId; 2] = [PlaceId(10), PlaceId(11)];

#[cfg(test)]
mod agent_tests {
    use super::*;

    #[test]
    fn commuter_initial_state() {
        let a = Agent::commuter(PlaceId(1), PlaceId(10), 500, 900);
        assert_eq!(a.location, Location::AtPlace(PlaceId(1)));
        assert_eq!(a.health, Health::Susceptible);
        assert!(!a.is_homebound());

        let s = a.schedule.unwrap();
        assert_eq!(s.alarm, Tick(500));
        assert_eq!(s.next_leg, CommuteLeg::ToWork);
        assert_eq!(s.phase, CommutePhase::Idle);
    }

    #[test]
    fn homebound_has_no_schedule() {
        let a = Agent::homebound(PlaceId(2));
        assert!(a.is_homebound());
        assert_eq!(a.commute_destination(CommuteLeg::ToWork), None);
        assert_eq!(a.commute_destination(CommuteLeg::ToHome), Some(PlaceId(2)));
    }

    #[test]
    fn interval_after_crosses_legs() {
        let a = Agent::commuter(PlaceId(0), PlaceId(10), 500, 900);
        let s = a.schedule.unwrap();
        // After a work-bound commute the agent waits the home-bound interval.
        assert_eq!(s.interval_after(CommuteLeg::ToWork), 900);
        assert_eq!(s.interval_after(CommuteLeg::ToHome), 500);
    }

    #[test]
    fn leg_flip_alternates() {
        assert_eq!(CommuteLeg::ToWork.flip(), CommuteLeg::ToHome);
        assert_eq!(CommuteLeg::ToHome.flip(), CommuteLeg::ToWork);
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;

    #[test]
    fn ids_ascend_and_index() {
        let store = AgentStore::new(vec![
            Agent::homebound(PlaceId(0)),
            Agent::homebound(PlaceId(1)),
        ]);
        let ids: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1)]);
        assert_eq!(store.get(AgentId(1)).home, PlaceId(1));
    }

    #[test]
    fn count_infected_matches_health() {
        let mut store = AgentStore::new(vec![
            Agent::homebound(PlaceId(0)),
            Agent::homebound(PlaceId(0)),
        ]);
        assert_eq!(store.count_infected(), 0);
        store.get_mut(AgentId(0)).health = Health::Infected { recovers_at: Tick(9) };
        assert_eq!(store.count_infected(), 1);
    }

    #[test]
    fn locations_snapshot() {
        let mut store = AgentStore::new(vec![Agent::homebound(PlaceId(3))]);
        store.get_mut(AgentId(0)).location = Location::InTransit;
        assert_eq!(store.locations(), vec![Location::InTransit]);
    }
}

#[cfg(test)]
mod factory_tests {
    use super::*;

    #[test]
    fn spawn_draws_from_pools() {
        let mut rng = SimRng::new(42);
        let agents = factory().spawn(64, &HOMES, &WORKPLACES, &mut rng).unwrap();
        assert_eq!(agents.len(), 64);
        for a in &agents {
            assert!(HOMES.contains(&a.home));
            assert_eq!(a.location, Location::AtPlace(a.home));
            if let Some(s) = &a.schedule {
                assert!(WORKPLACES.contains(&s.workplace));
            }
        }
    }

    #[test]
    fn intervals_stay_inside_jitter_band() {
        let mut rng = SimRng::new(7);
        let agents = factory().spawn(256, &HOMES, &WORKPLACES, &mut rng).unwrap();
        for s in agents.iter().filter_map(|a| a.schedule.as_ref()) {
            assert!((400..800).contains(&s.go_work_ticks), "go_work {}", s.go_work_ticks);
            assert!((800..1200).contains(&s.go_home_ticks), "go_home {}", s.go_home_ticks);
            assert_eq!(s.alarm, Tick(s.go_work_ticks));
        }
    }

    #[test]
    fn jitters_are_mirrored() {
        // One sign per agent: an early leaver (go_work < base) must also be
        // an early returner (go_home < base), and vice versa.
        let mut rng = SimRng::new(11);
        let agents = factory().spawn(512, &HOMES, &WORKPLACES, &mut rng).unwrap();
        for s in agents.iter().filter_map(|a| a.schedule.as_ref()) {
            let work_early = s.go_work_ticks < 600;
            let home_early = s.go_home_ticks < 1_000;
            // Zero-magnitude jitters land exactly on the base and carry no sign.
            if s.go_work_ticks != 600 && s.go_home_ticks != 1_000 {
                assert_eq!(work_early, home_early, "{s:?}");
            }
        }
    }

    #[test]
    fn homebound_fraction_is_plausible() {
        let mut rng = SimRng::new(3);
        let agents = factory().spawn(2_000, &HOMES, &WORKPLACES, &mut rng).unwrap();
        let homebound = agents.iter().filter(|a| a.is_homebound()).count();
        // 25% of 2000 = 500; allow a wide stochastic band.
        assert!((350..650).contains(&homebound), "homebound = {homebound}");
    }

    #[test]
    fn empty_residential_pool_fails() {
        let mut rng = SimRng::new(0);
        let result = factory().spawn(1, &[], &WORKPLACES, &mut rng);
        assert!(matches!(result, Err(AgentError::EmptyPool(PlaceKind::Residential))));
    }

    #[test]
    fn empty_commercial_pool_fails_unless_all_homebound() {
        let mut rng = SimRng::new(0);
        let result = factory().spawn(1, &HOMES, &[], &mut rng);
        assert!(matches!(result, Err(AgentError::EmptyPool(PlaceKind::Commercial))));

        // With homebound_probability = 1.0 no workplace is ever selected.
        let all_home = AgentFactory { homebound_probability: 1.0, ..factory() };
        let agents = all_home.spawn(8, &HOMES, &[], &mut rng).unwrap();
        assert!(agents.iter().all(Agent::is_homebound));
    }

    #[test]
    fn oversized_jitter_fails() {
        let mut rng = SimRng::new(0);
        let bad = AgentFactory { commute_jitter_ticks: 600, ..factory() };
        assert!(matches!(
            bad.spawn(1, &HOMES, &WORKPLACES, &mut rng),
            Err(AgentError::JitterExceedsBase { jitter: 600, base: 600 })
        ));
    }

    #[test]
    fn spawn_zero_is_empty() {
        let mut rng = SimRng::new(0);
        assert!(factory().spawn(0, &[], &[], &mut rng).unwrap().is_empty());
    }
}
