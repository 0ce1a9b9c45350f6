//! Unit tests for the place registry and occupancy reconciliation.

use epi_core::{AgentId, Location, PlaceId, PlaceKind};

use crate::{PlaceRegistry, WorldError, occupancy::reconcile};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Registry with residential places 0 and 1 and commercial place 10.
fn small_registry() -> PlaceRegistry {
    PlaceRegistry::new([
        (PlaceId(0), PlaceKind::Residential),
        (PlaceId(1), PlaceKind::Residential),
        (PlaceId(10), PlaceKind::Commercial),
    ])
    .unwrap()
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn pools_split_by_kind() {
        let registry = small_registry();
        assert_eq!(registry.place_count(), 3);
        assert_eq!(registry.residential(), &[PlaceId(0), PlaceId(1)]);
        assert_eq!(registry.commercial(), &[PlaceId(10)]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let result = PlaceRegistry::new([
            (PlaceId(3), PlaceKind::Residential),
            (PlaceId(3), PlaceKind::Commercial),
        ]);
        assert!(matches!(result, Err(WorldError::DuplicatePlace(PlaceId(3)))));
    }

    #[test]
    fn unknown_id_rejected_by_get() {
        let registry = small_registry();
        assert!(matches!(
            registry.get(PlaceId(99)),
            Err(WorldError::UnknownPlace(PlaceId(99)))
        ));
        assert_eq!(registry.get(PlaceId(10)).unwrap().kind, PlaceKind::Commercial);
    }

    #[test]
    fn sparse_ids_resolve() {
        let registry = PlaceRegistry::new([
            (PlaceId(1_000), PlaceKind::Residential),
            (PlaceId(7), PlaceKind::Commercial),
        ])
        .unwrap();
        assert_eq!(registry.get(PlaceId(1_000)).unwrap().id, PlaceId(1_000));
        assert!(registry.occupants(PlaceId(7)).is_empty());
    }

    #[test]
    fn swap_removal_repairs_slots() {
        let mut registry = small_registry();
        // Three occupants; removing the first swaps the last into its slot.
        registry.insert(PlaceId(0), AgentId(0));
        registry.insert(PlaceId(0), AgentId(1));
        registry.insert(PlaceId(0), AgentId(2));
        registry.remove(PlaceId(0), AgentId(0));
        assert_eq!(registry.occupants(PlaceId(0)), &[AgentId(2), AgentId(1)]);

        // The swapped agent's slot must have been re-pointed: removing it
        // again must leave exactly agent 1.
        registry.remove(PlaceId(0), AgentId(2));
        assert_eq!(registry.occupants(PlaceId(0)), &[AgentId(1)]);
    }
}

#[cfg(test)]
mod reconcile_tests {
    use super::*;

    #[test]
    fn arrival_inserts_once() {
        let mut registry = small_registry();
        let mut last_known = None;

        reconcile(&mut registry, AgentId(4), Location::AtPlace(PlaceId(1)), &mut last_known);
        assert_eq!(registry.occupants(PlaceId(1)), &[AgentId(4)]);
        assert!(registry.get(PlaceId(1)).unwrap().is_occupied_by(AgentId(4)));
        assert_eq!(last_known, Some(PlaceId(1)));

        // Idempotent: a second call with no location change mutates nothing.
        reconcile(&mut registry, AgentId(4), Location::AtPlace(PlaceId(1)), &mut last_known);
        assert_eq!(registry.occupants(PlaceId(1)), &[AgentId(4)]);
    }

    #[test]
    fn departure_removes_and_clears() {
        let mut registry = small_registry();
        let mut last_known = None;
        reconcile(&mut registry, AgentId(4), Location::AtPlace(PlaceId(1)), &mut last_known);

        reconcile(&mut registry, AgentId(4), Location::InTransit, &mut last_known);
        assert!(registry.occupants(PlaceId(1)).is_empty());
        assert_eq!(last_known, None);

        // Still in transit next tick: nothing to remove.
        reconcile(&mut registry, AgentId(4), Location::InTransit, &mut last_known);
        assert!(registry.occupants(PlaceId(1)).is_empty());
    }

    #[test]
    fn full_trip_sequence() {
        let mut registry = small_registry();
        let mut last_known = None;
        let agent = AgentId(0);

        reconcile(&mut registry, agent, Location::AtPlace(PlaceId(0)), &mut last_known);
        reconcile(&mut registry, agent, Location::InTransit, &mut last_known);
        reconcile(&mut registry, agent, Location::AtPlace(PlaceId(10)), &mut last_known);

        assert!(registry.occupants(PlaceId(0)).is_empty());
        assert_eq!(registry.occupants(PlaceId(10)), &[agent]);
        assert_eq!(last_known, Some(PlaceId(10)));
    }

    #[test]
    fn direct_place_to_place_report_keeps_single_occupancy() {
        // A teleporting provider can report home→work with no transit tick
        // in between; the agent must not stay listed at home.
        let mut registry = small_registry();
        let mut last_known = None;
        let agent = AgentId(0);

        reconcile(&mut registry, agent, Location::AtPlace(PlaceId(0)), &mut last_known);
        reconcile(&mut registry, agent, Location::AtPlace(PlaceId(10)), &mut last_known);

        assert!(registry.occupants(PlaceId(0)).is_empty());
        assert_eq!(registry.occupants(PlaceId(10)), &[agent]);
        registry
            .check_consistency(&[Location::AtPlace(PlaceId(10))])
            .unwrap();
    }
}

#[cfg(test)]
mod consistency_tests {
    use super::*;

    #[test]
    fn consistent_world_passes() {
        let mut registry = small_registry();
        registry.insert(PlaceId(0), AgentId(0));
        registry.insert(PlaceId(10), AgentId(2));
        let locations = [
            Location::AtPlace(PlaceId(0)),
            Location::InTransit,
            Location::AtPlace(PlaceId(10)),
        ];
        registry.check_consistency(&locations).unwrap();
    }

    #[test]
    fn listed_while_in_transit_fails() {
        let mut registry = small_registry();
        registry.insert(PlaceId(0), AgentId(0));
        let result = registry.check_consistency(&[Location::InTransit]);
        assert!(matches!(result, Err(WorldError::Inconsistent { agent: AgentId(0), .. })));
    }

    #[test]
    fn at_place_but_listed_nowhere_fails() {
        let registry = small_registry();
        let result = registry.check_consistency(&[Location::AtPlace(PlaceId(0))]);
        assert!(matches!(result, Err(WorldError::Inconsistent { agent: AgentId(0), .. })));
    }

    #[test]
    fn listed_in_wrong_place_fails() {
        let mut registry = small_registry();
        registry.insert(PlaceId(1), AgentId(0));
        let result = registry.check_consistency(&[Location::AtPlace(PlaceId(0))]);
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use super::*;
    use crate::load_places_reader;

    #[test]
    fn parses_valid_rows() {
        let csv = "place_id,kind\n0,residential\n5,commercial\n9, residential\n";
        let defs = load_places_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            defs,
            vec![
                (PlaceId(0), PlaceKind::Residential),
                (PlaceId(5), PlaceKind::Commercial),
                (PlaceId(9), PlaceKind::Residential),
            ]
        );
    }

    #[test]
    fn rejects_unknown_kind() {
        let csv = "place_id,kind\n0,industrial\n";
        let result = load_places_reader(Cursor::new(csv));
        assert!(matches!(result, Err(WorldError::Parse(_))));
    }

    #[test]
    fn loaded_duplicates_rejected_at_registry() {
        let csv = "place_id,kind\n0,residential\n0,commercial\n";
        let defs = load_places_reader(Cursor::new(csv)).unwrap();
        assert!(matches!(
            PlaceRegistry::new(defs),
            Err(WorldError::DuplicatePlace(PlaceId(0)))
        ));
    }
}
