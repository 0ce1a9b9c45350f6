//! The `PlaceRegistry` — every place in the world plus occupancy indexing.

use rustc_hash::FxHashMap;

use epi_core::{AgentId, Location, PlaceId, PlaceKind};

use crate::{Place, WorldError, WorldResult};

/// Holds all places, the residential/commercial zone pools, and a global
/// agent→slot index over the per-place occupancy sets.
///
/// Place ids are assigned by the external world builder and may be sparse;
/// the registry resolves them through a hash index rather than assuming
/// dense indices.
///
/// # Occupancy indexing
///
/// `slots[agent]` is the agent's position inside its current place's
/// occupancy `Vec`.  Because an agent occupies at most one place, one map
/// covers the whole world.  Removal swap-pops the occupant and re-points the
/// slot of whichever agent got swapped into the hole, so both insert and
/// remove are O(1).
pub struct PlaceRegistry {
    places: Vec<Place>,
    /// PlaceId → index into `places`.
    index: FxHashMap<PlaceId, usize>,
    residential: Vec<PlaceId>,
    commercial: Vec<PlaceId>,
    /// AgentId → position in its current place's occupancy set.
    slots: FxHashMap<AgentId, usize>,
}

impl PlaceRegistry {
    /// Build a registry from `(id, kind)` pairs supplied by the world builder.
    ///
    /// # Errors
    ///
    /// `WorldError::DuplicatePlace` if an id appears more than once.
    pub fn new<I>(definitions: I) -> WorldResult<Self>
    where
        I: IntoIterator<Item = (PlaceId, PlaceKind)>,
    {
        let mut registry = Self {
            places: Vec::new(),
            index: FxHashMap::default(),
            residential: Vec::new(),
            commercial: Vec::new(),
            slots: FxHashMap::default(),
        };

        for (id, kind) in definitions {
            if registry.index.contains_key(&id) {
                return Err(WorldError::DuplicatePlace(id));
            }
            registry.index.insert(id, registry.places.len());
            registry.places.push(Place::new(id, kind));
            match kind {
                PlaceKind::Residential => registry.residential.push(id),
                PlaceKind::Commercial => registry.commercial.push(id),
            }
        }

        Ok(registry)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Resolve a place id, failing on ids the world builder never supplied.
    pub fn get(&self, place: PlaceId) -> WorldResult<&Place> {
        self.index
            .get(&place)
            .map(|&i| &self.places[i])
            .ok_or(WorldError::UnknownPlace(place))
    }

    /// Iterator over all places in registration order.
    pub fn places(&self) -> impl Iterator<Item = &Place> + '_ {
        self.places.iter()
    }

    /// Ids of all residential places (the home pool).
    pub fn residential(&self) -> &[PlaceId] {
        &self.residential
    }

    /// Ids of all commercial places (the workplace pool).
    pub fn commercial(&self) -> &[PlaceId] {
        &self.commercial
    }

    /// Agents currently inside `place`, in insertion order.
    ///
    /// # Panics
    /// Panics if `place` was never registered — occupancy callers only hold
    /// ids that passed setup validation.
    #[inline]
    pub fn occupants(&self, place: PlaceId) -> &[AgentId] {
        &self.places[self.index[&place]].occupants
    }

    // ── Occupancy mutation (used by `occupancy::reconcile`) ───────────────

    /// Add `agent` to `place`'s occupancy set.
    ///
    /// The agent must not currently occupy any place.
    pub(crate) fn insert(&mut self, place: PlaceId, agent: AgentId) {
        debug_assert!(
            !self.slots.contains_key(&agent),
            "{agent} inserted while already occupying a place"
        );
        let occupants = &mut self.places[self.index[&place]].occupants;
        self.slots.insert(agent, occupants.len());
        occupants.push(agent);
    }

    /// Remove `agent` from `place`'s occupancy set.
    ///
    /// No-op if the agent is not listed anywhere (keeps `reconcile`
    /// idempotent even against a stale caller).
    pub(crate) fn remove(&mut self, place: PlaceId, agent: AgentId) {
        let Some(slot) = self.slots.remove(&agent) else {
            debug_assert!(false, "{agent} removed from {place} but occupies nothing");
            return;
        };
        let occupants = &mut self.places[self.index[&place]].occupants;
        debug_assert_eq!(occupants[slot], agent, "slot index out of step with occupancy set");
        occupants.swap_remove(slot);
        if let Some(&moved) = occupants.get(slot) {
            self.slots.insert(moved, slot);
        }
    }

    // ── Invariant check ───────────────────────────────────────────────────

    /// Verify the occupancy invariant against a full set of agent locations
    /// (indexed by `AgentId`): an agent id appears in exactly one occupancy
    /// set iff its location is `AtPlace`, and that set belongs to the place
    /// it reports; otherwise it appears in none.
    ///
    /// Intended for tests and debug sweeps; a failure is a programmer error,
    /// not a runtime condition.
    pub fn check_consistency(&self, locations: &[Location]) -> WorldResult<()> {
        let mut seen_at: Vec<Option<PlaceId>> = vec![None; locations.len()];

        for place in &self.places {
            for &agent in &place.occupants {
                let Some(seen) = seen_at.get_mut(agent.index()) else {
                    return Err(WorldError::Inconsistent {
                        agent,
                        detail: format!("listed in {} but outside the population", place.id),
                    });
                };
                if let Some(other) = *seen {
                    return Err(WorldError::Inconsistent {
                        agent,
                        detail: format!("listed in both {other} and {}", place.id),
                    });
                }
                *seen = Some(place.id);
            }
        }

        for (i, &location) in locations.iter().enumerate() {
            let agent = AgentId(i as u32);
            match (location, seen_at[i]) {
                (Location::AtPlace(expected), Some(actual)) if expected == actual => {}
                (Location::InTransit, None) => {}
                (Location::AtPlace(expected), Some(actual)) => {
                    return Err(WorldError::Inconsistent {
                        agent,
                        detail: format!("at {expected} but listed in {actual}"),
                    });
                }
                (Location::AtPlace(expected), None) => {
                    return Err(WorldError::Inconsistent {
                        agent,
                        detail: format!("at {expected} but listed nowhere"),
                    });
                }
                (Location::InTransit, Some(actual)) => {
                    return Err(WorldError::Inconsistent {
                        agent,
                        detail: format!("in transit but listed in {actual}"),
                    });
                }
            }
        }

        Ok(())
    }
}
