//! A single place and its occupancy set.

use epi_core::{AgentId, PlaceId, PlaceKind};

/// A fixed location agents can occupy: a home (residential) or a workplace
/// (commercial).
///
/// The occupancy set is an insertion-ordered `Vec`; contact scans iterate it
/// in that order.  Mutation goes through `PlaceRegistry` so the registry's
/// agent→slot index stays in step — do not construct `Place` directly.
#[derive(Clone, Debug)]
pub struct Place {
    pub id: PlaceId,
    pub kind: PlaceKind,
    pub(crate) occupants: Vec<AgentId>,
}

impl Place {
    pub(crate) fn new(id: PlaceId, kind: PlaceKind) -> Self {
        Self { id, kind, occupants: Vec::new() }
    }

    /// Agents currently inside this place, in insertion order.
    #[inline]
    pub fn occupants(&self) -> &[AgentId] {
        &self.occupants
    }

    #[inline]
    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    /// Linear membership check; intended for tests and assertions.
    pub fn is_occupied_by(&self, agent: AgentId) -> bool {
        self.occupants.contains(&agent)
    }
}
