//! Population storage: `AgentStore` (records) and `AgentRngs` (per-agent RNG).

use epi_core::{AgentId, AgentRng, Location};

use crate::Agent;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to allow
/// `&mut AgentRngs` + `&AgentStore` borrows during the infection scan.
pub struct AgentRngs {
    inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// All agent records, indexed by `AgentId`.
///
/// Ascending index order is the tick driver's canonical iteration order:
/// a total order over all agents, each visited exactly once per tick.
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    pub fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> &Agent {
        &self.agents[agent.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut Agent {
        &mut self.agents[agent.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    /// Snapshot of every agent's current location, indexed by `AgentId`.
    /// The shape `PlaceRegistry::check_consistency` consumes.
    pub fn locations(&self) -> Vec<Location> {
        self.agents.iter().map(|a| a.location).collect()
    }

    /// Recount of infected agents.  O(n); the tick driver keeps a running
    /// counter and uses this only to cross-check it in tests.
    pub fn count_infected(&self) -> usize {
        self.agents.iter().filter(|a| a.health.is_infected()).count()
    }
}
