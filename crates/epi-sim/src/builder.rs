//! Fluent builder for constructing a [`Sim`].

use epi_agent::{AgentFactory, AgentRngs, AgentStore};
use epi_core::{AgentId, PlaceId, PlaceKind, SimConfig, SimRng, Tick};
use epi_mobility::MobilityProvider;
use epi_world::{PlaceRegistry, occupancy};

use crate::{Sim, SimError, SimResult, infection};

/// Fluent builder for [`Sim<M>`].
///
/// Setup is the only fallible stage of the engine: every error this builder
/// can produce is a configuration problem the host must fix, and the build
/// aborts before any partial world state exists.  Once `build` returns
/// `Ok`, per-tick operation is total.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, TransitMobility::new(AGENTS))
///     .places(load_places_csv(path)?)
///     .agent_count(AGENTS)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<M: MobilityProvider> {
    config: SimConfig,
    mobility: M,
    places: Vec<(PlaceId, PlaceKind)>,
    agent_count: usize,
}

impl<M: MobilityProvider> SimBuilder<M> {
    pub fn new(config: SimConfig, mobility: M) -> Self {
        Self {
            config,
            mobility,
            places: Vec::new(),
            agent_count: 0,
        }
    }

    /// Supply the place definitions produced by the world builder (or
    /// [`load_places_csv`][epi_world::load_places_csv]).
    pub fn places(mut self, places: Vec<(PlaceId, PlaceKind)>) -> Self {
        self.places = places;
        self
    }

    /// Number of agents the factory should produce.
    pub fn agent_count(mut self, count: usize) -> Self {
        self.agent_count = count;
        self
    }

    /// Validate the configuration, build the world, spawn and place the
    /// population, and seed the initial outbreak.
    pub fn build(self) -> SimResult<Sim<M>> {
        let config = self.config;

        // ── Scalar validation ─────────────────────────────────────────────
        if !(0.0..=1.0).contains(&config.initial_infected_fraction) {
            return Err(SimError::Config(format!(
                "initial_infected_fraction {} outside [0, 1]",
                config.initial_infected_fraction
            )));
        }
        if config.recovery_horizon_ticks == 0 {
            return Err(SimError::Config(
                "recovery_horizon_ticks must be at least 1".into(),
            ));
        }

        // ── World ─────────────────────────────────────────────────────────
        let mut registry = PlaceRegistry::new(self.places)?;

        // ── Population ────────────────────────────────────────────────────
        let mut world_rng = SimRng::new(config.seed);
        let factory = AgentFactory::from_config(&config);
        let agents = factory.spawn(
            self.agent_count,
            registry.residential(),
            registry.commercial(),
            &mut world_rng,
        )?;
        let mut store = AgentStore::new(agents);
        let mut rngs = AgentRngs::new(self.agent_count, config.seed);

        // ── Placement ─────────────────────────────────────────────────────
        let mut mobility = self.mobility;
        for i in 0..store.len() {
            let id = AgentId(i as u32);
            let agent = store.get_mut(id);
            // Resolve the home id before anything is placed at it; the
            // factory only hands out pool members, so a failure here means
            // the registry and pools disagree.
            registry.get(agent.home)?;
            mobility.place(id, agent.home, Tick::ZERO);
            occupancy::reconcile(&mut registry, id, agent.location, &mut agent.last_known_place);
        }

        // ── Initial outbreak ──────────────────────────────────────────────
        let mut infected = 0;
        infection::seed(
            &mut store,
            &mut rngs,
            &mut world_rng,
            config.initial_infected_fraction,
            config.recovery_horizon_ticks,
            &mut infected,
        );

        Ok(Sim::assemble(config, store, rngs, registry, mobility, infected))
    }
}
