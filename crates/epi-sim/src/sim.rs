//! The `Sim` struct and its tick loop.

use epi_agent::{AgentRngs, AgentStore, Health};
use epi_core::{AgentId, SimConfig, Tick, Tunables};
use epi_mobility::MobilityProvider;
use epi_world::{PlaceRegistry, WorldResult, occupancy};

use crate::{SimObserver, TickStats, commute, infection};

/// The simulation world: places, population, clock, and tunables.
///
/// `Sim<M>` is generic over the mobility provider so hosts can swap the
/// built-in tick-based provider for one with real geometry at compile time,
/// with no runtime overhead.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: MobilityProvider> {
    /// Immutable run configuration (seed, behavioral constants, …).
    pub config: SimConfig,

    /// Operator-mutable values; see [`Sim::sync_panel`].
    pub tunables: Tunables,

    /// The current tick.  Starts at 0; the first `advance` call processes
    /// tick 1.
    pub current_tick: Tick,

    /// The population, indexed by `AgentId`.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// All places and their occupancy sets.
    pub registry: PlaceRegistry,

    /// The mobility provider.
    pub mobility: M,

    /// Running count of infected agents, maintained by the infection model.
    infected: usize,
}

impl<M: MobilityProvider> Sim<M> {
    pub(crate) fn assemble(
        config: SimConfig,
        agents: AgentStore,
        rngs: AgentRngs,
        registry: PlaceRegistry,
        mobility: M,
        infected: usize,
    ) -> Self {
        Self {
            tunables: config.tunables(),
            config,
            current_tick: Tick::ZERO,
            agents,
            rngs,
            registry,
            mobility,
            infected,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance simulated time by one tick and return the updated counts.
    ///
    /// Processes every agent exactly once, in ascending `AgentId` order,
    /// each agent fully before the next.
    pub fn advance(&mut self) -> TickStats {
        self.current_tick = self.current_tick + 1;
        let now = self.current_tick;

        for i in 0..self.agents.len() {
            self.process_agent(AgentId(i as u32), now);
        }

        self.stats()
    }

    /// Run until `config.end_tick()`, invoking observer hooks at every tick
    /// boundary and `on_sim_end` once at the end.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// The current aggregate counts.
    pub fn stats(&self) -> TickStats {
        TickStats {
            tick: self.current_tick,
            infected: self.infected,
            healthy: self.agents.len() - self.infected,
        }
    }

    #[inline]
    pub fn infected_count(&self) -> usize {
        self.infected
    }

    /// Force `agent` into the infected state, recovering at `recovers_at`.
    ///
    /// No-op if the agent is already infected.  For hosts seeding targeted
    /// outbreaks beyond the builder's uniform initial fraction.
    pub fn infect_agent(&mut self, agent: AgentId, recovers_at: Tick) {
        let record = self.agents.get_mut(agent);
        if !record.health.is_infected() {
            record.health = Health::Infected { recovers_at };
            self.infected += 1;
        }
    }

    /// Apply operator-changed values from the external control panel.
    ///
    /// Diffs `desired` against the current tunables and applies only the
    /// differences.  A speed change is re-issued to every agent so in-flight
    /// commutes rescale immediately.  Call each tick or on demand.
    pub fn sync_panel(&mut self, desired: &Tunables) {
        if self.tunables.transmission_probability != desired.transmission_probability {
            self.tunables.transmission_probability = desired.transmission_probability;
        }
        if self.tunables.tick_interval_ms != desired.tick_interval_ms {
            self.tunables.tick_interval_ms = desired.tick_interval_ms;
        }
        if self.tunables.speed_multiplier != desired.speed_multiplier {
            self.tunables.speed_multiplier = desired.speed_multiplier;
            let now = self.current_tick;
            for i in 0..self.agents.len() {
                self.mobility.set_speed(AgentId(i as u32), desired.speed_multiplier, now);
            }
        }
    }

    /// Verify the occupancy invariant for the whole population.
    ///
    /// Programmer-error detector for tests and debug sweeps; steady-state
    /// operation never needs it.
    pub fn check_consistency(&self) -> WorldResult<()> {
        self.registry.check_consistency(&self.agents.locations())
    }

    // ── Per-agent pipeline ────────────────────────────────────────────────

    fn process_agent(&mut self, id: AgentId, now: Tick) {
        // ① One location report per tick.  Everything below — arrival
        //    settling, occupancy, infection — works from this snapshot, so
        //    an agent that schedules a trip this tick still counts as
        //    present until the next tick's report.
        let location = self.mobility.location(id);
        {
            let agent = self.agents.get_mut(id);
            agent.location = location;
            commute::settle_arrival(agent);
        }

        // ② Commute scheduler / wandering.
        let action = commute::decide(
            self.agents.get(id),
            now,
            self.config.wander_probability,
            self.rngs.get_mut(id),
        );
        if let Some(action) = action {
            commute::apply(
                self.agents.get_mut(id),
                id,
                action,
                now,
                &self.tunables,
                self.rngs.get_mut(id),
                &mut self.mobility,
            );
        }

        // ③ Occupancy reconciliation.
        {
            let agent = self.agents.get_mut(id);
            occupancy::reconcile(&mut self.registry, id, agent.location, &mut agent.last_known_place);
        }

        // ④ Infection check.
        let event = infection::decide(
            &self.agents,
            &self.registry,
            id,
            now,
            self.tunables.transmission_probability,
            self.config.recovery_horizon_ticks,
            self.rngs.get_mut(id),
        );
        if let Some(event) = event {
            infection::apply(self.agents.get_mut(id), event, now, &mut self.infected);
        }

        // ⑤ Physical motion.
        self.mobility.advance(id, now);
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_tick_start(self.current_tick + 1);
        let stats = self.advance();
        observer.on_tick_end(self.current_tick, &stats);
        if self.config.output_interval_ticks > 0
            && self.current_tick.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(self.current_tick, &self.agents);
        }
    }
}
