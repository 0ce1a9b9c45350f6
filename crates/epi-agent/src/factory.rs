//! The agent factory — randomized population construction.

use epi_core::{PlaceId, PlaceKind, SimConfig, SimRng};

use crate::{Agent, AgentError, AgentResult};

/// Produces agent records from the world's residential/commercial pools.
///
/// # Randomization rules
///
/// - Each agent is homebound with `homebound_probability` (default 25%).
/// - Home is drawn uniformly from the residential pool; a commuter's
///   workplace uniformly from the commercial pool.
/// - Commute intervals are jittered around the base values with mirrored,
///   opposite-sign offsets: one `sign ∈ {+1, −1}` per agent, then
///
///   ```text
///   go_work = go_work_base + (−sign · U[0, jitter))
///   go_home = go_home_base − ( sign · U[0, jitter))
///   ```
///
///   so an agent that leaves for work early also heads home early.
/// - The first commute alarm is armed at `Tick(go_work)`.
pub struct AgentFactory {
    pub homebound_probability: f64,
    pub go_work_base_ticks: u64,
    pub go_home_base_ticks: u64,
    pub commute_jitter_ticks: u64,
}

impl AgentFactory {
    /// A factory using the randomization parameters in `config`.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            homebound_probability: config.homebound_probability,
            go_work_base_ticks: config.go_work_base_ticks,
            go_home_base_ticks: config.go_home_base_ticks,
            commute_jitter_ticks: config.commute_jitter_ticks,
        }
    }

    /// Produce `count` agents.
    ///
    /// # Errors
    ///
    /// Fails fast — before any agent is built — on configurations that could
    /// otherwise select an undefined place or a non-positive interval:
    ///
    /// - `EmptyPool(Residential)` if there are no homes;
    /// - `EmptyPool(Commercial)` if commuters are possible but there are no
    ///   workplaces;
    /// - `JitterExceedsBase` if the jitter could drive an interval to zero.
    pub fn spawn(
        &self,
        count: usize,
        residential: &[PlaceId],
        commercial: &[PlaceId],
        rng: &mut SimRng,
    ) -> AgentResult<Vec<Agent>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if residential.is_empty() {
            return Err(AgentError::EmptyPool(PlaceKind::Residential));
        }
        let commuters_possible = self.homebound_probability < 1.0;
        if commuters_possible && commercial.is_empty() {
            return Err(AgentError::EmptyPool(PlaceKind::Commercial));
        }
        let min_base = self.go_work_base_ticks.min(self.go_home_base_ticks);
        if self.commute_jitter_ticks >= min_base {
            return Err(AgentError::JitterExceedsBase {
                jitter: self.commute_jitter_ticks,
                base: min_base,
            });
        }

        let mut agents = Vec::with_capacity(count);
        for _ in 0..count {
            agents.push(self.spawn_one(residential, commercial, rng));
        }
        Ok(agents)
    }

    fn spawn_one(&self, residential: &[PlaceId], commercial: &[PlaceId], rng: &mut SimRng) -> Agent {
        let home = residential[rng.gen_range(0..residential.len())];

        if rng.gen_bool(self.homebound_probability) {
            return Agent::homebound(home);
        }

        let workplace = commercial[rng.gen_range(0..commercial.len())];

        let sign: i64 = if rng.gen_bool(0.5) { 1 } else { -1 };
        let home_jitter = sign * self.jitter(rng);
        let work_jitter = -sign * self.jitter(rng);

        let go_work = (self.go_work_base_ticks as i64 + work_jitter) as u64;
        let go_home = (self.go_home_base_ticks as i64 - home_jitter) as u64;

        Agent::commuter(home, workplace, go_work, go_home)
    }

    fn jitter(&self, rng: &mut SimRng) -> i64 {
        if self.commute_jitter_ticks == 0 {
            0
        } else {
            rng.gen_range(0..self.commute_jitter_ticks) as i64
        }
    }
}
