//! Transmission, recovery, and outbreak seeding.
//!
//! Decisions are computed against read-only state (the whole population plus
//! the occupancy sets), then applied to the one agent under consideration.
//! At most one health event happens per agent per tick, which makes the
//! aggregate outcome independent of contact scan order.

use epi_agent::{Agent, AgentRngs, AgentStore, Health};
use epi_core::{AgentId, AgentRng, Location, SimRng, Tick};
use epi_world::PlaceRegistry;

// ── Events ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum HealthEvent {
    Infected { recovers_at: Tick },
    Recovered,
}

// ── Decision ──────────────────────────────────────────────────────────────────

/// Check one agent for transmission or recovery.
///
/// Susceptible and at a place: scan the place's occupants in insertion
/// order; each *other* infected occupant gets one Bernoulli trial at
/// `transmission_probability`, and the first success infects the agent and
/// stops the scan.  Infected: recovers exactly when `now == recovers_at`.
pub(crate) fn decide(
    store: &AgentStore,
    registry: &PlaceRegistry,
    agent_id: AgentId,
    now: Tick,
    transmission_probability: f64,
    recovery_horizon_ticks: u64,
    rng: &mut AgentRng,
) -> Option<HealthEvent> {
    let agent = store.get(agent_id);
    match agent.health {
        Health::Susceptible => {
            let Location::AtPlace(place) = agent.location else {
                return None;
            };
            for &other in registry.occupants(place) {
                if other == agent_id {
                    continue;
                }
                if store.get(other).health.is_infected()
                    && rng.gen_bool(transmission_probability)
                {
                    let recovers_at = draw_recovery(now, recovery_horizon_ticks, rng);
                    return Some(HealthEvent::Infected { recovers_at });
                }
            }
            None
        }
        Health::Infected { recovers_at } if recovers_at == now => Some(HealthEvent::Recovered),
        Health::Infected { .. } => None,
    }
}

/// Recovery tick: `now + U[0, horizon)`.
fn draw_recovery(now: Tick, horizon_ticks: u64, rng: &mut AgentRng) -> Tick {
    now + rng.gen_range(0..horizon_ticks)
}

// ── Apply ─────────────────────────────────────────────────────────────────────

/// Apply a health event to `agent`, keeping the world's infected counter in
/// step.
///
/// A recovery draw of zero recovers within the same tick it infects; the
/// transition is reverted here before any observer can see it, and the
/// counter round-trips instead of going negative.
pub(crate) fn apply(agent: &mut Agent, event: HealthEvent, now: Tick, infected_count: &mut usize) {
    match event {
        HealthEvent::Infected { recovers_at } => {
            agent.health = Health::Infected { recovers_at };
            *infected_count += 1;
            if recovers_at == now {
                agent.health = Health::Susceptible;
                *infected_count -= 1;
            }
        }
        HealthEvent::Recovered => {
            agent.health = Health::Susceptible;
            *infected_count -= 1;
        }
    }
}

// ── Outbreak seeding ──────────────────────────────────────────────────────────

/// Infect `ceil(population * fraction)` distinct, uniformly drawn agents at
/// setup time (tick 0).
///
/// Selection uses the world RNG; each infectee's recovery tick comes from
/// its own RNG, the same stream a contact infection would have used.
pub(crate) fn seed(
    store: &mut AgentStore,
    rngs: &mut AgentRngs,
    world_rng: &mut SimRng,
    fraction: f64,
    recovery_horizon_ticks: u64,
    infected_count: &mut usize,
) {
    let total = store.len();
    let target = ((total as f64) * fraction).ceil() as usize;
    if target == 0 {
        return;
    }

    let chosen = rand::seq::index::sample(world_rng.inner(), total, target);
    for index in chosen.iter() {
        let id = AgentId(index as u32);
        let recovers_at = draw_recovery(Tick::ZERO, recovery_horizon_ticks, rngs.get_mut(id));
        apply(
            store.get_mut(id),
            HealthEvent::Infected { recovers_at },
            Tick::ZERO,
            infected_count,
        );
    }
}
