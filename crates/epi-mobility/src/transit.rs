//! `TransitMobility` — the built-in, geometry-free mobility provider.

use epi_core::{AgentId, Location, PlaceId, Tick};

use crate::{MobilityError, MobilityResult, MobilityProvider, TripKind, TripRequest};

/// Default ticks a commute takes at unit speed.
pub const DEFAULT_BASE_TRIP_TICKS: u64 = 40;

// ── MovementState ─────────────────────────────────────────────────────────────

/// Movement bookkeeping for one agent.
///
/// `at == PlaceId::INVALID` means the agent has never been placed; it is in
/// no place and cannot travel.
#[derive(Copy, Clone, PartialEq, Debug)]
struct MovementState {
    in_transit: bool,

    /// The place the agent is in (or departed from while in transit).
    at: PlaceId,

    /// Where the agent is heading.  Equals `at` when stationary.
    destination: PlaceId,

    departure_tick: Tick,

    /// Tick at which the agent reaches `destination`.
    arrival_tick: Tick,

    /// Most recently issued travel speed; in-flight trips rescale on change.
    speed: f64,
}

impl MovementState {
    fn unplaced() -> Self {
        Self::stationary(PlaceId::INVALID, Tick::ZERO)
    }

    fn stationary(place: PlaceId, tick: Tick) -> Self {
        Self {
            in_transit: false,
            at: place,
            destination: place,
            departure_tick: tick,
            arrival_tick: tick,
            speed: 1.0,
        }
    }
}

// ── TransitMobility ───────────────────────────────────────────────────────────

/// A provider that models travel purely as elapsed ticks.
///
/// Every commute covers the same abstract distance: `base_trip_ticks` at
/// unit speed, scaled down by the trip's speed and clamped to at least one
/// tick.  The agent is `InTransit` from the tick the trip is scheduled until
/// its arrival tick has been advanced past — an agent walking between
/// buildings occupies neither of them.
///
/// Wander trips move the agent to another point of the same place, so its
/// reported location never changes; with no geometry to interpolate there is
/// nothing else to track.
pub struct TransitMobility {
    states: Vec<MovementState>,
    base_trip_ticks: u64,
}

impl TransitMobility {
    /// A provider for `agent_count` agents, all initially unplaced.
    pub fn new(agent_count: usize) -> Self {
        Self::with_base_trip_ticks(agent_count, DEFAULT_BASE_TRIP_TICKS)
    }

    /// Override the abstract commute length (ticks at unit speed).
    pub fn with_base_trip_ticks(agent_count: usize, base_trip_ticks: u64) -> Self {
        Self {
            states: vec![MovementState::unplaced(); agent_count],
            base_trip_ticks,
        }
    }

    fn travel_ticks(&self, speed: f64) -> u64 {
        let ticks = (self.base_trip_ticks as f64 / speed.max(1e-6)).round() as u64;
        ticks.max(1)
    }
}

impl MobilityProvider for TransitMobility {
    fn place(&mut self, agent: AgentId, place: PlaceId, now: Tick) {
        self.states[agent.index()] = MovementState::stationary(place, now);
    }

    fn schedule_trip(&mut self, agent: AgentId, trip: TripRequest, now: Tick) -> MobilityResult<()> {
        let travel = self.travel_ticks(trip.speed);
        let state = &mut self.states[agent.index()];
        if state.at == PlaceId::INVALID {
            return Err(MobilityError::NotPlaced(agent));
        }
        if state.in_transit && !trip.replace_current {
            return Ok(());
        }

        match trip.kind {
            // In-place movement: the agent never leaves the place, and with
            // no geometry there is no interpolation state to keep.
            TripKind::Wander => {}
            TripKind::Commute(_) => {
                *state = MovementState {
                    in_transit: true,
                    at: state.at,
                    destination: trip.destination,
                    departure_tick: now,
                    arrival_tick: now + travel,
                    speed: trip.speed,
                };
            }
        }
        Ok(())
    }

    fn location(&self, agent: AgentId) -> Location {
        let state = &self.states[agent.index()];
        if state.at == PlaceId::INVALID || state.in_transit {
            Location::InTransit
        } else {
            Location::AtPlace(state.at)
        }
    }

    fn set_speed(&mut self, agent: AgentId, speed: f64, now: Tick) {
        let state = &mut self.states[agent.index()];
        if state.in_transit && state.speed != speed {
            let remaining = state.arrival_tick.0.saturating_sub(now.0);
            let rescaled =
                ((remaining as f64 * state.speed / speed.max(1e-6)).round() as u64).max(1);
            state.arrival_tick = now + rescaled;
        }
        state.speed = speed;
    }

    fn advance(&mut self, agent: AgentId, now: Tick) {
        let state = &mut self.states[agent.index()];
        if state.in_transit && now >= state.arrival_tick {
            *state = MovementState::stationary(state.destination, now);
        }
    }
}
