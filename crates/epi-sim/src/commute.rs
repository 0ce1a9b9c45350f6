//! The commute state machine and local wandering.
//!
//! Behavior is split into a read-only decision step and a mutating apply
//! step, so each runs against exactly the borrows it needs and the state
//! transition is auditable in one place.
//!
//! # Firing rule
//!
//! The alarm is an absolute tick.  A commute fires when the agent is idle
//! and `now >= alarm` (never at tick 0).  On firing, the alarm advances by
//! the interval of the *following* leg (`alarm += interval`, not
//! `now + interval`), so an agent delayed en-route keeps its original
//! rhythm instead of drifting.
//!
//! # Arrival rule
//!
//! `EnRoute { heading }` records the leg captured when the commute fired.
//! Arrival is detected against `heading`'s destination — `next_leg` has
//! already been flipped to the following commute and must not be consulted.

use epi_agent::{Agent, CommuteLeg, CommutePhase};
use epi_core::{AgentId, AgentRng, Location, PlaceId, Tick, Tunables};
use epi_mobility::{MobilityProvider, TripKind, TripRequest, UnitPoint};

/// Wandering is a stroll, not a commute: always unit speed.
const WANDER_SPEED: f64 = 1.0;

// ── Decision ──────────────────────────────────────────────────────────────────

/// What the scheduler wants an agent to do this tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum CommuteAction {
    /// Fire the due commute toward `destination`.
    Commute { leg: CommuteLeg, destination: PlaceId },
    /// Stroll to another point of the place the agent is in.
    Wander { place: PlaceId },
}

/// Settle a completed commute: if the agent is en route and its reported
/// location is the destination implied by the captured heading, it is idle
/// again.  Runs every tick, before the fire check.
pub(crate) fn settle_arrival(agent: &mut Agent) {
    let home = agent.home;
    let location = agent.location;
    let Some(schedule) = agent.schedule.as_mut() else {
        return;
    };
    let CommutePhase::EnRoute { heading } = schedule.phase else {
        return;
    };
    let destination = match heading {
        CommuteLeg::ToWork => schedule.workplace,
        CommuteLeg::ToHome => home,
    };
    if location == Location::AtPlace(destination) {
        schedule.phase = CommutePhase::Idle;
    }
}

/// Decide this tick's action for one agent.
///
/// The wander draw happens whenever no commute fires and the agent is not
/// en route — homebound agents included, since they are never en route.
pub(crate) fn decide(
    agent: &Agent,
    now: Tick,
    wander_probability: f64,
    rng: &mut AgentRng,
) -> Option<CommuteAction> {
    if let Some(schedule) = &agent.schedule {
        if schedule.phase == CommutePhase::Idle && now != Tick::ZERO && now >= schedule.alarm {
            let leg = schedule.next_leg;
            let destination = match leg {
                CommuteLeg::ToWork => schedule.workplace,
                CommuteLeg::ToHome => agent.home,
            };
            return Some(CommuteAction::Commute { leg, destination });
        }
    }

    let en_route = agent
        .schedule
        .as_ref()
        .is_some_and(|s| matches!(s.phase, CommutePhase::EnRoute { .. }));
    if !en_route && rng.gen_bool(wander_probability) {
        if let Location::AtPlace(place) = agent.location {
            return Some(CommuteAction::Wander { place });
        }
    }

    None
}

// ── Apply ─────────────────────────────────────────────────────────────────────

/// Carry out a decided action: issue the trip and, for a commute, update the
/// agent's phase, direction, and alarm.  Wandering touches no commute
/// bookkeeping at all.
pub(crate) fn apply<M: MobilityProvider>(
    agent: &mut Agent,
    id: AgentId,
    action: CommuteAction,
    now: Tick,
    tunables: &Tunables,
    rng: &mut AgentRng,
    mobility: &mut M,
) {
    match action {
        CommuteAction::Commute { leg, destination } => {
            let trip = TripRequest {
                point: random_unit_point(rng),
                destination,
                kind: TripKind::Commute(leg),
                speed: tunables.speed_multiplier,
                replace_current: true,
            };
            if mobility.schedule_trip(id, trip, now).is_err() {
                // Provider refused (agent unplaced).  Leave all bookkeeping
                // untouched; the alarm stays due and the commute retries.
                return;
            }
            let Some(schedule) = agent.schedule.as_mut() else {
                return;
            };
            schedule.phase = CommutePhase::EnRoute { heading: leg };
            schedule.next_leg = leg.flip();
            schedule.alarm = schedule.alarm + schedule.interval_after(leg);
        }
        CommuteAction::Wander { place } => {
            let trip = TripRequest {
                point: random_unit_point(rng),
                destination: place,
                kind: TripKind::Wander,
                speed: WANDER_SPEED,
                replace_current: false,
            };
            // Cannot fail: a wandering agent is standing in a place.
            let _ = mobility.schedule_trip(id, trip, now);
        }
    }
}

fn random_unit_point(rng: &mut AgentRng) -> UnitPoint {
    UnitPoint { u: rng.random(), v: rng.random() }
}
