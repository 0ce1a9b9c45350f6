//! The per-agent record: health, home/workplace, and commute state.

use epi_core::{Location, PlaceId, Tick};

// ── Health ────────────────────────────────────────────────────────────────────

/// Health state.  There is no immune state: a recovered agent returns to
/// `Susceptible` and can be reinfected.  The recovery tick only exists while
/// infected, so a stale value cannot leak into a susceptible agent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Health {
    Susceptible,
    Infected {
        /// Absolute tick at which the agent becomes susceptible again.
        recovers_at: Tick,
    },
}

impl Health {
    #[inline]
    pub fn is_infected(self) -> bool {
        matches!(self, Health::Infected { .. })
    }
}

// ── Commute state machine ─────────────────────────────────────────────────────

/// Which end of the home↔workplace pair a commute moves toward.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommuteLeg {
    ToWork,
    ToHome,
}

impl CommuteLeg {
    #[inline]
    pub fn flip(self) -> CommuteLeg {
        match self {
            CommuteLeg::ToWork => CommuteLeg::ToHome,
            CommuteLeg::ToHome => CommuteLeg::ToWork,
        }
    }
}

/// Commute phase.  `EnRoute` captures the leg the agent was heading toward
/// when the commute fired — distinct from `CommuteSchedule::next_leg`, which
/// has already been flipped to the *following* commute by then.  Arrival
/// detection must use `heading`, never `next_leg`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommutePhase {
    Idle,
    EnRoute { heading: CommuteLeg },
}

/// Commute bookkeeping for a non-homebound agent.
///
/// The alarm is an absolute tick advanced by `alarm += interval` each time a
/// commute fires (cumulative, so the agent's personal rhythm never drifts),
/// and compared with `now >= alarm` so a firing tick spent en-route delays
/// the commute to the next idle tick instead of dropping it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommuteSchedule {
    /// The agent's fixed workplace.
    pub workplace: PlaceId,

    /// Ticks between a home-bound commute and the next work-bound one.
    pub go_work_ticks: u64,

    /// Ticks between a work-bound commute and the next home-bound one.
    pub go_home_ticks: u64,

    /// Absolute tick at which the next commute fires.
    pub alarm: Tick,

    /// The leg the next firing will take.
    pub next_leg: CommuteLeg,

    pub phase: CommutePhase,
}

impl CommuteSchedule {
    /// Interval to add to the alarm once a commute toward `leg` has fired —
    /// i.e. the waiting time before the *opposite* leg becomes due.
    #[inline]
    pub fn interval_after(&self, leg: CommuteLeg) -> u64 {
        match leg {
            CommuteLeg::ToWork => self.go_home_ticks,
            CommuteLeg::ToHome => self.go_work_ticks,
        }
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One member of the population.
///
/// Identity is positional: an agent's `AgentId` is its index in the
/// `AgentStore`, fixed at creation.  Home and the commute schedule (if any)
/// never change; location and health mutate every tick.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Current location as reported by the mobility provider this tick.
    pub location: Location,

    /// The residential place the agent lives in.  Fixed at creation.
    pub home: PlaceId,

    /// Commute schedule; `None` for homebound agents, which have no
    /// workplace and never commute.
    pub schedule: Option<CommuteSchedule>,

    pub health: Health,

    /// The place this agent is currently listed in by the occupancy tracker
    /// (`None` while in transit).  Written only by `reconcile`.
    pub last_known_place: Option<PlaceId>,
}

impl Agent {
    /// A homebound agent standing in its home.
    pub fn homebound(home: PlaceId) -> Self {
        Self {
            location: Location::AtPlace(home),
            home,
            schedule: None,
            health: Health::Susceptible,
            last_known_place: None,
        }
    }

    /// A commuting agent standing in its home, first commute armed for
    /// `Tick(go_work_ticks)`.
    pub fn commuter(home: PlaceId, workplace: PlaceId, go_work_ticks: u64, go_home_ticks: u64) -> Self {
        Self {
            location: Location::AtPlace(home),
            home,
            schedule: Some(CommuteSchedule {
                workplace,
                go_work_ticks,
                go_home_ticks,
                alarm: Tick(go_work_ticks),
                next_leg: CommuteLeg::ToWork,
                phase: CommutePhase::Idle,
            }),
            health: Health::Susceptible,
            last_known_place: None,
        }
    }

    #[inline]
    pub fn is_homebound(&self) -> bool {
        self.schedule.is_none()
    }

    /// The destination place of a commute along `leg`.
    #[inline]
    pub fn commute_destination(&self, leg: CommuteLeg) -> Option<PlaceId> {
        match leg {
            CommuteLeg::ToHome => Some(self.home),
            CommuteLeg::ToWork => self.schedule.as_ref().map(|s| s.workplace),
        }
    }
}
