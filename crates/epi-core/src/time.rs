//! Simulation time model and run configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter, starting at 0.  There
//! is no wall-clock mapping inside the engine: the host drives ticks from an
//! external repeating timer whose interval may change at runtime, so every
//! schedule in the engine (commute alarms, recovery ticks) is tick-indexed
//! and survives interval changes without rescaling.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at one tick per millisecond a u64
/// lasts ~585 million years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Tunables ──────────────────────────────────────────────────────────────────

/// The operator-mutable parameters, adjustable between ticks from an external
/// control panel.
///
/// `Sim::sync_panel` diffs a desired `Tunables` against the current one and
/// applies the changes, so a host can poll its input widgets every tick
/// without disturbing unchanged values.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tunables {
    /// Per contact-check probability that a susceptible agent is infected.
    pub transmission_probability: f64,

    /// Travel speed applied to commute trips; re-issued to every agent when
    /// changed so in-flight commutes speed up or slow down.
    pub speed_multiplier: f64,

    /// Milliseconds between host timer firings.  The engine stores the value
    /// for the host to read back; schedule arithmetic never depends on it.
    pub tick_interval_ms: u32,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration, fixed for the lifetime of a run
/// (except for the values mirrored into [`Tunables`]).
///
/// The defaults give a workable small-town scenario: commutes roughly every
/// 600/1000 ticks with ±200 jitter, a quarter of agents homebound, recovery
/// inside 2000 ticks, and a tenth of the population infected at setup.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Total ticks a host loop should run (advisory; `Sim::advance` can be
    /// called past it).
    pub total_ticks: u64,

    /// Emit a full agent snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Initial per-contact transmission probability.
    pub transmission_probability: f64,

    /// Initial commute travel speed.
    pub speed_multiplier: f64,

    /// Initial host timer interval in milliseconds.
    pub tick_interval_ms: u32,

    /// Per-tick probability that an idle agent wanders to a random point of
    /// its current place.
    pub wander_probability: f64,

    /// Recovery ticks are drawn uniformly from `[0, recovery_horizon_ticks)`.
    pub recovery_horizon_ticks: u64,

    /// Probability that a factory-produced agent is homebound (no workplace,
    /// no commute schedule).
    pub homebound_probability: f64,

    /// Base ticks between a home→work commute and the next work-bound one.
    pub go_work_base_ticks: u64,

    /// Base ticks between a work→home commute and the next home-bound one.
    pub go_home_base_ticks: u64,

    /// Commute intervals are jittered per agent by up to this many ticks.
    pub commute_jitter_ticks: u64,

    /// Fraction of the population infected at setup, in `[0, 1]`.
    pub initial_infected_fraction: f64,
}

impl SimConfig {
    /// The tick at which a host loop should stop (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// The initial operator tunables for this run.
    pub fn tunables(&self) -> Tunables {
        Tunables {
            transmission_probability: self.transmission_probability,
            speed_multiplier: self.speed_multiplier,
            tick_interval_ms: self.tick_interval_ms,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            total_ticks: 10_000,
            output_interval_ticks: 0,
            transmission_probability: 0.00001,
            speed_multiplier: 3.0,
            tick_interval_ms: 5,
            wander_probability: 0.001,
            recovery_horizon_ticks: 2_000,
            homebound_probability: 0.25,
            go_work_base_ticks: 600,
            go_home_base_ticks: 1_000,
            commute_jitter_ticks: 200,
            initial_infected_fraction: 0.1,
        }
    }
}
