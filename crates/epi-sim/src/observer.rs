//! Observer hooks — the engine's publication channel to panels and writers.

use epi_agent::AgentStore;
use epi_core::Tick;

// ── TickStats ─────────────────────────────────────────────────────────────────

/// Aggregate counts published after every tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TickStats {
    pub tick: Tick,
    pub infected: usize,
    /// Always `population − infected`.
    pub healthy: usize,
}

// ── SimObserver ───────────────────────────────────────────────────────────────

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers see the world only between
/// ticks; no callback fires mid-pass.
///
/// # Example — console panel
///
/// ```rust,ignore
/// struct ConsolePanel { every: u64 }
///
/// impl SimObserver for ConsolePanel {
///     fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
///         if tick.0 % self.every == 0 {
///             println!("{tick}: {} infected / {} healthy", stats.infected, stats.healthy);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called just before a tick is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick with the updated aggregate counts.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called every `config.output_interval_ticks` ticks with read access to
    /// the full population, so writers can record per-agent state without
    /// the sim knowing about any output format.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
