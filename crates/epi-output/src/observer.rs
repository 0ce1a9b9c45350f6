//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use epi_agent::AgentStore;
use epi_core::{PlaceId, Tick};
use epi_sim::{SimObserver, TickStats};

use crate::row::{AgentSnapshotRow, TickStatsRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes tick stats and agent snapshots to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        let row = TickStatsRow {
            tick: tick.0,
            infected: stats.infected as u64,
            healthy: stats.healthy as u64,
        };
        let result = self.writer.write_tick_stats(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> = agents
            .agent_ids()
            .map(|id| {
                let agent = agents.get(id);
                AgentSnapshotRow {
                    agent_id: id.0,
                    tick: tick.0,
                    place_id: agent.location.place().unwrap_or(PlaceId::INVALID).0,
                    in_transit: agent.location.is_in_transit(),
                    infected: agent.health.is_infected(),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
