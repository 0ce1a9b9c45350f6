//! The `OutputWriter` trait implemented by every backend.

use crate::{AgentSnapshotRow, OutputResult, TickStatsRow};

/// A sink for simulation output.
///
/// Implementations buffer as they see fit; `finish` flushes everything and
/// must be idempotent (the observer calls it from `on_sim_end`, and hosts
/// may call it again defensively).
pub trait OutputWriter {
    fn write_tick_stats(&mut self, row: &TickStatsRow) -> OutputResult<()>;

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    fn finish(&mut self) -> OutputResult<()>;
}
