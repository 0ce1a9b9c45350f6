//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_stats.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, TickStatsRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    stats: Writer<File>,
    snapshots: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut stats = Writer::from_path(dir.join("tick_stats.csv"))?;
        stats.write_record(["tick", "infected", "healthy"])?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["agent_id", "tick", "place_id", "in_transit", "infected"])?;

        Ok(Self {
            stats,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_stats(&mut self, row: &TickStatsRow) -> OutputResult<()> {
        self.stats.write_record(&[
            row.tick.to_string(),
            row.infected.to_string(),
            row.healthy.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.place_id.to_string(),
                (row.in_transit as u8).to_string(),
                (row.infected as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.stats.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
