//! `epi-output` — pluggable sinks for per-tick stats and agent snapshots.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`row`]      | `TickStatsRow`, `AgentSnapshotRow`                    |
//! | [`writer`]   | `OutputWriter` trait                                  |
//! | [`csv`]      | `CsvWriter` — two-file CSV backend                    |
//! | [`observer`] | `SimOutputObserver<W>` — bridges `SimObserver` to a writer |
//!
//! # Usage
//!
//! ```rust,ignore
//! let writer = CsvWriter::new(Path::new("output/run1"))?;
//! let mut observer = SimOutputObserver::new(writer);
//! sim.run(&mut observer);
//! if let Some(e) = observer.take_error() {
//!     eprintln!("output incomplete: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickStatsRow};
pub use writer::OutputWriter;
