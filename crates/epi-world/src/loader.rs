//! CSV place loader.
//!
//! # CSV format
//!
//! One row per place:
//!
//! ```csv
//! place_id,kind
//! 0,residential
//! 1,residential
//! 17,commercial
//! ```
//!
//! **`kind`** is `residential` or `commercial` (case-sensitive, trimmed).
//!
//! The loader returns raw `(PlaceId, PlaceKind)` definitions; duplicate ids
//! are caught by [`PlaceRegistry::new`][crate::PlaceRegistry::new] so that
//! programmatically built worlds get the same validation as loaded ones.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use epi_core::{PlaceId, PlaceKind};

use crate::{WorldError, WorldResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PlaceRecord {
    place_id: u32,
    kind: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load place definitions from a CSV file.
pub fn load_places_csv(path: &Path) -> WorldResult<Vec<(PlaceId, PlaceKind)>> {
    let file = std::fs::File::open(path).map_err(WorldError::Io)?;
    load_places_reader(file)
}

/// Like [`load_places_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded world data.
pub fn load_places_reader<R: Read>(reader: R) -> WorldResult<Vec<(PlaceId, PlaceKind)>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut definitions = Vec::new();

    for result in csv_reader.deserialize::<PlaceRecord>() {
        let row = result.map_err(|e| WorldError::Parse(e.to_string()))?;
        definitions.push((PlaceId(row.place_id), parse_kind(&row.kind)?));
    }

    Ok(definitions)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_kind(s: &str) -> WorldResult<PlaceKind> {
    match s.trim() {
        "residential" => Ok(PlaceKind::Residential),
        "commercial" => Ok(PlaceKind::Commercial),
        other => Err(WorldError::Parse(format!(
            "invalid place kind {other:?}: expected \"residential\" or \"commercial\""
        ))),
    }
}
