//! Tests for the CSV backend and the observer bridge.

use std::fs;

use epi_core::{PlaceId, PlaceKind, SimConfig};
use epi_mobility::TransitMobility;
use epi_sim::SimBuilder;

use crate::{AgentSnapshotRow, CsvWriter, OutputWriter, SimOutputObserver, TickStatsRow};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config() -> SimConfig {
    SimConfig {
        seed: 42,
        total_ticks: 5,
        output_interval_ticks: 2,
        transmission_probability: 0.0,
        wander_probability: 0.0,
        homebound_probability: 1.0,
        initial_infected_fraction: 0.0,
        ..SimConfig::default()
    }
}

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn writes_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();

        writer
            .write_tick_stats(&TickStatsRow { tick: 1, infected: 2, healthy: 8 })
            .unwrap();
        writer
            .write_snapshots(&[AgentSnapshotRow {
                agent_id: 0,
                tick: 1,
                place_id: 3,
                in_transit: false,
                infected: true,
            }])
            .unwrap();
        writer.finish().unwrap();

        let stats = fs::read_to_string(dir.path().join("tick_stats.csv")).unwrap();
        assert_eq!(stats, "tick,infected,healthy\n1,2,8\n");

        let snapshots = fs::read_to_string(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(
            snapshots,
            "agent_id,tick,place_id,in_transit,infected\n0,1,3,0,1\n"
        );
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn full_run_produces_expected_row_counts() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut observer = SimOutputObserver::new(writer);

        let places = vec![
            (PlaceId(0), PlaceKind::Residential),
            (PlaceId(1), PlaceKind::Residential),
        ];
        let mut sim = SimBuilder::new(test_config(), TransitMobility::new(3))
            .places(places)
            .agent_count(3)
            .build()
            .unwrap();

        sim.run(&mut observer);
        assert!(observer.take_error().is_none());

        // One stats row per tick.
        let stats = fs::read_to_string(dir.path().join("tick_stats.csv")).unwrap();
        assert_eq!(stats.lines().count(), 1 + 5);
        assert!(stats.lines().nth(1).unwrap().starts_with("1,0,3"));

        // Snapshots at ticks 2 and 4: 3 agents each.
        let snapshots = fs::read_to_string(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(snapshots.lines().count(), 1 + 2 * 3);
        // All agents are homebound and stationary at their home place.
        for line in snapshots.lines().skip(1) {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields[3], "0", "no agent should be in transit: {line}");
            assert_eq!(fields[4], "0", "no agent should be infected: {line}");
        }
    }
}
