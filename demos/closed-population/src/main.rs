//! closed-population — smallest host loop for the epi simulation core.
//!
//! 300 agents across 100 homes and 20 workplaces: a tenth of the population
//! starts infected, commuters cycle between home and work, and the infection
//! spreads through co-location.
//! Halfway through the run the "operator" doubles the commute speed and
//! cranks the transmission probability, exercising the panel-sync path.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use epi_core::{SimConfig, Tick, Tunables};
use epi_mobility::TransitMobility;
use epi_output::{CsvWriter, SimOutputObserver};
use epi_sim::{SimObserver, SimBuilder, TickStats};
use epi_world::load_places_reader;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: usize = 300;
const HOME_COUNT: u32 = 100;
const WORKPLACE_COUNT: u32 = 20;
const SEED: u64 = 42;
const TOTAL_TICKS: u64 = 20_000;
const PRINT_EVERY: u64 = 2_000;

// ── Observers ─────────────────────────────────────────────────────────────────

/// Console panel: prints the running counts and tracks the epidemic peak.
struct ConsolePanel {
    peak_infected: usize,
    peak_tick: Tick,
}

impl SimObserver for ConsolePanel {
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        if stats.infected > self.peak_infected {
            self.peak_infected = stats.infected;
            self.peak_tick = tick;
        }
        if tick.0 % PRINT_EVERY == 0 {
            println!("{tick}: {:>3} infected / {:>3} healthy", stats.infected, stats.healthy);
        }
    }
}

/// Fan-out to the console panel and the CSV writer.
struct Tee<A: SimObserver, B: SimObserver>(A, B);

impl<A: SimObserver, B: SimObserver> SimObserver for Tee<A, B> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        self.0.on_tick_end(tick, stats);
        self.1.on_tick_end(tick, stats);
    }
    fn on_snapshot(&mut self, tick: Tick, agents: &epi_agent::AgentStore) {
        self.0.on_snapshot(tick, agents);
        self.1.on_snapshot(tick, agents);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}

// ── World data ────────────────────────────────────────────────────────────────

/// Embedded place table: `HOME_COUNT` residential ids then `WORKPLACE_COUNT`
/// commercial ids starting at 1000.
fn places_csv() -> String {
    let mut csv = String::from("place_id,kind\n");
    for id in 0..HOME_COUNT {
        csv.push_str(&format!("{id},residential\n"));
    }
    for id in 0..WORKPLACE_COUNT {
        csv.push_str(&format!("{},commercial\n", 1_000 + id));
    }
    csv
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== closed-population — epi simulation core ===");
    println!("Agents: {AGENT_COUNT}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Load the world.
    let places = load_places_reader(Cursor::new(places_csv()))?;
    println!("World: {} places ({HOME_COUNT} homes, {WORKPLACE_COUNT} workplaces)", places.len());

    // 2. Configure the run.
    let config = SimConfig {
        seed: SEED,
        total_ticks: TOTAL_TICKS,
        output_interval_ticks: 500,
        transmission_probability: 0.0001,
        ..SimConfig::default()
    };

    // 3. Build the sim.
    let mut sim = SimBuilder::new(config, TransitMobility::new(AGENT_COUNT))
        .places(places)
        .agent_count(AGENT_COUNT)
        .build()?;
    println!(
        "Population ready: {} infected at tick 0",
        sim.infected_count()
    );
    println!();

    // 4. Set up output.
    let out_dir = Path::new("output/closed-population");
    std::fs::create_dir_all(out_dir)?;
    let csv_observer = SimOutputObserver::new(CsvWriter::new(out_dir)?);
    let panel = ConsolePanel { peak_infected: 0, peak_tick: Tick::ZERO };
    let mut observer = Tee(panel, csv_observer);

    // 5. First half of the run with the default tunables.
    let started = Instant::now();
    sim.run_ticks(TOTAL_TICKS / 2, &mut observer);

    // 6. The operator turns both dials up mid-run.
    let cranked = Tunables {
        transmission_probability: 0.001,
        speed_multiplier: 6.0,
        ..sim.tunables
    };
    sim.sync_panel(&cranked);
    println!("-- panel: speed ×2, transmission ×10 --");

    // 7. Second half, then flush the writers.
    sim.run_ticks(TOTAL_TICKS / 2, &mut observer);
    observer.on_sim_end(sim.current_tick);
    let elapsed = started.elapsed();

    if let Some(e) = observer.1.take_error() {
        eprintln!("output incomplete: {e}");
    }

    // 8. Summary.
    sim.check_consistency()?;
    let stats = sim.stats();
    println!();
    println!("Done in {elapsed:.2?} ({TOTAL_TICKS} ticks)");
    println!(
        "Final: {} infected / {} healthy  |  peak {} at {}",
        stats.infected, stats.healthy, observer.0.peak_infected, observer.0.peak_tick
    );
    println!("CSV output in {}", out_dir.display());

    Ok(())
}
