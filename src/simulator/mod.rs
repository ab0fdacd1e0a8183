//! Offline arena harness.
//!
//! Plays the engine on generated maps for a fixed number of turns and
//! records per-turn decision statistics, for threshold tuning and
//! regression comparison between engine versions. The world advance is a
//! simplified proxy for the arena: each planned cell yields up to its
//! beacon strength in resources per turn, hatched eggs grow the colony,
//! and the colony regroups on its base between turns. Maps are
//! independent, so they can be played in parallel.

pub mod mapgen;

use std::io::Write;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::CellKind;
use crate::engine::Engine;
use crate::strategy::StopCause;
use crate::tuning::Tuning;

use mapgen::{generate, MapParams};

/// Configuration for an arena run.
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    /// Number of maps to play.
    pub maps: usize,
    /// Turns per map.
    pub ticks: usize,
    /// Generated map shape.
    pub width: usize,
    pub height: usize,
    /// Strategy tuning under test.
    pub tuning: Tuning,
    /// Number of parallel threads (1 = sequential).
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-map progress output.
    pub quiet: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            maps: 10,
            ticks: 50,
            width: 8,
            height: 5,
            tuning: Tuning::default(),
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// One turn's decision statistics.
#[derive(Debug, Clone)]
pub struct TickRecord {
    pub tick: usize,
    /// Focus name for the turn.
    pub focus: &'static str,
    /// Cells in the plan.
    pub cells: usize,
    /// Total required strength committed.
    pub committed: i32,
    /// The turn's ant budget.
    pub budget: i32,
    /// Whether the greedy pass ended on a budget rejection.
    pub stopped_on_budget: bool,
}

/// A complete played map.
#[derive(Debug, Clone)]
pub struct MapRecord {
    pub map_id: usize,
    pub cells: usize,
    /// Cells reachable from the own base.
    pub reachable: usize,
    /// Crystals banked over the run.
    pub crystals: i32,
    /// Colony size after the final turn.
    pub final_ants: i32,
    pub ticks: Vec<TickRecord>,
}

/// Plays one generated map for the configured number of turns.
fn play_map(config: &ArenaConfig, map_id: usize, rng: &mut SmallRng) -> MapRecord {
    let params = MapParams {
        width: config.width,
        height: config.height,
        ..MapParams::default()
    };
    let (layout, mut snap) = generate(&params, rng);
    let home = layout.my_bases[0];
    let engine = Engine::with_tuning(layout, config.tuning.clone());

    let mut crystals = 0;
    let mut ticks = Vec::with_capacity(config.ticks);
    for tick in 0..config.ticks {
        let (focus, allocation) = engine.plan(&snap);
        ticks.push(TickRecord {
            tick,
            focus: focus.name(),
            cells: allocation.plan.len(),
            committed: allocation.plan.total_strength(),
            budget: snap.my_total(),
            stopped_on_budget: matches!(allocation.stop, StopCause::BudgetExceeded { .. }),
        });

        // Harvest: each planned cell yields up to its strength.
        let mut hatched = 0;
        for (cell, strength) in allocation.plan.iter() {
            let gathered = snap.resources[cell].min(strength);
            if gathered <= 0 {
                continue;
            }
            snap.resources[cell] -= gathered;
            match engine.layout.kind(cell) {
                CellKind::Eggs => hatched += gathered,
                CellKind::Crystals => crystals += gathered,
                CellKind::Empty => {}
            }
        }

        // The colony regroups on its base between turns.
        let total = snap.my_total() + hatched;
        snap.my_ants.iter_mut().for_each(|a| *a = 0);
        snap.my_ants[home] = total;
    }

    MapRecord {
        map_id,
        cells: engine.layout.len(),
        reachable: engine.field.reachable_count(),
        crystals,
        final_ants: snap.my_total(),
        ticks,
    }
}

/// Plays all configured maps, sequentially or in parallel.
pub fn run_arena(config: &ArenaConfig) -> Vec<MapRecord> {
    if config.threads > 1 {
        run_arena_parallel(config)
    } else {
        run_arena_sequential(config)
    }
}

fn map_rng(config: &ArenaConfig, map_id: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(map_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

fn report_map(config: &ArenaConfig, record: &MapRecord, started: Instant) {
    if !config.quiet {
        eprintln!(
            "Map {}/{}: {} crystals, {} ants ({:.2}s)",
            record.map_id + 1,
            config.maps,
            record.crystals,
            record.final_ants,
            started.elapsed().as_secs_f64(),
        );
    }
}

fn run_arena_sequential(config: &ArenaConfig) -> Vec<MapRecord> {
    let mut records = Vec::with_capacity(config.maps);
    for map_id in 0..config.maps {
        let started = Instant::now();
        let mut rng = map_rng(config, map_id);
        let record = play_map(config, map_id, &mut rng);
        report_map(config, &record, started);
        records.push(record);
    }
    records
}

/// Parallel run: maps are independent, so a rayon pool plays them
/// concurrently with per-map seeded rngs.
fn run_arena_parallel(config: &ArenaConfig) -> Vec<MapRecord> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    pool.install(|| {
        (0..config.maps)
            .into_par_iter()
            .map(|map_id| {
                let started = Instant::now();
                let mut rng = map_rng(config, map_id);
                let record = play_map(config, map_id, &mut rng);
                report_map(config, &record, started);
                record
            })
            .collect()
    })
}

/// Writes map records as JSONL (one JSON object per map, one per line).
pub fn write_jsonl<W: Write>(records: &[MapRecord], out: &mut W) -> std::io::Result<()> {
    for record in records {
        write_map_json(record, out)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Writes a single map record as a JSON object.
pub fn write_map_json<W: Write>(record: &MapRecord, out: &mut W) -> std::io::Result<()> {
    write!(out, "{{")?;
    write!(out, "\"map_id\":{}", record.map_id)?;
    write!(out, ",\"cells\":{}", record.cells)?;
    write!(out, ",\"reachable\":{}", record.reachable)?;
    write!(out, ",\"crystals\":{}", record.crystals)?;
    write!(out, ",\"final_ants\":{}", record.final_ants)?;
    write!(out, ",\"ticks\":[")?;
    for (i, tick) in record.ticks.iter().enumerate() {
        if i > 0 {
            write!(out, ",")?;
        }
        write!(
            out,
            "{{\"tick\":{},\"focus\":\"{}\",\"cells\":{},\"committed\":{},\"budget\":{},\"stopped_on_budget\":{}}}",
            tick.tick, tick.focus, tick.cells, tick.committed, tick.budget, tick.stopped_on_budget
        )?;
    }
    write!(out, "]}}")
}

/// Prints aggregate statistics for a completed run to stderr.
pub fn print_summary(records: &[MapRecord]) {
    if records.is_empty() {
        eprintln!("No maps played");
        return;
    }
    let maps = records.len() as f64;
    let crystals: i32 = records.iter().map(|r| r.crystals).sum();
    let ants: i32 = records.iter().map(|r| r.final_ants).sum();
    let busy: usize = records
        .iter()
        .flat_map(|r| r.ticks.iter())
        .filter(|t| t.cells > 0)
        .count();
    let total_ticks: usize = records.iter().map(|r| r.ticks.len()).sum();
    eprintln!(
        "Summary: {:.1} crystals/map, {:.1} final ants/map, {}/{} active turns",
        crystals as f64 / maps,
        ants as f64 / maps,
        busy,
        total_ticks
    );
}
