//! LifeGrid Headless Simulation Harness
//!
//! Validates the grid codec and transition engine, then runs a configured
//! simulation. Runs entirely in-process — no rendering, no animation loop.
//!
//! Usage:
//!   cargo run -p lifegrid-simtest
//!   cargo run -p lifegrid-simtest -- --verbose
//!   cargo run -p lifegrid-simtest -- path/to/run.json

use std::path::Path;

use anyhow::{bail, Context};
use lifegrid_logic::codec::{decode, encode, ConversionError};
use lifegrid_logic::config::{validate_config, RunConfig};
use lifegrid_logic::engine::{advance, count_live_neighbors, step};
use lifegrid_logic::grid::Grid;
use lifegrid_logic::patterns::{find_pattern, PATTERNS};
use lifegrid_logic::simulation::Simulation;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::filter::LevelFilter;

// ── Default run (used when no config path is given) ─────────────────────
const DEFAULT_RUN_JSON: &str = include_str!("../../../data/default_run.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let config_path = args.iter().find(|a| !a.starts_with("--"));

    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let config = match config_path {
        Some(path) => load_config(Path::new(path))?,
        None => serde_json::from_str(DEFAULT_RUN_JSON).context("parsing bundled default run")?,
    };

    println!("=== LifeGrid Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Codec round trips and failures
    results.extend(validate_codec(verbose));

    // 2. Transition rules
    results.extend(validate_engine(verbose));

    // 3. Known patterns
    results.extend(validate_patterns(verbose));

    // 4. Seeded randomness
    results.extend(validate_random(verbose));

    // 5. Configured run
    results.extend(validate_configured_run(&config, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Read and validate a run config from a JSON file.
fn load_config(path: &Path) -> anyhow::Result<RunConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading run config {}", path.display()))?;
    let config: RunConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing run config {}", path.display()))?;
    let errors = validate_config(&config);
    if !errors.is_empty() {
        bail!("invalid run config {}: {:?}", path.display(), errors);
    }
    log::info!("loaded run config from {}", path.display());
    Ok(config)
}

// ── 1. Codec ────────────────────────────────────────────────────────────

fn validate_codec(verbose: bool) -> Vec<TestResult> {
    println!("--- Codec ---");
    let mut results = Vec::new();

    // Round trips
    let samples = ["", "0", "1", "0110", "000111000", "1000010000100001"];
    let bad: Vec<&str> = samples
        .iter()
        .copied()
        .filter(|s| decode(s).map(|g| encode(&g)).as_deref() != Ok(*s))
        .collect();
    results.push(TestResult {
        name: "codec_round_trip".into(),
        passed: bad.is_empty(),
        detail: if bad.is_empty() {
            format!("{} samples round-trip", samples.len())
        } else {
            format!("round trip failed for {:?}", bad)
        },
    });

    // Empty string
    let empty = decode("");
    results.push(TestResult {
        name: "codec_empty_string".into(),
        passed: matches!(&empty, Ok(g) if g.is_empty()),
        detail: "\"\" → size-0 grid".into(),
    });

    // Invalid char
    let err = decode("a");
    results.push(TestResult {
        name: "codec_invalid_char".into(),
        passed: matches!(err, Err(ConversionError::InvalidChar { ch: 'a', index: 0, .. })),
        detail: format!("\"a\" → {:?}", err),
    });

    // Invalid length
    let err = decode("10");
    results.push(TestResult {
        name: "codec_invalid_length".into(),
        passed: matches!(err, Err(ConversionError::InvalidLength { .. })),
        detail: format!("\"10\" → {:?}", err),
    });

    // Char check precedes length check
    let err = decode("0a1");
    results.push(TestResult {
        name: "codec_char_before_length".into(),
        passed: matches!(err, Err(ConversionError::InvalidChar { ch: 'a', index: 1, .. })),
        detail: "\"0a1\" reports the char, not the length".into(),
    });

    if verbose {
        println!("  {} codec checks", results.len());
    }
    results
}

// ── 2. Engine ───────────────────────────────────────────────────────────

fn step_encoded(input: &str) -> Option<String> {
    decode(input).ok().map(|g| encode(&step(&g)))
}

fn validate_engine(verbose: bool) -> Vec<TestResult> {
    println!("--- Transition Engine ---");
    let mut results = Vec::new();

    // Solitary cells
    let single = [step_encoded("0"), step_encoded("1")];
    results.push(TestResult {
        name: "engine_single_cell_dies".into(),
        passed: single.iter().all(|s| s.as_deref() == Some("0")),
        detail: format!("\"0\",\"1\" → {:?}", single),
    });

    // Blinker
    let once = step_encoded("000111000");
    let twice = once.as_deref().and_then(step_encoded);
    results.push(TestResult {
        name: "engine_blinker".into(),
        passed: once.as_deref() == Some("010010010") && twice.as_deref() == Some("000111000"),
        detail: format!("000111000 → {:?} → {:?}", once, twice),
    });

    // Bounded edges
    let edge = decode("100100100").ok();
    let count = edge.as_ref().map(|g| count_live_neighbors(g, 1, 2));
    results.push(TestResult {
        name: "engine_no_wraparound".into(),
        passed: count == Some(0),
        detail: format!("right edge sees {:?} live neighbours of the left column", count),
    });

    // Purity
    let grid = Grid::random(16, &mut StdRng::seed_from_u64(99));
    let snapshot = grid.clone();
    let a = step(&grid);
    let b = step(&grid);
    results.push(TestResult {
        name: "engine_pure".into(),
        passed: a == b && grid == snapshot,
        detail: "equal inputs → equal outputs, input unchanged".into(),
    });

    // Empty board
    let empty = step(&Grid::new_empty(0));
    results.push(TestResult {
        name: "engine_empty_board".into(),
        passed: empty.is_empty(),
        detail: "size 0 → size 0".into(),
    });

    if verbose {
        println!("  {} engine checks", results.len());
    }
    results
}

// ── 3. Patterns ─────────────────────────────────────────────────────────

fn validate_patterns(verbose: bool) -> Vec<TestResult> {
    println!("--- Patterns ---");
    let mut results = Vec::new();

    for pattern in PATTERNS {
        let Some(period) = pattern.period else { continue };
        let start = pattern.grid();
        let back = advance(&start, period);
        results.push(TestResult {
            name: format!("pattern_{}_period", pattern.name.to_lowercase()),
            passed: back == start,
            detail: format!("{} returns after {} generation(s)", pattern.name, period),
        });
        if verbose {
            println!("  {} ({}×{}): {}", pattern.name, pattern.size, pattern.size, start);
        }
    }

    if let Some(glider) = find_pattern("glider") {
        let summary = Simulation::new(glider.grid()).run(100);
        let settled = summary.cycle.map(|c| c.is_still_life()).unwrap_or(false);
        results.push(TestResult {
            name: "pattern_glider_settles".into(),
            passed: settled && summary.live_cells == 4,
            detail: format!(
                "glider becomes a block after {} generations ({} live)",
                summary.generations_run, summary.live_cells
            ),
        });
    }

    results
}

// ── 4. Randomness ───────────────────────────────────────────────────────

fn validate_random(verbose: bool) -> Vec<TestResult> {
    println!("--- Random Grids ---");
    let mut results = Vec::new();

    let a = Grid::random(32, &mut StdRng::seed_from_u64(42));
    let b = Grid::random(32, &mut StdRng::seed_from_u64(42));
    results.push(TestResult {
        name: "random_seeded_reproducible".into(),
        passed: a == b,
        detail: "same seed → same grid".into(),
    });

    let big = Grid::random(100, &mut StdRng::seed_from_u64(7));
    let live = big.live_count();
    results.push(TestResult {
        name: "random_density".into(),
        passed: (4500..=5500).contains(&live),
        detail: format!("{} / 10000 live", live),
    });

    let unseeded = Grid::new_random(10);
    results.push(TestResult {
        name: "random_unseeded_shape".into(),
        passed: unseeded.size() == 10 && unseeded.rows().all(|r| r.len() == 10),
        detail: "thread RNG grid is square".into(),
    });

    if verbose {
        println!("  seeded 32×32 grid has {} live cells", a.live_count());
    }
    results
}

// ── 5. Configured run ───────────────────────────────────────────────────

fn validate_configured_run(config: &RunConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Configured Run ---");
    let mut results = Vec::new();

    let errors = validate_config(config);
    results.push(TestResult {
        name: "run_config_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            format!(
                "size {}, {} generations, seed {:?}",
                config.size, config.generations, config.seed
            )
        } else {
            format!("{:?}", errors)
        },
    });
    if !errors.is_empty() {
        return results;
    }

    let mut sim = Simulation::from_config(config);
    let start = sim.grid().clone();
    let summary = sim.run(config.generations);
    log::info!(
        "run finished at generation {} with {} live cells",
        summary.final_generation,
        summary.live_cells
    );

    let within_budget = summary.generations_run <= config.generations;
    results.push(TestResult {
        name: "run_within_budget".into(),
        passed: within_budget,
        detail: format!(
            "{} of {} generations run",
            summary.generations_run, config.generations
        ),
    });

    let replay = advance(&start, summary.generations_run as usize);
    results.push(TestResult {
        name: "run_matches_replay".into(),
        passed: replay == *sim.grid(),
        detail: "driver agrees with repeated step".into(),
    });

    let detail = match summary.cycle {
        Some(c) if c.is_still_life() => format!("still life from generation {}", c.first_seen),
        Some(c) => format!("period {} from generation {}", c.period, c.first_seen),
        None => "no cycle within history window".into(),
    };
    results.push(TestResult {
        name: "run_outcome".into(),
        passed: true,
        detail,
    });

    if verbose {
        println!("  final grid: {}", sim.grid());
    }
    results
}
