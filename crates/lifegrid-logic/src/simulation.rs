//! Simulation driver: advances a grid through generations and watches for
//! repeats.
//!
//! The driver keeps a bounded window of past grids. When the current grid
//! equals one still in the window, the board has entered a cycle; a still
//! life (including an extinct board) has period 1. There is no timing or
//! rendering here — callers decide how often to tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::{initial_grid, RunConfig};
use crate::engine::step;
use crate::grid::Grid;

/// Past generations remembered for cycle detection by default.
pub const DEFAULT_HISTORY_DEPTH: usize = 10;

/// A detected repeat: the current grid first appeared at `first_seen` and
/// recurs every `period` generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    pub period: u64,
    pub first_seen: u64,
}

impl Cycle {
    pub fn is_still_life(&self) -> bool {
        self.period == 1
    }
}

/// Outcome of [`Simulation::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Generations advanced during this run.
    pub generations_run: u64,
    /// Generation counter after the run.
    pub final_generation: u64,
    /// Live cells in the final grid.
    pub live_cells: usize,
    /// First cycle detected during the run, if any.
    pub cycle: Option<Cycle>,
}

/// A grid plus its generation counter and recent history.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    /// (generation, grid) oldest first.
    history: VecDeque<(u64, Grid)>,
    history_depth: usize,
    stop_on_cycle: bool,
}

impl Simulation {
    /// Start at generation 0 with default history depth, stopping on cycles.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            history: VecDeque::with_capacity(DEFAULT_HISTORY_DEPTH),
            history_depth: DEFAULT_HISTORY_DEPTH,
            stop_on_cycle: true,
        }
    }

    /// Build a driver from a run configuration.
    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(initial_grid(config))
            .with_history_depth(config.history_depth)
            .with_stop_on_cycle(config.stop_on_cycle)
    }

    /// Number of past generations kept. Zero disables cycle detection.
    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history_depth = depth;
        while self.history.len() > depth {
            self.history.pop_front();
        }
        self
    }

    pub fn with_stop_on_cycle(mut self, stop: bool) -> Self {
        self.stop_on_cycle = stop;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation.
    pub fn tick(&mut self) {
        let next = step(&self.grid);
        if self.history_depth > 0 {
            if self.history.len() == self.history_depth {
                self.history.pop_front();
            }
            let previous = std::mem::replace(&mut self.grid, next);
            self.history.push_back((self.generation, previous));
        } else {
            self.grid = next;
        }
        self.generation += 1;
        log::trace!(
            "generation {} ({} live)",
            self.generation,
            self.grid.live_count()
        );
    }

    /// Whether the current grid repeats one in the history window.
    /// The most recent match gives the shortest period.
    pub fn detect_cycle(&self) -> Option<Cycle> {
        self.history
            .iter()
            .rev()
            .find(|(_, past)| *past == self.grid)
            .map(|&(seen, _)| Cycle {
                period: self.generation - seen,
                first_seen: seen,
            })
    }

    /// Advance up to `generations` generations, stopping early on a cycle
    /// when configured to.
    pub fn run(&mut self, generations: u64) -> RunSummary {
        let start = self.generation;
        let mut cycle = None;

        for _ in 0..generations {
            self.tick();
            if cycle.is_some() {
                continue;
            }
            if let Some(found) = self.detect_cycle() {
                log::info!(
                    "cycle detected at generation {}: period {} (first seen at {})",
                    self.generation,
                    found.period,
                    found.first_seen
                );
                cycle = Some(found);
                if self.stop_on_cycle {
                    break;
                }
            }
        }

        RunSummary {
            generations_run: self.generation - start,
            final_generation: self.generation,
            live_cells: self.grid.live_count(),
            cycle,
        }
    }
}
