//! Square boolean grid — the state container for one generation.
//!
//! Cells live in a single flat buffer indexed `row * size + column`, so the
//! square invariant is structural: there is no way to build a grid whose
//! rows differ in length. Outside this crate a grid is read-only; the
//! transition engine produces new grids rather than editing old ones.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Probability that a cell starts live in a randomized grid.
pub const RANDOM_LIVE_PROBABILITY: f64 = 0.5;

/// A square matrix of live (`true`) / dead (`false`) cells.
///
/// Serializes as its encoded `'0'`/`'1'` string (see [`crate::codec`]), so
/// deserializing a grid runs the same validation as [`crate::codec::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-dead grid of side `size`. `size == 0` is the empty grid.
    pub fn new_empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// A grid where each cell is live with probability 0.5, drawn from the
    /// thread-local generator.
    pub fn new_random(size: usize) -> Self {
        Self::random(size, &mut rand::thread_rng())
    }

    /// A grid where each cell is live with probability 0.5, drawn from `rng`.
    ///
    /// Cells are drawn in row-major order, so a seeded generator always
    /// yields the same grid.
    pub fn random(size: usize, rng: &mut impl Rng) -> Self {
        let cells = (0..size * size)
            .map(|_| rng.gen_bool(RANDOM_LIVE_PROBABILITY))
            .collect();
        Self { size, cells }
    }

    /// A grid with exactly the listed `(row, column)` cells live.
    /// Coordinates outside the board are ignored.
    pub fn with_live_cells(size: usize, live: &[(usize, usize)]) -> Self {
        let mut grid = Self::new_empty(size);
        for &(row, column) in live {
            if row < size && column < size {
                grid.set(row, column, true);
            }
        }
        grid
    }

    /// Wrap an existing row-major buffer. Caller guarantees
    /// `cells.len() == size * size`.
    pub(crate) fn from_cells(size: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True for the size-0 grid.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Cell state, or `None` when `(row, column)` is off the board.
    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        if row < self.size && column < self.size {
            Some(self.cells[row * self.size + column])
        } else {
            None
        }
    }

    /// Cell state with signed coordinates. Anything off the board is dead,
    /// which is what makes the board bounded rather than toroidal.
    pub fn is_alive(&self, row: isize, column: isize) -> bool {
        if row < 0 || column < 0 {
            return false;
        }
        self.get(row as usize, column as usize).unwrap_or(false)
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, alive: bool) {
        let size = self.size;
        self.cells[row * size + column] = alive;
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Row slices, top to bottom. Yields nothing for the empty grid.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics; an empty buffer yields no chunks for any width
        self.cells.chunks(self.size.max(1))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}
