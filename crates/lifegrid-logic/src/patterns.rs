//! Named starting patterns.
//!
//! Each pattern carries the board size it is meant to run on and its
//! expected period there. Boards are bounded, so moving patterns like the
//! glider eventually hit an edge and are not periodic from the start.

use crate::grid::Grid;

/// A named arrangement of live cells on a square board.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    /// Board side length.
    pub size: usize,
    /// Live `(row, column)` cells.
    pub cells: &'static [(usize, usize)],
    /// `Some(1)` still life, `Some(n)` oscillator of period n, `None` otherwise.
    pub period: Option<usize>,
}

impl Pattern {
    /// Starting grid for this pattern.
    pub fn grid(&self) -> Grid {
        Grid::with_live_cells(self.size, self.cells)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        size: 4,
        cells: &[(1, 1), (1, 2), (2, 1), (2, 2)],
        period: Some(1),
    },
    Pattern {
        name: "Blinker",
        size: 3,
        cells: &[(1, 0), (1, 1), (1, 2)],
        period: Some(2),
    },
    Pattern {
        name: "Toad",
        size: 6,
        cells: &[(2, 2), (2, 3), (2, 4), (3, 1), (3, 2), (3, 3)],
        period: Some(2),
    },
    Pattern {
        name: "Beacon",
        size: 6,
        cells: &[
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 2),
            (3, 3),
            (3, 4),
            (4, 3),
            (4, 4),
        ],
        period: Some(2),
    },
    Pattern {
        name: "Glider",
        size: 6,
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        period: None,
    },
];

/// Look up a pattern by name, ignoring case.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;
    use crate::engine::{advance, step};

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(find_pattern("blinker").map(|p| p.size), Some(3));
        assert_eq!(find_pattern("GLIDER").map(|p| p.name), Some("Glider"));
        assert!(find_pattern("spaceship").is_none());
    }

    #[test]
    fn test_all_cells_on_board() {
        for p in PATTERNS {
            assert!(
                p.cells.iter().all(|&(r, c)| r < p.size && c < p.size),
                "{} has a cell off its board",
                p.name
            );
            assert_eq!(p.grid().live_count(), p.cells.len(), "{}", p.name);
        }
    }

    #[test]
    fn test_periodic_patterns_return() {
        for p in PATTERNS {
            let Some(period) = p.period else { continue };
            let start = p.grid();
            assert_eq!(advance(&start, period), start, "{} period {period}", p.name);
            if period > 1 {
                assert_ne!(step(&start), start, "{} should not be still", p.name);
            }
        }
    }

    #[test]
    fn test_blinker_matches_encoded_form() {
        let blinker = find_pattern("blinker").unwrap().grid();
        assert_eq!(encode(&blinker), "000111000");
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let glider = find_pattern("glider").unwrap();
        let moved: Vec<(usize, usize)> =
            glider.cells.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        let expected = Grid::with_live_cells(glider.size, &moved);
        assert_eq!(advance(&glider.grid(), 4), expected);
    }

    #[test]
    fn test_glider_settles_into_corner_block() {
        // on a 6×6 board the glider runs into the corner and becomes a block
        let settled = advance(&find_pattern("glider").unwrap().grid(), 15);
        assert_eq!(encode(&settled), "000000000000000000000000000011000011");
        assert_eq!(step(&settled), settled);
    }
}
