//! Transition engine — one generation of Conway's Game of Life.
//!
//! Rule B3/S23 on a bounded board: a cell is live next generation iff it has
//! exactly 3 live neighbours, or it is live now and has exactly 2. Cells off
//! the board count as dead. Every step reads the input grid and writes a
//! fresh buffer, so neighbour counts always see the previous generation.

use crate::grid::Grid;

/// Relative positions of the eight Moore neighbours.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Live neighbour count that births a dead cell (and keeps a live one).
pub const BIRTH_COUNT: u8 = 3;

/// Extra neighbour count that keeps a live cell alive.
pub const SURVIVE_COUNT: u8 = 2;

/// Number of live cells among the eight neighbours of `(row, column)`.
pub fn count_live_neighbors(grid: &Grid, row: usize, column: usize) -> u8 {
    let (row, column) = (row as isize, column as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| grid.is_alive(row + dr, column + dc))
        .count() as u8
}

/// Next state of a single cell given its current state and neighbour count.
pub fn next_cell_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (_, BIRTH_COUNT) => true,
        (true, SURVIVE_COUNT) => true,
        _ => false,
    }
}

/// Compute the next generation. The input is left untouched.
pub fn step(grid: &Grid) -> Grid {
    let size = grid.size();
    let mut cells = Vec::with_capacity(size * size);
    for row in 0..size {
        for column in 0..size {
            let alive = grid.get(row, column).unwrap_or(false);
            let neighbors = count_live_neighbors(grid, row, column);
            cells.push(next_cell_state(alive, neighbors));
        }
    }
    Grid::from_cells(size, cells)
}

/// Apply [`step`] `generations` times. Zero generations returns a copy.
pub fn advance(grid: &Grid, generations: usize) -> Grid {
    let mut current = grid.clone();
    for _ in 0..generations {
        current = step(&current);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};

    fn step_str(input: &str) -> String {
        encode(&step(&decode(input).unwrap()))
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8u8 {
            assert_eq!(next_cell_state(false, n), n == 3, "dead with {n}");
            assert_eq!(next_cell_state(true, n), n == 2 || n == 3, "live with {n}");
        }
    }

    #[test]
    fn test_neighbor_count_center_and_corner() {
        let full = decode("111111111").unwrap();
        assert_eq!(count_live_neighbors(&full, 1, 1), 8);
        assert_eq!(count_live_neighbors(&full, 0, 0), 3);
        assert_eq!(count_live_neighbors(&full, 0, 1), 5);
    }

    #[test]
    fn test_neighbor_count_excludes_self() {
        let single = decode("000010000").unwrap();
        assert_eq!(count_live_neighbors(&single, 1, 1), 0);
        assert_eq!(count_live_neighbors(&single, 0, 0), 1);
    }

    #[test]
    fn test_no_wraparound() {
        // live cells on the left edge must not count for the right edge
        let grid = decode("100100100").unwrap();
        assert_eq!(count_live_neighbors(&grid, 1, 2), 0);
        assert_eq!(count_live_neighbors(&grid, 1, 1), 3);
    }

    #[test]
    fn test_empty_grid_steps_to_empty() {
        let next = step(&Grid::new_empty(0));
        assert!(next.is_empty());
    }

    #[test]
    fn test_single_cell_always_dies() {
        assert_eq!(step_str("0"), "0");
        assert_eq!(step_str("1"), "0");
    }

    #[test]
    fn test_blinker_oscillates() {
        assert_eq!(step_str("000111000"), "010010010");
        assert_eq!(step_str("010010010"), "000111000");
    }

    #[test]
    fn test_block_is_still() {
        assert_eq!(step_str("1111"), "1111");
        assert_eq!(step_str("0000011001100000"), "0000011001100000");
    }

    #[test]
    fn test_full_three_by_three_keeps_corners() {
        assert_eq!(step_str("111111111"), "101000101");
    }

    #[test]
    fn test_step_leaves_input_unchanged() {
        let grid = decode("000111000").unwrap();
        let before = grid.clone();
        let first = step(&grid);
        let second = step(&grid);
        assert_eq!(grid, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_advance_zero_is_identity() {
        let grid = decode("000111000").unwrap();
        assert_eq!(advance(&grid, 0), grid);
        assert_eq!(advance(&grid, 2), grid);
        assert_eq!(encode(&advance(&grid, 3)), "010010010");
    }
}
