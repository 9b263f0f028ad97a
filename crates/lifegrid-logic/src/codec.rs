//! String codec for grids.
//!
//! A grid encodes as `size²` characters, `'1'` for live and `'0'` for dead.
//! Character `k` is the cell at `(k / size, k % size)`. Decoding checks
//! characters before length, so a string with both faults reports the bad
//! character.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::grid::Grid;

pub const LIVE_CHAR: char = '1';
pub const DEAD_CHAR: char = '0';

/// Why a string could not be decoded into a grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// A character other than `'0'` or `'1'` appeared in the input.
    #[error("invalid character {ch:?} at index {index} in {input:?}")]
    InvalidChar {
        ch: char,
        index: usize,
        input: String,
    },
    /// The input length is not a perfect square; `size` is its square root.
    #[error("invalid length: side {size} is not an integer for {input:?}")]
    InvalidLength { size: f64, input: String },
}

/// Encode a grid as its `'0'`/`'1'` string.
pub fn encode(grid: &Grid) -> String {
    grid.cells()
        .iter()
        .map(|&alive| if alive { LIVE_CHAR } else { DEAD_CHAR })
        .collect()
}

/// Decode a `'0'`/`'1'` string into a grid.
///
/// ```
/// use lifegrid_logic::codec::{decode, encode, ConversionError};
///
/// let grid = decode("0110").unwrap();
/// assert_eq!(grid.size(), 2);
/// assert_eq!(encode(&grid), "0110");
///
/// assert!(matches!(decode("a"), Err(ConversionError::InvalidChar { index: 0, .. })));
/// assert!(matches!(decode("10"), Err(ConversionError::InvalidLength { .. })));
/// ```
pub fn decode(input: &str) -> Result<Grid, ConversionError> {
    let mut cells = Vec::with_capacity(input.len());
    for (index, ch) in input.chars().enumerate() {
        match ch {
            LIVE_CHAR => cells.push(true),
            DEAD_CHAR => cells.push(false),
            _ => {
                log::debug!("rejecting grid string: {ch:?} at index {index}");
                return Err(ConversionError::InvalidChar {
                    ch,
                    index,
                    input: input.to_string(),
                });
            }
        }
    }

    let len = cells.len();
    let size = (len as f64).sqrt();
    let side = size.round() as usize;
    if size.fract() != 0.0 || side * side != len {
        log::debug!("rejecting grid string: length {len} is not a perfect square");
        return Err(ConversionError::InvalidLength {
            size,
            input: input.to_string(),
        });
    }

    Ok(Grid::from_cells(side, cells))
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl FromStr for Grid {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl TryFrom<String> for Grid {
    type Error = ConversionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        decode(&s)
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> Self {
        encode(&grid)
    }
}
