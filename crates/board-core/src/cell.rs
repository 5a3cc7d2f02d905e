//! Board cell coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: i8 = 8;

/// A cell on the board, addressed by `(file, rank)`.
///
/// A `Cell` is not guaranteed to lie on the board: relative steps may walk
/// off the edge, and it is the caller's job to check [`Cell::is_on_board`]
/// before using the result.
///
/// Rank 0 is Black's edge. For algebraic names, file 0 is `a` and rank 0
/// is `8`, so the cell at `(4, 6)` is `e2`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub file: i8,
    pub rank: i8,
}

impl Cell {
    /// Creates a cell from file and rank.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Cell { file, rank }
    }

    /// Returns true if both coordinates are in `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// Returns the row-major index (0-63), or `None` if off the board.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.rank as usize * BOARD_SIZE as usize + self.file as usize)
        } else {
            None
        }
    }

    /// Creates a cell from a row-major index (0-63).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Cell::new(
                (index % BOARD_SIZE as usize) as i8,
                (index / BOARD_SIZE as usize) as i8,
            ))
        } else {
            None
        }
    }

    /// Returns this cell shifted by the given file and rank deltas.
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Self {
        Cell::new(self.file + file_delta, self.rank + rank_delta)
    }

    /// Iterates over all 64 cells, rank 0 first.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..64).filter_map(Cell::from_index)
    }

    /// Parses a cell from algebraic notation (e.g., "e2").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => (c - b'a') as i8,
            _ => return None,
        };
        let rank = match bytes[1] {
            c @ b'1'..=b'8' => BOARD_SIZE - (c - b'0') as i8,
            _ => return None,
        };
        Some(Cell::new(file, rank))
    }

    /// Returns the algebraic name, or `None` if off the board.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.file as u8) as char;
        let rank = (b'0' + (BOARD_SIZE - self.rank) as u8) as char;
        Some(format!("{}{}", file, rank))
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {})", self.file, self.rank)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "({}, {})", self.file, self.rank),
        }
    }
}
