//! Player color representation.

use serde::{Deserialize, Serialize};

/// Represents the two sides of the board.
///
/// Black sits on the rank 0 edge and White on the rank 7 edge, so
/// "forward" is toward higher ranks for Black and lower ranks for White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the rank delta of one step forward (-1 for White, +1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns the rank pieces of this color start on (7 for White, 0 for Black).
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Returns the rank pawns of this color start on (6 for White, 1 for Black).
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        self.back_rank() + self.forward()
    }

    /// Returns the lowercase name, as used in config files and the JS bridge.
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
