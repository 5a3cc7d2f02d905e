//! Side-to-move tracking.

use board_core::Color;

/// Tracks which color may pick up a piece.
///
/// Starts at White. Only [`Session`](crate::Session) can advance it, and
/// only when a move is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTracker {
    current: Color,
    committed: u32,
}

impl TurnTracker {
    /// Creates a tracker with White to move.
    pub const fn new() -> Self {
        TurnTracker {
            current: Color::White,
            committed: 0,
        }
    }

    /// Returns the color allowed to pick up.
    #[inline]
    pub const fn current(&self) -> Color {
        self.current
    }

    /// Returns the number of committed moves so far.
    #[inline]
    pub const fn committed(&self) -> u32 {
        self.committed
    }

    pub(crate) fn advance(&mut self) {
        self.current = self.current.opposite();
        self.committed += 1;
    }
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self::new()
    }
}
