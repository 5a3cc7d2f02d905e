//! Engine error type.

use board_core::{Cell, DirectionError, LayoutError, PieceKind};
use thiserror::Error;

/// Errors raised by the board and its move rules.
///
/// None of these come from ordinary user input: picking up the wrong color
/// or dropping on an illegal cell is a silent no-op in
/// [`Session`](crate::Session). These signal a caller bug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {0:?} is outside the board")]
    OutOfBounds(Cell),

    #[error("illegal move: no piece on {0}")]
    IllegalMove(Cell),

    #[error("cell {0} is already occupied")]
    CellOccupied(Cell),

    #[error("move rule for {0} is not implemented")]
    NotImplemented(PieceKind),

    #[error(transparent)]
    InvalidDirectionToken(#[from] DirectionError),

    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),
}
