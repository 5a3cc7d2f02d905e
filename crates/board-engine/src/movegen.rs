//! Per-variant move rules.
//!
//! Each rule proposes raw [`CandidateMove`]s from the piece's own point of
//! view. Whether a target is quiet or a capture is decided afterwards by
//! [`validate`](crate::validate), except for the pawn's diagonal attacks,
//! which only exist when there is something to capture.

use board_core::{direction, Cell, Direction, PieceKind};
use serde::Serialize;

use crate::{Board, BoardError, Piece};

use Direction::{Backward, Forward, Left, Right};

/// A proposed destination for a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CandidateMove {
    pub target: Cell,
    pub capture: bool,
}

impl CandidateMove {
    /// A move onto an empty cell.
    #[inline]
    pub const fn quiet(target: Cell) -> Self {
        CandidateMove {
            target,
            capture: false,
        }
    }

    /// A move that takes the occupant of `target`.
    #[inline]
    pub const fn capture(target: Cell) -> Self {
        CandidateMove {
            target,
            capture: true,
        }
    }
}

/// The eight knight jumps, as seen by the moving side.
pub const KNIGHT_PATHS: [[Direction; 3]; 8] = [
    [Left, Left, Forward],
    [Right, Right, Forward],
    [Forward, Forward, Left],
    [Forward, Forward, Right],
    [Left, Left, Backward],
    [Right, Right, Backward],
    [Backward, Backward, Left],
    [Backward, Backward, Right],
];

/// Returns the raw candidate moves for `piece` on `board`.
///
/// Fails with [`BoardError::NotImplemented`] for variants without a rule.
pub fn candidate_moves(piece: &Piece, board: &Board) -> Result<Vec<CandidateMove>, BoardError> {
    match piece.kind {
        PieceKind::Pawn => Ok(pawn_moves(piece, board)),
        PieceKind::Knight => Ok(knight_moves(piece)),
        kind @ (PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen | PieceKind::King) => {
            Err(BoardError::NotImplemented(kind))
        }
    }
}

/// Diagonal attacks first, then forward pushes.
fn pawn_moves(piece: &Piece, board: &Board) -> Vec<CandidateMove> {
    let mut moves = Vec::with_capacity(4);
    let color = piece.color;

    for side in [Left, Right] {
        let target = direction::walk(piece.cell, color, &[side, Forward]);
        if board
            .piece_on(target)
            .is_some_and(|occupant| occupant.color != color)
        {
            moves.push(CandidateMove::capture(target));
        }
    }

    let one = direction::walk(piece.cell, color, &[Forward]);
    if !one.is_on_board() || board.piece_on(one).is_some() {
        return moves;
    }
    moves.push(CandidateMove::quiet(one));

    if piece.cell.rank != color.pawn_rank() {
        return moves;
    }
    let two = direction::walk(piece.cell, color, &[Forward, Forward]);
    if two.is_on_board() && board.piece_on(two).is_none() {
        moves.push(CandidateMove::quiet(two));
    }

    moves
}

fn knight_moves(piece: &Piece) -> Vec<CandidateMove> {
    KNIGHT_PATHS
        .iter()
        .map(|path| direction::walk(piece.cell, piece.color, path))
        .filter(|target| target.is_on_board())
        .map(CandidateMove::quiet)
        .collect()
}
