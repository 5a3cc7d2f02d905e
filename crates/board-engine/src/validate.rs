//! Candidate classification against current occupancy.

use board_core::Color;

use crate::{Board, CandidateMove};

/// Classifies raw candidates for a piece of `color`.
///
/// Off-board targets and targets held by `color` are dropped. Empty targets
/// become quiet moves and opponent-held targets become captures. The board
/// is only read.
pub fn validate(candidates: &[CandidateMove], color: Color, board: &Board) -> Vec<CandidateMove> {
    candidates
        .iter()
        .filter_map(|candidate| {
            let target = candidate.target;
            match board.get(target) {
                Err(_) => None,
                Ok(None) => Some(CandidateMove::quiet(target)),
                Ok(Some(occupant)) if occupant.color != color => {
                    Some(CandidateMove::capture(target))
                }
                Ok(Some(_)) => None,
            }
        })
        .collect()
}
