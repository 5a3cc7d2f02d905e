//! Text and JSON views of a session.

use std::fmt::Write;

use board_core::{Cell, Color};
use board_engine::{CandidateMove, Piece, Session};
use serde::Serialize;

/// Everything a front end reads between events.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub turn: Color,
    pub placement: String,
    pub held: Option<&'a Piece>,
    pub targets: &'a [CandidateMove],
    pub pointer: Option<Cell>,
    pub occupancy: Vec<Option<&'a Piece>>,
}

impl<'a> Snapshot<'a> {
    pub fn of(session: &'a Session) -> Self {
        Snapshot {
            turn: session.current_turn(),
            placement: session.board().to_placement(),
            held: session.held_piece(),
            targets: session.legal_targets(),
            pointer: session.pointer_cell(),
            occupancy: session.current_occupancy().map(|(_, piece)| piece).collect(),
        }
    }
}

/// Draws the board with the held piece's targets marked: `*` for quiet
/// moves, brackets around captures.
pub fn ascii(session: &Session) -> String {
    let targets = session.legal_targets();
    let held = session.held_piece().map(|p| p.cell);
    let mut out = String::new();

    for rank in 0..8 {
        let _ = write!(out, "{} ", 8 - rank);
        for file in 0..8 {
            let cell = Cell::new(file, rank);
            let target = targets.iter().find(|m| m.target == cell);
            let glyph = match session.board().piece_on(cell) {
                Some(piece) => piece.kind.to_char(piece.color),
                None if target.is_some() => '*',
                None => '.',
            };
            let (open, close) = match target {
                Some(m) if m.capture => ('[', ']'),
                _ if held == Some(cell) => ('(', ')'),
                _ => (' ', ' '),
            };
            let _ = write!(out, "{}{}{}", open, glyph, close);
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    let _ = write!(out, "{} to move", session.current_turn());
    out
}

/// Lists the held piece's targets, one per line.
pub fn targets(session: &Session) -> String {
    let Some(piece) = session.held_piece() else {
        return "nothing held".to_string();
    };
    let mut out = format!("{} {} on {}:", piece.color, piece.kind, piece.cell);
    if session.legal_targets().is_empty() {
        out.push_str(" no moves");
    }
    for m in session.legal_targets() {
        let kind = if m.capture { "capture" } else { "quiet" };
        let _ = write!(out, "\n  {} ({})", m.target, kind);
    }
    out
}
