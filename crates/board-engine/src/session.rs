//! Pointer-driven interaction with a board.
//!
//! A [`Session`] owns the board, the turn, and the drag state. Front ends
//! feed it quantized pointer events and read back occupancy, the held piece
//! and its legal targets between frames:
//!
//! ```
//! use board_core::Cell;
//! use board_engine::{DropOutcome, Session};
//!
//! let mut session = Session::new();
//! session.pointer_down(Cell::new(4, 6)).unwrap();
//! assert_eq!(session.legal_targets().len(), 2);
//!
//! let outcome = session.pointer_up(Cell::new(4, 4)).unwrap();
//! assert!(matches!(outcome, DropOutcome::Committed(_)));
//! ```

use board_core::{Cell, Color};

use crate::movegen::candidate_moves;
use crate::validate::validate;
use crate::{Board, BoardConfig, BoardError, CandidateMove, Client, Piece, PieceId, TurnTracker};

/// Drag state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Interaction {
    /// Nothing is held.
    #[default]
    Idle,
    /// A piece has been picked up and follows the pointer.
    Holding {
        piece: PieceId,
        origin: Cell,
        targets: Vec<CandidateMove>,
    },
}

/// A move applied to the board by a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedMove {
    pub piece: PieceId,
    pub from: Cell,
    pub to: Cell,
    /// The piece taken off the board, for captures.
    pub captured: Option<Piece>,
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The held piece moved and the turn passed.
    Committed(CommittedMove),
    /// The drop was not a legal target; nothing changed.
    Cancelled,
    /// Nothing was held.
    Ignored,
}

/// Board, turn, and drag state for one interactive game.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    turn: TurnTracker,
    state: Interaction,
    client: Client,
    pointer: Option<Cell>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session on the initial layout that both colors may play.
    pub fn new() -> Self {
        Self::with_board(Board::new(), Client::Both)
    }

    /// Creates a session from configuration.
    pub fn with_config(config: &BoardConfig) -> Result<Self, BoardError> {
        let board = match &config.layout {
            Some(layout) => Board::from_placement(layout)?,
            None => Board::new(),
        };
        Ok(Self::with_board(board, config.client))
    }

    /// Creates a session on an existing board, White to move.
    pub fn with_board(board: Board, client: Client) -> Self {
        Session {
            board,
            turn: TurnTracker::new(),
            state: Interaction::Idle,
            client,
            pointer: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the drag state.
    pub fn state(&self) -> &Interaction {
        &self.state
    }

    /// Returns the color allowed to pick up.
    pub fn current_turn(&self) -> Color {
        self.turn.current()
    }

    /// Returns the turn tracker.
    pub fn turn(&self) -> &TurnTracker {
        &self.turn
    }

    /// Returns every cell with its occupant, rank 0 first.
    pub fn current_occupancy(&self) -> impl Iterator<Item = (Cell, Option<&Piece>)> {
        self.board.occupancy()
    }

    /// Returns the held piece, if any.
    pub fn held_piece(&self) -> Option<&Piece> {
        match &self.state {
            Interaction::Idle => None,
            Interaction::Holding { piece, .. } => self.board.piece(*piece),
        }
    }

    /// Returns the classified targets of the held piece, empty when idle.
    pub fn legal_targets(&self) -> &[CandidateMove] {
        match &self.state {
            Interaction::Idle => &[],
            Interaction::Holding { targets, .. } => targets,
        }
    }

    /// Returns the last cell reported by a pointer event.
    pub fn pointer_cell(&self) -> Option<Cell> {
        self.pointer
    }

    /// Returns the client restriction.
    pub fn client(&self) -> Client {
        self.client
    }

    /// Changes the client restriction. A held piece is dropped back.
    pub fn set_client(&mut self, client: Client) {
        self.client = client;
        if let Interaction::Holding { piece, .. } = std::mem::take(&mut self.state) {
            tracing::debug!(%piece, ?client, "client changed, hold cancelled");
        }
    }

    /// Handles a pointer press over `cell`.
    ///
    /// Picks up the occupant if it belongs to the side to move and the client
    /// may operate it; otherwise nothing happens. Returns true on pick-up.
    pub fn pointer_down(&mut self, cell: Cell) -> Result<bool, BoardError> {
        self.pointer = Some(cell);
        let occupant = self.board.get(cell)?.copied();
        self.state = Interaction::Idle;

        let Some(piece) = occupant else {
            tracing::debug!(%cell, "pick-up on empty cell ignored");
            return Ok(false);
        };
        let turn = self.turn.current();
        if piece.color != turn || !self.client.can_operate(piece.color) {
            tracing::debug!(%cell, color = %piece.color, %turn, client = ?self.client, "pick-up ignored");
            return Ok(false);
        }

        let raw = candidate_moves(&piece, &self.board)?;
        let targets = validate(&raw, piece.color, &self.board);
        tracing::debug!(
            piece = %piece.id,
            kind = %piece.kind,
            %cell,
            targets = targets.len(),
            "picked up"
        );
        self.state = Interaction::Holding {
            piece: piece.id,
            origin: cell,
            targets,
        };
        Ok(true)
    }

    /// Handles pointer motion. Only the pointer cell is recorded.
    pub fn pointer_move(&mut self, cell: Cell) {
        tracing::trace!(%cell, "pointer moved");
        self.pointer = Some(cell);
    }

    /// Handles a pointer release over `cell`.
    ///
    /// Commits the held piece's move if `cell` is one of its legal targets,
    /// removing a captured occupant first. Any other release puts the piece
    /// back without touching board or turn.
    pub fn pointer_up(&mut self, cell: Cell) -> Result<DropOutcome, BoardError> {
        self.pointer = Some(cell);
        let Interaction::Holding {
            piece,
            origin,
            targets,
        } = std::mem::take(&mut self.state)
        else {
            return Ok(DropOutcome::Ignored);
        };

        let Some(chosen) = targets.iter().find(|m| m.target == cell).copied() else {
            tracing::debug!(%piece, %origin, %cell, "drop cancelled");
            return Ok(DropOutcome::Cancelled);
        };

        let captured = if chosen.capture {
            self.board.remove(cell)?
        } else {
            None
        };
        self.board.move_piece(origin, cell)?;
        self.turn.advance();

        match &captured {
            Some(victim) => tracing::info!(
                %piece,
                from = %origin,
                to = %cell,
                captured = %victim.id,
                "capture committed"
            ),
            None => tracing::info!(%piece, from = %origin, to = %cell, "move committed"),
        }

        Ok(DropOutcome::Committed(CommittedMove {
            piece,
            from: origin,
            to: cell,
            captured,
        }))
    }
}
