//! Move generation and board state for the interactive board.
//!
//! This crate provides:
//! - [`Board`] - an arena of [`Piece`]s with an 8x8 occupancy grid
//! - [`candidate_moves`] - per-variant movement rules (pawn and knight)
//! - [`validate`] - classification of candidates into quiet moves and captures
//! - [`Session`] - the pointer-driven pick-up/drop state machine and turn
//! - [`BoardConfig`] - injected configuration (client restriction, layout)
//!
//! # Example
//!
//! ```
//! use board_core::{Cell, Color};
//! use board_engine::{candidate_moves, validate, Board, Session};
//!
//! // Rules can be queried directly on a board...
//! let board = Board::new();
//! let knight = board.get(Cell::new(1, 7)).unwrap().unwrap();
//! let raw = candidate_moves(knight, &board).unwrap();
//! let legal = validate(&raw, knight.color, &board);
//! assert_eq!(legal.len(), 2);
//!
//! // ...or driven through pointer events.
//! let mut session = Session::new();
//! session.pointer_down(Cell::new(1, 7)).unwrap();
//! session.pointer_up(Cell::new(2, 5)).unwrap();
//! assert_eq!(session.current_turn(), Color::Black);
//! ```

mod board;
mod config;
mod error;
pub mod movegen;
mod session;
mod turn;
mod validate;

pub use board::{Board, Piece, PieceId};
pub use config::{BoardConfig, Client, ConfigError};
pub use error::BoardError;
pub use movegen::{candidate_moves, CandidateMove};
pub use session::{CommittedMove, DropOutcome, Interaction, Session};
pub use turn::TurnTracker;
pub use validate::validate;
