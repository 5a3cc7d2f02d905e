//! Core types for the interactive board.
//!
//! This crate provides the leaf types shared by the engine and its front ends:
//! - [`Color`] and [`PieceKind`] for piece identity
//! - [`Cell`] for board coordinates
//! - [`Direction`] paths for color-relative movement
//! - Placement notation for describing layouts

mod cell;
mod color;
pub mod direction;
mod piece;
mod placement;

pub use cell::{Cell, BOARD_SIZE};
pub use color::Color;
pub use direction::{Direction, DirectionError};
pub use piece::PieceKind;
pub use placement::{parse_placement, write_placement, LayoutError, Placed, INITIAL_PLACEMENT};
