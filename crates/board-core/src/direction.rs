//! Color-relative directions.
//!
//! Movement rules are written from the moving side's point of view: a
//! knight jump is "left left forward", a pawn push is "forward". This
//! module turns such a path plus a [`Color`] into an absolute cell.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{Cell, Color};

/// Errors that can occur when parsing direction tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectionError {
    #[error("invalid direction token: '{0}'")]
    InvalidToken(String),

    #[error("empty direction path")]
    EmptyPath,
}

/// A unit step relative to the side that is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    /// Returns the absolute `(file, rank)` delta of this step for `color`.
    ///
    /// Forward is toward the opponent's edge. Left and right are as seen by
    /// a player sitting behind their own back rank, so both flip with color.
    #[inline]
    pub const fn delta(self, color: Color) -> (i8, i8) {
        let sign = color.forward();
        match self {
            Direction::Forward => (0, sign),
            Direction::Backward => (0, -sign),
            Direction::Left => (sign, 0),
            Direction::Right => (-sign, 0),
        }
    }

    /// Returns the token used in textual paths.
    pub const fn token(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Direction::Forward),
            "backward" => Ok(Direction::Backward),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(DirectionError::InvalidToken(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Parses a space-separated path such as `"left left forward"`.
pub fn parse_path(s: &str) -> Result<Vec<Direction>, DirectionError> {
    let path = s
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<Direction>, _>>()?;
    if path.is_empty() {
        return Err(DirectionError::EmptyPath);
    }
    Ok(path)
}

/// Applies each step of `path` to `origin` from `color`'s point of view.
///
/// No bounds clamping is done; the result may be off the board.
pub fn walk(origin: Cell, color: Color, path: &[Direction]) -> Cell {
    path.iter().fold(origin, |cell, step| {
        let (df, dr) = step.delta(color);
        cell.offset(df, dr)
    })
}

/// Parses `path` and walks it from `origin`.
pub fn walk_str(origin: Cell, color: Color, path: &str) -> Result<Cell, DirectionError> {
    Ok(walk(origin, color, &parse_path(path)?))
}
