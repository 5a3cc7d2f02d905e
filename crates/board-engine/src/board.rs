//! Piece arena and occupancy grid.

use std::collections::BTreeMap;
use std::fmt;

use board_core::{parse_placement, write_placement, Cell, Color, PieceKind, INITIAL_PLACEMENT};
use serde::Serialize;

use crate::BoardError;

/// Stable identifier of a piece for the lifetime of a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PieceId(u32);

impl PieceId {
    /// Returns the raw identifier.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece on the board.
///
/// `cell` is the single source of truth for where the piece sits; the grid
/// is kept in step with it by every [`Board`] mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub cell: Cell,
}

/// An 8x8 occupancy grid over an arena of pieces.
///
/// The grid stores [`PieceId`]s, never pieces, so removing a piece from the
/// arena and clearing its cell is the only way a piece leaves the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Pieces keyed by id.
    pieces: BTreeMap<PieceId, Piece>,

    /// Row-major grid, rank 0 first.
    grid: [Option<PieceId>; 64],

    /// Next id to hand out.
    next_id: u32,
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            pieces: BTreeMap::new(),
            grid: [None; 64],
            next_id: 0,
        }
    }

    /// Creates a board with the fixed starting layout.
    pub fn new() -> Self {
        Self::from_placement(INITIAL_PLACEMENT).expect("INITIAL_PLACEMENT is valid")
    }

    /// Creates a board from a placement string.
    pub fn from_placement(placement: &str) -> Result<Self, BoardError> {
        let mut board = Board::empty();
        for placed in parse_placement(placement)? {
            board.place(placed.kind, placed.color, placed.cell)?;
        }
        Ok(board)
    }

    /// Serializes the occupancy as a placement string.
    pub fn to_placement(&self) -> String {
        write_placement(|cell| self.piece_on(cell).map(|p| (p.kind, p.color)))
    }

    /// Puts a new piece on an empty cell and returns its id.
    pub fn place(
        &mut self,
        kind: PieceKind,
        color: Color,
        cell: Cell,
    ) -> Result<PieceId, BoardError> {
        let slot = slot(cell)?;
        if self.grid[slot].is_some() {
            return Err(BoardError::CellOccupied(cell));
        }
        let id = self.insert(kind, color, cell);
        self.grid[slot] = Some(id);
        Ok(id)
    }

    /// Returns the piece on `cell`, if any.
    pub fn get(&self, cell: Cell) -> Result<Option<&Piece>, BoardError> {
        let slot = slot(cell)?;
        Ok(self.grid[slot].and_then(|id| self.pieces.get(&id)))
    }

    /// Returns true if `cell` has no occupant.
    pub fn is_empty(&self, cell: Cell) -> Result<bool, BoardError> {
        Ok(self.get(cell)?.is_none())
    }

    /// Returns the piece on `cell`, treating off-board cells as empty.
    pub fn piece_on(&self, cell: Cell) -> Option<&Piece> {
        self.get(cell).ok().flatten()
    }

    /// Returns the piece with the given id, if it is still on the board.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Iterates over the pieces on the board in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Returns the number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Iterates over every cell with its occupant, rank 0 first.
    pub fn occupancy(&self) -> impl Iterator<Item = (Cell, Option<&Piece>)> {
        Cell::all().map(move |cell| (cell, self.piece_on(cell)))
    }

    /// Relocates the occupant of `from` to `to` and clears `from`.
    ///
    /// Any piece already on `to` is taken off the board and returned.
    pub fn move_piece(&mut self, from: Cell, to: Cell) -> Result<Option<Piece>, BoardError> {
        let from_slot = slot(from)?;
        let to_slot = slot(to)?;
        let id = self.grid[from_slot].ok_or(BoardError::IllegalMove(from))?;
        if from_slot == to_slot {
            return Ok(None);
        }

        let displaced = self.grid[to_slot].and_then(|other| self.pieces.remove(&other));
        self.grid[to_slot] = Some(id);
        self.grid[from_slot] = None;
        if let Some(piece) = self.pieces.get_mut(&id) {
            piece.cell = to;
        }
        Ok(displaced)
    }

    /// Takes the occupant of `cell` off the board.
    pub fn remove(&mut self, cell: Cell) -> Result<Option<Piece>, BoardError> {
        let slot = slot(cell)?;
        Ok(self.grid[slot].take().and_then(|id| self.pieces.remove(&id)))
    }

    /// Swaps the occupants of two cells. Either or both may be empty.
    pub fn exchange(&mut self, a: Cell, b: Cell) -> Result<(), BoardError> {
        let a_slot = slot(a)?;
        let b_slot = slot(b)?;
        self.grid.swap(a_slot, b_slot);
        for (slot, cell) in [(a_slot, a), (b_slot, b)] {
            if let Some(piece) = self.grid[slot].and_then(|id| self.pieces.get_mut(&id)) {
                piece.cell = cell;
            }
        }
        Ok(())
    }

    /// Returns true if the grid and the arena agree: every piece sits on
    /// exactly the cell it records and no grid cell points elsewhere.
    pub fn is_consistent(&self) -> bool {
        let mut seen = 0;
        for (slot, entry) in self.grid.iter().enumerate() {
            if let Some(id) = entry {
                match self.pieces.get(id) {
                    Some(piece) if piece.cell.index() == Some(slot) => seen += 1,
                    _ => return false,
                }
            }
        }
        seen == self.pieces.len()
    }

    fn insert(&mut self, kind: PieceKind, color: Color, cell: Cell) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.pieces.insert(
            id,
            Piece {
                id,
                kind,
                color,
                cell,
            },
        );
        id
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8 {
            write!(f, "{} ", 8 - rank)?;
            for file in 0..8 {
                let c = match self.piece_on(Cell::new(file, rank)) {
                    Some(piece) => piece.kind.to_char(piece.color),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

fn slot(cell: Cell) -> Result<usize, BoardError> {
    cell.index().ok_or(BoardError::OutOfBounds(cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_layout() {
        let board = Board::new();
        assert_eq!(board.piece_count(), 20);
        assert!(board.is_consistent());

        let knight = board.get(Cell::new(1, 0)).unwrap().unwrap();
        assert_eq!(knight.kind, PieceKind::Knight);
        assert_eq!(knight.color, Color::Black);

        let pawn = board.get(Cell::new(4, 6)).unwrap().unwrap();
        assert_eq!(pawn.kind, PieceKind::Pawn);
        assert_eq!(pawn.color, Color::White);

        assert!(board.is_empty(Cell::new(0, 7)).unwrap());
        assert_eq!(board.to_placement(), INITIAL_PLACEMENT);
    }

    #[test]
    fn get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            board.get(Cell::new(8, 0)),
            Err(BoardError::OutOfBounds(Cell::new(8, 0)))
        );
        assert!(board.is_empty(Cell::new(0, -1)).is_err());
        assert!(board.piece_on(Cell::new(0, -1)).is_none());
    }

    #[test]
    fn move_piece_updates_both_sides() {
        let mut board = Board::new();
        let from = Cell::new(4, 6);
        let to = Cell::new(4, 5);
        let id = board.get(from).unwrap().unwrap().id;

        assert_eq!(board.move_piece(from, to), Ok(None));
        assert!(board.is_empty(from).unwrap());
        assert_eq!(board.get(to).unwrap().map(|p| p.id), Some(id));
        assert_eq!(board.piece(id).unwrap().cell, to);
        assert!(board.is_consistent());
    }

    #[test]
    fn move_from_empty_cell_fails() {
        let mut board = Board::new();
        let empty = Cell::new(3, 3);
        assert_eq!(
            board.move_piece(empty, Cell::new(3, 4)),
            Err(BoardError::IllegalMove(empty))
        );
    }

    #[test]
    fn move_onto_occupied_cell_removes_occupant() {
        let mut board = Board::empty();
        board.place(PieceKind::Knight, Color::White, Cell::new(0, 0)).unwrap();
        let victim = board.place(PieceKind::Pawn, Color::Black, Cell::new(1, 2)).unwrap();

        let displaced = board.move_piece(Cell::new(0, 0), Cell::new(1, 2)).unwrap();
        assert_eq!(displaced.map(|p| p.id), Some(victim));
        assert_eq!(board.piece_count(), 1);
        assert!(board.piece(victim).is_none());
        assert!(board.is_consistent());
    }

    #[test]
    fn exchange_swaps_cells() {
        let mut board = Board::new();
        let a = Cell::new(1, 0);
        let b = Cell::new(1, 7);
        let black = board.get(a).unwrap().unwrap().id;
        let white = board.get(b).unwrap().unwrap().id;

        board.exchange(a, b).unwrap();
        assert_eq!(board.piece(black).unwrap().cell, b);
        assert_eq!(board.piece(white).unwrap().cell, a);
        assert!(board.is_consistent());

        board.exchange(a, Cell::new(3, 3)).unwrap();
        assert!(board.is_empty(a).unwrap());
        assert_eq!(board.piece(white).unwrap().cell, Cell::new(3, 3));
        assert!(board.is_consistent());
    }

    #[test]
    fn place_rejects_occupied_cell() {
        let mut board = Board::new();
        assert_eq!(
            board.place(PieceKind::Pawn, Color::White, Cell::new(1, 0)),
            Err(BoardError::CellOccupied(Cell::new(1, 0)))
        );
    }

    #[test]
    fn remove_piece() {
        let mut board = Board::new();
        let removed = board.remove(Cell::new(6, 0)).unwrap().unwrap();
        assert_eq!(removed.kind, PieceKind::Knight);
        assert_eq!(board.piece_count(), 19);
        assert_eq!(board.remove(Cell::new(6, 0)), Ok(None));
        assert!(board.is_consistent());
    }

    #[test]
    fn placement_roundtrip() {
        let placement = "8/8/3n4/8/4P3/8/8/8";
        let board = Board::from_placement(placement).unwrap();
        assert_eq!(board.piece_count(), 2);
        assert_eq!(board.to_placement(), placement);
        assert!(matches!(
            Board::from_placement("8/8"),
            Err(BoardError::Layout(_))
        ));
    }

    #[test]
    fn display() {
        let board = Board::new();
        let text = board.to_string();
        assert!(text.starts_with("8 .n....n."));
        assert!(text.ends_with("  abcdefgh"));
    }
}
