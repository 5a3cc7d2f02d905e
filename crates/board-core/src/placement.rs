//! Placement notation parsing and serialization.
//!
//! A placement string is eight `/`-separated rows, rank 0 first. Digits
//! count empty cells; letters are pieces, uppercase for White.

use thiserror::Error;

use crate::{Cell, Color, PieceKind};

/// Errors that can occur when parsing placement strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { ch: char, row: usize },

    #[error("row {row} has {cells} cells, expected 8")]
    InvalidRowWidth { row: usize, cells: u32 },
}

/// One piece from a placement string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub cell: Cell,
    pub kind: PieceKind,
    pub color: Color,
}

/// The reduced starting layout: knights on the back rank and a full row of
/// pawns for each side, Black on rank 0.
pub const INITIAL_PLACEMENT: &str = "1n4n1/pppppppp/8/8/8/8/PPPPPPPP/1N4N1";

/// Parses a placement string into the pieces it names.
pub fn parse_placement(placement: &str) -> Result<Vec<Placed>, LayoutError> {
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != 8 {
        return Err(LayoutError::InvalidRowCount(rows.len()));
    }

    let mut pieces = Vec::new();
    for (row, text) in rows.iter().enumerate() {
        let mut cells = 0u32;
        for ch in text.chars() {
            if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                cells += run;
            } else if let Some((kind, color)) = PieceKind::from_char(ch) {
                if cells < 8 {
                    pieces.push(Placed {
                        cell: Cell::new(cells as i8, row as i8),
                        kind,
                        color,
                    });
                }
                cells += 1;
            } else {
                return Err(LayoutError::InvalidCharacter { ch, row });
            }
        }
        if cells != 8 {
            return Err(LayoutError::InvalidRowWidth { row, cells });
        }
    }

    Ok(pieces)
}

/// Serializes a lookup of cell contents into a placement string.
pub fn write_placement<F>(mut at: F) -> String
where
    F: FnMut(Cell) -> Option<(PieceKind, Color)>,
{
    let mut out = String::new();
    for rank in 0..8 {
        let mut empty = 0;
        for file in 0..8 {
            match at(Cell::new(file, rank)) {
                Some((kind, color)) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(kind.to_char(color));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if rank < 7 {
            out.push('/');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_initial() {
        let pieces = parse_placement(INITIAL_PLACEMENT).unwrap();
        assert_eq!(pieces.len(), 20);
        assert_eq!(
            pieces[0],
            Placed {
                cell: Cell::new(1, 0),
                kind: PieceKind::Knight,
                color: Color::Black,
            }
        );
        let white_pawns = pieces
            .iter()
            .filter(|p| p.color == Color::White && p.kind == PieceKind::Pawn)
            .count();
        assert_eq!(white_pawns, 8);
        assert!(pieces
            .iter()
            .filter(|p| p.kind == PieceKind::Pawn && p.color == Color::White)
            .all(|p| p.cell.rank == 6));
    }

    #[test]
    fn roundtrip() {
        let pieces = parse_placement(INITIAL_PLACEMENT).unwrap();
        let written = write_placement(|cell| {
            pieces
                .iter()
                .find(|p| p.cell == cell)
                .map(|p| (p.kind, p.color))
        });
        assert_eq!(written, INITIAL_PLACEMENT);
    }

    #[test]
    fn invalid_row_count() {
        assert_eq!(
            parse_placement("8/8/8"),
            Err(LayoutError::InvalidRowCount(3))
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            parse_placement("8/8/8/8/8/8/ppppxppp/8"),
            Err(LayoutError::InvalidCharacter { ch: 'x', row: 6 })
        );
        assert!(matches!(
            parse_placement("8/8/8/8/8/8/8/07"),
            Err(LayoutError::InvalidCharacter { ch: '0', .. })
        ));
    }

    #[test]
    fn invalid_row_width() {
        assert_eq!(
            parse_placement("8/8/8/8/8/8/ppppppppp/8"),
            Err(LayoutError::InvalidRowWidth { row: 6, cells: 9 })
        );
        assert_eq!(
            parse_placement("8/8/8/8/8/8/7/8"),
            Err(LayoutError::InvalidRowWidth { row: 6, cells: 7 })
        );
    }

    #[test]
    fn error_display() {
        let err = LayoutError::InvalidCharacter { ch: 'x', row: 2 };
        assert!(err.to_string().contains("'x'"));
    }
}
