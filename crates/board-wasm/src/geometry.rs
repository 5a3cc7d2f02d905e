//! Rendering options and pixel geometry.

use board_core::{Cell, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// Options for the canvas renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Board width (and height) in CSS pixels.
    pub width: f64,
    pub cell_color1: String,
    pub cell_color2: String,
    pub possible_move_fill_color: String,
    pub possible_move_stroke_color: String,
    pub possible_move_line_width: f64,
    /// Backing-store scale factor for crisp sprites.
    pub sharpness: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 600.0,
            cell_color1: "#DEDCCF".to_string(),
            cell_color2: "#379B65".to_string(),
            possible_move_fill_color: "rgba(0, 0, 0, 0.1)".to_string(),
            possible_move_stroke_color: "transparent".to_string(),
            possible_move_line_width: 2.0,
            sharpness: 5.0,
        }
    }
}

impl RenderConfig {
    /// Side length of one cell in pixels.
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.width / BOARD_SIZE as f64
    }

    /// Returns the cell under a pixel position, or `None` off the board.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Cell> {
        let size = self.cell_size();
        if !(x.is_finite() && y.is_finite()) || size <= 0.0 {
            return None;
        }
        let file = (x / size).floor();
        let rank = (y / size).floor();
        if !(0.0..BOARD_SIZE as f64).contains(&file) || !(0.0..BOARD_SIZE as f64).contains(&rank) {
            return None;
        }
        Some(Cell::new(file as i8, rank as i8))
    }

    /// Returns `[x, y, width, height]` of a cell in pixels.
    pub fn cell_rect(&self, cell: Cell) -> [f64; 4] {
        let size = self.cell_size();
        [cell.file as f64 * size, cell.rank as f64 * size, size, size]
    }

    /// Returns the pixel center of a cell.
    pub fn cell_center(&self, cell: Cell) -> [f64; 2] {
        let size = self.cell_size();
        [
            cell.file as f64 * size + size / 2.0,
            cell.rank as f64 * size + size / 2.0,
        ]
    }

    /// Returns the fill color of a cell's square.
    pub fn cell_color(&self, cell: Cell) -> &str {
        if (cell.file as i16 + cell.rank as i16).rem_euclid(2) == 0 {
            &self.cell_color1
        } else {
            &self.cell_color2
        }
    }
}
