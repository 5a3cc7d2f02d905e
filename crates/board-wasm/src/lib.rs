//! WebAssembly bindings for the interactive board.
//!
//! The canvas front end owns sprites, painting, and pointer tracking. It
//! quantizes pointer positions with [`Chessboard::cell_at_point`], feeds the
//! resulting cells in, and reads state back once per frame.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Chessboard } from 'board-wasm';
//!
//! await init();
//!
//! const board = new Chessboard();
//! canvas.addEventListener('mousedown', (e) => {
//!     const cell = board.cellAtPoint(e.offsetX, e.offsetY);
//!     if (cell) board.pointerDown(cell[0], cell[1]);
//! });
//!
//! function frame() {
//!     for (const entry of board.occupancy()) { /* draw sprite */ }
//!     for (const target of board.legalTargets()) { /* draw dot or ring */ }
//!     requestAnimationFrame(frame);
//! }
//! ```

mod geometry;

pub use geometry::RenderConfig;

use board_core::{Cell, Color, PieceKind};
use board_engine::{BoardConfig, Client, DropOutcome, Piece, Session};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Piece data handed to the renderer for sprite selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub id: u32,
    pub kind: PieceKind,
    pub color: Color,
    pub file: i8,
    pub rank: i8,
}

impl From<&Piece> for PieceView {
    fn from(piece: &Piece) -> Self {
        PieceView {
            id: piece.id.raw(),
            kind: piece.kind,
            color: piece.color,
            file: piece.cell.file,
            rank: piece.cell.rank,
        }
    }
}

/// A highlight target for the held piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetView {
    pub file: i8,
    pub rank: i8,
    pub capture: bool,
}

/// Construction options accepted from JavaScript.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ChessboardOptions {
    #[serde(flatten)]
    board: BoardConfig,
    #[serde(flatten)]
    render: RenderConfig,
}

/// An interactive board that can be driven from JavaScript.
#[wasm_bindgen]
pub struct Chessboard {
    session: Session,
    render: RenderConfig,
    config: BoardConfig,
}

#[wasm_bindgen]
impl Chessboard {
    /// Creates a board with the initial layout and default rendering.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Chessboard {
            session: Session::new(),
            render: RenderConfig::default(),
            config: BoardConfig::default(),
        }
    }

    /// Creates a board from an options object.
    ///
    /// Accepts `client`, `layout`, and any [`RenderConfig`] field; missing
    /// fields take their defaults.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(options: JsValue) -> Result<Chessboard, JsError> {
        let options: ChessboardOptions = if options.is_undefined() || options.is_null() {
            ChessboardOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        Self::from_options(options).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Handles a pointer press. Returns true if a piece was picked up.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, file: i8, rank: i8) -> Result<bool, JsError> {
        Ok(self.session.pointer_down(Cell::new(file, rank))?)
    }

    /// Records the pointer cell while dragging.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, file: i8, rank: i8) {
        self.session.pointer_move(Cell::new(file, rank));
    }

    /// Handles a pointer release.
    ///
    /// Returns "committed", "cancelled", or "ignored".
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, file: i8, rank: i8) -> Result<String, JsError> {
        let outcome = self.session.pointer_up(Cell::new(file, rank))?;
        Ok(outcome_name(&outcome).to_string())
    }

    /// Returns 64 entries, rank 0 first: a piece object or null.
    #[wasm_bindgen]
    pub fn occupancy(&self) -> Result<JsValue, JsError> {
        Ok(to_js(&self.occupancy_views())?)
    }

    /// Returns the held piece, or null.
    #[wasm_bindgen(js_name = heldPiece)]
    pub fn held_piece(&self) -> Result<JsValue, JsError> {
        Ok(to_js(&self.held_view())?)
    }

    /// Returns the held piece's targets as `{file, rank, capture}` objects.
    #[wasm_bindgen(js_name = legalTargets)]
    pub fn legal_targets(&self) -> Result<JsValue, JsError> {
        Ok(to_js(&self.target_views())?)
    }

    /// Returns the side to move ("white" or "black").
    #[wasm_bindgen(js_name = currentTurn)]
    pub fn current_turn(&self) -> String {
        self.session.current_turn().as_str().to_string()
    }

    /// Returns the last pointer cell as `[file, rank]`, or undefined.
    #[wasm_bindgen(js_name = pointerCell)]
    pub fn pointer_cell(&self) -> Option<Vec<i8>> {
        self.session.pointer_cell().map(|c| vec![c.file, c.rank])
    }

    /// Returns the piece letter on a cell (e.g. "N" or "p"), or undefined.
    #[wasm_bindgen(js_name = pieceAt)]
    pub fn piece_at(&self, file: i8, rank: i8) -> Option<String> {
        let piece = self.session.board().piece_on(Cell::new(file, rank))?;
        Some(piece.kind.to_char(piece.color).to_string())
    }

    /// Returns the board in placement notation.
    #[wasm_bindgen(js_name = toPlacement)]
    pub fn to_placement(&self) -> String {
        self.session.board().to_placement()
    }

    /// Sets which colors this client may move: "both", "white", "black", "none".
    #[wasm_bindgen(js_name = setClient)]
    pub fn set_client(&mut self, client: &str) -> Result<(), JsError> {
        let client: Client = client.parse().map_err(|e: String| JsError::new(&e))?;
        self.config.client = client;
        self.session.set_client(client);
        Ok(())
    }

    /// Restarts from the configured layout with White to move.
    pub fn reset(&mut self) -> Result<(), JsError> {
        self.session = Session::with_config(&self.config)?;
        Ok(())
    }

    /// Returns the rendering options.
    #[wasm_bindgen(js_name = renderConfig)]
    pub fn render_config(&self) -> Result<JsValue, JsError> {
        Ok(to_js(&self.render)?)
    }

    /// Returns the side length of one cell in pixels.
    #[wasm_bindgen(js_name = cellSize)]
    pub fn cell_size(&self) -> f64 {
        self.render.cell_size()
    }

    /// Returns the cell under a pixel position as `[file, rank]`, or undefined.
    #[wasm_bindgen(js_name = cellAtPoint)]
    pub fn cell_at_point(&self, x: f64, y: f64) -> Option<Vec<i8>> {
        self.render.cell_at(x, y).map(|c| vec![c.file, c.rank])
    }

    /// Returns `[x, y, width, height]` of a cell in pixels.
    #[wasm_bindgen(js_name = cellRect)]
    pub fn cell_rect(&self, file: i8, rank: i8) -> Vec<f64> {
        self.render.cell_rect(Cell::new(file, rank)).to_vec()
    }

    /// Returns `[x, y]` of a cell's center in pixels.
    #[wasm_bindgen(js_name = cellCenter)]
    pub fn cell_center(&self, file: i8, rank: i8) -> Vec<f64> {
        self.render.cell_center(Cell::new(file, rank)).to_vec()
    }

    /// Returns the square color of a cell.
    #[wasm_bindgen(js_name = cellColor)]
    pub fn cell_color(&self, file: i8, rank: i8) -> String {
        self.render.cell_color(Cell::new(file, rank)).to_string()
    }
}

impl Chessboard {
    fn from_options(options: ChessboardOptions) -> Result<Self, board_engine::BoardError> {
        Ok(Chessboard {
            session: Session::with_config(&options.board)?,
            render: options.render,
            config: options.board,
        })
    }

    /// Returns the wrapped session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn occupancy_views(&self) -> Vec<Option<PieceView>> {
        self.session
            .current_occupancy()
            .map(|(_, piece)| piece.map(PieceView::from))
            .collect()
    }

    fn held_view(&self) -> Option<PieceView> {
        self.session.held_piece().map(PieceView::from)
    }

    fn target_views(&self) -> Vec<TargetView> {
        self.session
            .legal_targets()
            .iter()
            .map(|m| TargetView {
                file: m.target.file,
                rank: m.target.rank,
                capture: m.capture,
            })
            .collect()
    }
}

impl Default for Chessboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes `value` with `None` mapped to `null` rather than `undefined`.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true))
}

fn outcome_name(outcome: &DropOutcome) -> &'static str {
    match outcome {
        DropOutcome::Committed(_) => "committed",
        DropOutcome::Cancelled => "cancelled",
        DropOutcome::Ignored => "ignored",
    }
}
