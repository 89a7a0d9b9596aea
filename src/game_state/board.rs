//! Mailbox board model.
//!
//! `Board` is the authoritative 8x8 grid of [`Cell`]s. Every mutation goes
//! through [`Board::place`], [`Board::remove`] or [`Board::record_move_at`]
//! so the piece/cell coordinate invariant and the board version stay in sync.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{BOARD_SIZE, STARTING_PLACEMENT};
use crate::game_state::chess_types::{Coordinate, Piece};
use crate::utils::fen_parser::parse_placement;
use crate::utils::render_game_state::render_board;

/// A single square of the board. Its coordinate never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coordinate: Coordinate,
    piece: Option<Piece>,
}

impl Cell {
    fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            piece: None,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

/// Screen rectangle of one cell, in the presentation layer's units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CellRect {
    /// Edge-inclusive containment test.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (self.x..=self.x + self.width).contains(&x) && (self.y..=self.y + self.height).contains(&y)
    }
}

/// Geometry supplied by whatever draws the board.
pub trait CellLayout {
    fn cell_rect(&self, coordinate: Coordinate) -> CellRect;
}

/// Square cells of equal size laid out from a top-left origin. Columns grow
/// along x, rows along y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformGrid {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
}

impl UniformGrid {
    /// Splits a square board texture of `board_size` pixels into 8x8 cells.
    pub fn fitted(origin_x: f32, origin_y: f32, board_size: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_size: board_size / BOARD_SIZE as f32,
        }
    }
}

impl CellLayout for UniformGrid {
    fn cell_rect(&self, coordinate: Coordinate) -> CellRect {
        CellRect {
            x: self.origin_x + coordinate.col() as f32 * self.cell_size,
            y: self.origin_y + coordinate.row() as f32 * self.cell_size,
            width: self.cell_size,
            height: self.cell_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    /// Bumped on every mutation; cached move lists compare against it.
    version: u64,
    /// Square of the pawn that advanced two cells on the previous move.
    last_double_step: Option<Coordinate>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| Cell::new(Coordinate::ALL[row * BOARD_SIZE + col]))
        });
        Self {
            cells,
            version: 0,
            last_double_step: None,
        }
    }

    pub fn new_game() -> Self {
        Self::from_placement(STARTING_PLACEMENT).expect("starting placement should always parse")
    }

    /// Builds a board from a FEN piece-placement field (row 0 first).
    pub fn from_placement(placement: &str) -> Result<Self, ChessErrors> {
        parse_placement(placement)
    }

    /// Returns the cell at `row`, `col`.
    pub fn get_cell(&self, row: i16, col: i16) -> Result<&Cell, ChessErrors> {
        let coordinate = Coordinate::new(row, col)?;
        Ok(self.cell(coordinate))
    }

    #[inline]
    pub fn cell(&self, coordinate: Coordinate) -> &Cell {
        &self.cells[coordinate.row() as usize][coordinate.col() as usize]
    }

    #[inline]
    fn cell_mut(&mut self, coordinate: Coordinate) -> &mut Cell {
        &mut self.cells[coordinate.row() as usize][coordinate.col() as usize]
    }

    #[inline]
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.cell(coordinate).piece()
    }

    /// Counts one move for the piece on `coordinate` without relocating it.
    /// Returns `false` for an empty cell. Counts as a mutation because move
    /// counters feed castling and en passant.
    pub fn record_move_at(&mut self, coordinate: Coordinate) -> bool {
        let Some(piece) = self.cell_mut(coordinate).piece.as_mut() else {
            return false;
        };
        piece.record_move();
        self.version += 1;
        true
    }

    /// Maps a screen position to the cell whose rectangle contains it.
    pub fn get_cell_by_point(&self, layout: &dyn CellLayout, x: f32, y: f32) -> Option<&Cell> {
        self.cells
            .iter()
            .flatten()
            .find(|cell| layout.cell_rect(cell.coordinate).contains(x, y))
    }

    /// Occupied cells in row-major order.
    pub fn get_filled_cells(&self) -> Vec<&Cell> {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .collect()
    }

    /// Pieces on the board in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten().filter_map(Cell::piece)
    }

    /// Puts `piece` on `coordinate`, rewriting the piece's own coordinate.
    ///
    /// Returns whatever was on the cell before; capture paths remove the
    /// victim first so nothing is silently dropped.
    pub fn place(&mut self, mut piece: Piece, coordinate: Coordinate) -> Option<Piece> {
        piece.relocate(coordinate);
        self.version += 1;
        self.cell_mut(coordinate).piece.replace(piece)
    }

    /// Clears a cell. The removed piece is returned untouched.
    pub fn remove(&mut self, coordinate: Coordinate) -> Option<Piece> {
        self.version += 1;
        self.cell_mut(coordinate).piece.take()
    }

    /// Independent copy for what-if simulation. Pieces only name their owner
    /// by color, so nothing is shared with the players of the original game.
    pub fn copy(&self) -> Board {
        self.clone()
    }

    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[inline]
    pub fn last_double_step(&self) -> Option<Coordinate> {
        self.last_double_step
    }

    pub fn set_last_double_step(&mut self, coordinate: Option<Coordinate>) {
        if self.last_double_step != coordinate {
            self.version += 1;
            self.last_double_step = coordinate;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
