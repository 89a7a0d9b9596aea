//! Core value types shared by the board, the move generators and the
//! turn engine.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;

/// Side a piece or player belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White starts at the bottom of the
    /// board (rows 6 and 7) and walks toward row 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl FromStr for Color {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            other => Err(ChessErrors::InvalidPlayerColor(other.to_owned())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Pawns, rooks and kings remember how often they moved; castling and
    /// en passant depend on it.
    #[inline]
    pub const fn tracks_moves(self) -> bool {
        matches!(self, PieceKind::Pawn | PieceKind::Rook | PieceKind::King)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// Board coordinate as (row, col), both in `0..8`.
///
/// Fields are private: a `Coordinate` can only come from [`Coordinate::new`],
/// [`Coordinate::offset`] or [`Coordinate::ALL`], so every value in
/// circulation indexes the board safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

const fn all_coordinates() -> [Coordinate; BOARD_SIZE * BOARD_SIZE] {
    let mut out = [Coordinate { row: 0, col: 0 }; BOARD_SIZE * BOARD_SIZE];
    let mut square = 0;
    while square < out.len() {
        out[square] = Coordinate {
            row: (square / BOARD_SIZE) as u8,
            col: (square % BOARD_SIZE) as u8,
        };
        square += 1;
    }
    out
}

impl Coordinate {
    /// Every coordinate in row-major order; `ALL[row * 8 + col]`.
    pub const ALL: [Coordinate; BOARD_SIZE * BOARD_SIZE] = all_coordinates();

    pub fn new(row: i16, col: i16) -> Result<Self, ChessErrors> {
        let size = BOARD_SIZE as i16;
        if !(0..size).contains(&row) || !(0..size).contains(&col) {
            return Err(ChessErrors::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Moves the coordinate by a row and column offset.
    ///
    /// Returns `None` when the result leaves the board, so generators can
    /// filter out-of-range destinations with `?` / `filter_map`.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        Self::new(row, col).ok()
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// All 64 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Stable identity of a piece for the lifetime of a game. Presentation
/// layers key their sprites on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u16);

/// A chess piece sitting on (or captured from) the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    /// Kept equal to the coordinate of the cell holding the piece by
    /// [`Board::place`](crate::game_state::board::Board::place), the only
    /// writer.
    coordinate: Coordinate,
    /// `Some` for pawns, rooks and kings only.
    pub moves_count: Option<u16>,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceKind, color: Color, coordinate: Coordinate) -> Self {
        Self {
            id,
            kind,
            color,
            coordinate,
            moves_count: kind.tracks_moves().then_some(0),
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub(crate) fn relocate(&mut self, coordinate: Coordinate) {
        self.coordinate = coordinate;
    }

    #[inline]
    pub fn is_my_piece(&self, color: Color) -> bool {
        self.color == color
    }

    #[inline]
    pub fn has_never_moved(&self) -> bool {
        self.moves_count == Some(0)
    }

    /// Counts one more move for pieces that track them; others are untouched.
    pub fn record_move(&mut self) {
        if let Some(count) = self.moves_count.as_mut() {
            *count = count.saturating_add(1);
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} #{} at {}",
            self.color,
            self.kind.name(),
            self.id.0,
            self.coordinate
        )
    }
}
