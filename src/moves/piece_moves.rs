//! Per-kind dispatch into the move generators.
//!
//! `Piece::find_available_spots` is the entry point the rest of the crate
//! uses; `calculate_moves` lets callers ask about a hypothetical square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coordinate, Piece, PieceKind};
use crate::moves::available_spot::AvailableSpot;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Candidate destinations for `piece` standing on `coordinate`, with cells
/// holding `color` treated as friendly. `opponent_perspective` only changes
/// the pawn's forward direction.
pub fn calculate_moves(
    piece: &Piece,
    board: &Board,
    color: Color,
    coordinate: Coordinate,
    opponent_perspective: bool,
) -> Vec<AvailableSpot> {
    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => {
            generate_pawn_moves(board, color, coordinate, opponent_perspective, &mut out)
        }
        PieceKind::Rook => generate_rook_moves(board, piece, color, coordinate, &mut out),
        PieceKind::Knight => generate_knight_moves(board, color, coordinate, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, color, coordinate, &mut out),
        PieceKind::Queen => generate_queen_moves(board, color, coordinate, &mut out),
        PieceKind::King => generate_king_moves(board, color, coordinate, &mut out),
    }
    out
}

impl Piece {
    /// Spots reachable from `coordinate`, or from the piece's own cell when
    /// `None` is given.
    pub fn find_available_spots(
        &self,
        board: &Board,
        color: Color,
        coordinate: Option<Coordinate>,
    ) -> Vec<AvailableSpot> {
        calculate_moves(self, board, color, coordinate.unwrap_or(self.coordinate()), false)
    }

    pub fn find_available_spots_as_opponent(
        &self,
        board: &Board,
        color: Color,
        coordinate: Option<Coordinate>,
    ) -> Vec<AvailableSpot> {
        calculate_moves(self, board, color, coordinate.unwrap_or(self.coordinate()), true)
    }
}
