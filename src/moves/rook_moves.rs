//! Rook move generation, including castling detection.
//!
//! Castling is discovered from the rook's side: when the first piece met
//! along a row is the rook's own unmoved king, and the rook is unmoved too,
//! a castling spot is emitted on the king's cell. Both destinations are
//! counted from the king toward the rook: the king steps one cell, the rook
//! lands two cells from the king's start. The rook's landing cell must lie
//! strictly between the two pieces, so they need at least two empty cells
//! between them.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coordinate, Piece, PieceKind};
use crate::moves::available_spot::{AvailableSpot, CastlingDetails};
use crate::moves::move_shared::{trace_ray, ORTHOGONAL_DIRECTIONS};

pub fn generate_rook_moves(
    board: &Board,
    rook: &Piece,
    color: Color,
    from: Coordinate,
    out: &mut Vec<AvailableSpot>,
) {
    for (d_row, d_col) in ORTHOGONAL_DIRECTIONS {
        let Some(blocker) = trace_ray(board, from, d_row, d_col, color, out) else {
            continue;
        };
        if d_row != 0 {
            continue;
        }
        if let Some(spot) = castling_spot(rook, blocker, color, from, d_col) {
            out.push(spot);
        }
    }
}

fn castling_spot(
    rook: &Piece,
    king: &Piece,
    color: Color,
    from: Coordinate,
    d_col: i8,
) -> Option<AvailableSpot> {
    let eligible = king.kind == PieceKind::King
        && king.is_my_piece(color)
        && king.has_never_moved()
        && rook.has_never_moved();
    if !eligible {
        return None;
    }

    let king_at = king.coordinate();
    let details = CastlingDetails {
        rook_destination: king_at.offset(0, -2 * d_col)?,
        king_destination: king_at.offset(0, -d_col)?,
    };
    let gap = from.col().abs_diff(king_at.col());
    if details.rook_destination.col().abs_diff(king_at.col()) >= gap {
        return None;
    }
    Some(AvailableSpot::castling(king_at, king_at, details))
}
