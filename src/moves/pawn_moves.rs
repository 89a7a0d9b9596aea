//! Pawn move generation: single and double advances, diagonal captures,
//! en passant and promotion annotation.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{en_passant_row, pawn_home_row, promotion_row};
use crate::game_state::chess_types::{Color, Coordinate, PieceKind};
use crate::moves::available_spot::AvailableSpot;

/// Forward step of a pawn seen from `color`'s side; flipped when asking how
/// an opponent's pawn on the same square would move.
#[inline]
pub fn pawn_direction(color: Color, opponent_perspective: bool) -> i8 {
    if opponent_perspective {
        -color.forward()
    } else {
        color.forward()
    }
}

pub fn generate_pawn_moves(
    board: &Board,
    color: Color,
    from: Coordinate,
    opponent_perspective: bool,
    out: &mut Vec<AvailableSpot>,
) {
    let forward = pawn_direction(color, opponent_perspective);
    let last_row = promotion_row(forward);
    let advance_to = |to: Coordinate| {
        if to.row() == last_row {
            AvailableSpot::promotion(to)
        } else {
            AvailableSpot::regular(to)
        }
    };

    // normal moves (either up or down)
    if let Some(one_step) = from.offset(forward, 0) {
        if board.cell(one_step).is_empty() {
            out.push(advance_to(one_step));

            if from.row() == pawn_home_row(forward) {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.cell(two_step).is_empty() {
                        out.push(AvailableSpot::regular(two_step));
                    }
                }
            }
        }
    }

    // diagonal captures
    for d_col in [-1i8, 1] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if board.piece_at(to).is_some_and(|p| !p.is_my_piece(color)) {
            out.push(advance_to(to));
        }
    }

    if from.row() != en_passant_row(forward) {
        return;
    }
    for d_col in [-1i8, 1] {
        let Some(beside) = from.offset(0, d_col) else {
            continue;
        };
        let Some(victim) = board.piece_at(beside) else {
            continue;
        };
        let just_double_stepped =
            victim.moves_count == Some(1) && board.last_double_step() == Some(beside);
        if victim.kind != PieceKind::Pawn || victim.is_my_piece(color) || !just_double_stepped {
            continue;
        }
        if let Some(to) = from.offset(forward, d_col) {
            if board.cell(to).is_empty() {
                out.push(AvailableSpot::en_passant(to, beside));
            }
        }
    }
}
