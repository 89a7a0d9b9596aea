//! Bishop move generation over the four diagonals. Each diagonal is done
//! once it meets a piece.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coordinate};
use crate::moves::available_spot::AvailableSpot;
use crate::moves::move_shared::{trace_ray, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(
    board: &Board,
    color: Color,
    from: Coordinate,
    out: &mut Vec<AvailableSpot>,
) {
    for (d_row, d_col) in DIAGONAL_DIRECTIONS {
        trace_ray(board, from, d_row, d_col, color, out);
    }
}
