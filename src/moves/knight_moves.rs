use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coordinate};
use crate::moves::available_spot::AvailableSpot;
use crate::moves::move_shared::push_steps;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

pub fn generate_knight_moves(
    board: &Board,
    color: Color,
    from: Coordinate,
    out: &mut Vec<AvailableSpot>,
) {
    push_steps(board, from, &KNIGHT_OFFSETS, color, out);
}
