use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coordinate};
use crate::moves::available_spot::AvailableSpot;
use crate::moves::move_shared::push_steps;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The eight neighbouring cells not held by an own piece. Castling is
/// generated from the rook's side, see `rook_moves`.
pub fn generate_king_moves(
    board: &Board,
    color: Color,
    from: Coordinate,
    out: &mut Vec<AvailableSpot>,
) {
    push_steps(board, from, &KING_OFFSETS, color, out);
}
