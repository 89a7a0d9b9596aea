//! Helpers shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coordinate, Piece};
use crate::moves::available_spot::AvailableSpot;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Walks one ray from `from` (exclusive), pushing empty cells and the first
/// occupied cell when it holds an opposing piece. The ray is complete at the
/// first blocker, which is returned so callers can inspect it.
pub fn trace_ray<'a>(
    board: &'a Board,
    from: Coordinate,
    d_row: i8,
    d_col: i8,
    color: Color,
    out: &mut Vec<AvailableSpot>,
) -> Option<&'a Piece> {
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        match board.piece_at(next) {
            None => out.push(AvailableSpot::regular(next)),
            Some(blocker) => {
                if !blocker.is_my_piece(color) {
                    out.push(AvailableSpot::regular(next));
                }
                return Some(blocker);
            }
        }
        current = next;
    }
    None
}

/// Pushes each in-bounds offset that is empty or holds an opposing piece.
pub fn push_steps(
    board: &Board,
    from: Coordinate,
    offsets: &[(i8, i8)],
    color: Color,
    out: &mut Vec<AvailableSpot>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.piece_at(to).map_or(true, |p| !p.is_my_piece(color)) {
            out.push(AvailableSpot::regular(to));
        }
    }
}
