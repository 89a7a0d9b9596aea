use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coordinate};
use crate::moves::available_spot::AvailableSpot;
use crate::moves::move_shared::{trace_ray, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

/// Rook and bishop rays combined. Queens never castle.
pub fn generate_queen_moves(
    board: &Board,
    color: Color,
    from: Coordinate,
    out: &mut Vec<AvailableSpot>,
) {
    for (d_row, d_col) in ORTHOGONAL_DIRECTIONS.into_iter().chain(DIAGONAL_DIRECTIONS) {
        trace_ray(board, from, d_row, d_col, color, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coordinate};

    #[test]
    fn queen_on_open_board_reaches_twenty_seven_cells() {
        let mut out = Vec::new();
        generate_queen_moves(&Board::empty(), Color::White, Coordinate::new(4, 3).unwrap(), &mut out);
        assert_eq!(out.len(), 27);
    }

    #[test]
    fn queen_next_to_own_king_does_not_castle() {
        let board = Board::from_placement("q3k3/8/8/8/8/8/8/8").unwrap();
        let mut out = Vec::new();
        generate_queen_moves(&board, Color::Black, Coordinate::new(0, 0).unwrap(), &mut out);
        assert!(out.iter().all(|s| !s.is_castling()));
        assert!(out.iter().all(|s| s.coordinate != Coordinate::new(0, 4).unwrap()));
    }

    #[test]
    fn queen_rays_end_on_the_first_enemy() {
        // White queen (5,3), black pawn (5,5), black knight (3,1).
        let board = Board::from_placement("8/8/8/1n6/8/3Q1p2/8/8").unwrap();
        let mut out = Vec::new();
        generate_queen_moves(&board, Color::White, Coordinate::new(5, 3).unwrap(), &mut out);
        let coords: Vec<Coordinate> = out.iter().map(|s| s.coordinate).collect();
        let count = |row, col| {
            let target = Coordinate::new(row, col).unwrap();
            coords.iter().filter(|c| **c == target).count()
        };

        assert_eq!(count(5, 4), 1);
        assert_eq!(count(5, 5), 1);
        assert_eq!(count(5, 6), 0);
        assert_eq!(count(4, 2), 1);
        assert_eq!(count(3, 1), 1);
        assert_eq!(count(2, 0), 0);
        assert_eq!(coords.len(), 22);
    }

    #[test]
    fn queen_in_starting_position_is_boxed_in() {
        let board = Board::new_game();
        let mut out = Vec::new();
        generate_queen_moves(&board, Color::White, Coordinate::new(7, 3).unwrap(), &mut out);
        assert!(out.is_empty());
    }
}
