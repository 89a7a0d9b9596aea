//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the
//! self-play binary. Row 0 is printed first, matching the board's top-down
//! row convention, and the column indices run along the edges.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Coordinate, PieceKind};

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..BOARD_SIZE as u8 {
        out.push(char::from(b'0' + row));
        out.push(' ');

        for col in 0..BOARD_SIZE as u8 {
            match board.piece_at(Coordinate::ALL[row as usize * BOARD_SIZE + col as usize]) {
                Some(piece) => out.push(piece_to_unicode(piece.color, piece.kind)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row));
        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

pub fn piece_to_unicode(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board::Board;

    #[test]
    fn starting_board_renders_black_on_top() {
        let text = render_board(&Board::new_game());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "0 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 0");
        assert_eq!(lines[4], "3 · · · · · · · · 3");
        assert_eq!(lines[8], "7 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 7");
    }
}
