//! FEN piece-placement parser.
//!
//! Only the first FEN field is read. Rows are consumed top to bottom, so the
//! first segment fills row 0 (Black's back rank in the starting position).
//! Pieces receive ids in row-major order and start with unmoved counters.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Coordinate, Piece, PieceId, PieceKind};

pub fn parse_placement(placement: &str) -> Result<Board, ChessErrors> {
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(ChessErrors::InvalidPlacement(format!(
            "expected {BOARD_SIZE} rows, found {} in '{placement}'",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    let mut next_id: u16 = 0;

    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=BOARD_SIZE as u32).contains(&empty_count) {
                    return Err(ChessErrors::InvalidPlacement(format!(
                        "invalid empty-cell count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch).ok_or_else(|| {
                ChessErrors::InvalidPlacement(format!("invalid piece character '{ch}'"))
            })?;

            if col >= BOARD_SIZE {
                return Err(ChessErrors::InvalidPlacement(format!(
                    "row {row} has too many cells"
                )));
            }

            let coordinate = Coordinate::new(row as i16, col as i16)?;
            board.place(Piece::new(PieceId(next_id), kind, color, coordinate), coordinate);
            next_id += 1;
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(ChessErrors::InvalidPlacement(format!(
                "row {row} does not sum to {BOARD_SIZE} cells"
            )));
        }
    }

    Ok(board)
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
