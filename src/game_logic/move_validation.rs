//! Checks a proposed move against the active player's pieces and the
//! generated spots of the moving piece.

use std::fmt;

use crate::game_logic::chess_move::Move;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coordinate, PieceKind};

/// Why a proposed move was turned down. Rejections are part of normal play
/// and leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    EmptySource(Coordinate),
    NotOwnPiece(Coordinate),
    FriendlyFire(Coordinate),
    OpponentKing(Coordinate),
    NotAvailable {
        source: Coordinate,
        destination: Coordinate,
    },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::EmptySource(c) => write!(f, "no piece on {c}"),
            MoveRejection::NotOwnPiece(c) => write!(f, "piece on {c} belongs to the opponent"),
            MoveRejection::FriendlyFire(c) => write!(f, "{c} holds an own piece"),
            MoveRejection::OpponentKing(c) => write!(f, "{c} holds the opponent's king"),
            MoveRejection::NotAvailable {
                source,
                destination,
            } => write!(f, "{destination} is not reachable from {source}"),
        }
    }
}

/// Validates `proposed` for `color` and returns the move carrying the
/// generated spot, so special-move metadata always comes from the
/// generator and never from the caller.
pub fn validate_move(board: &Board, color: Color, proposed: &Move) -> Result<Move, MoveRejection> {
    let source = proposed.source;
    let destination = proposed.target();

    let piece = board
        .piece_at(source)
        .ok_or(MoveRejection::EmptySource(source))?;
    if !piece.is_my_piece(color) {
        return Err(MoveRejection::NotOwnPiece(source));
    }

    let spots = piece.find_available_spots(board, color, None);
    let generated = spots
        .iter()
        .find(|spot| **spot == proposed.destination)
        .or_else(|| spots.iter().find(|spot| spot.coordinate == destination))
        .copied();

    if let Some(occupant) = board.piece_at(destination) {
        let castling = generated.is_some_and(|spot| spot.is_castling());
        if occupant.is_my_piece(color) && !castling {
            return Err(MoveRejection::FriendlyFire(destination));
        }
        if !occupant.is_my_piece(color) && occupant.kind == PieceKind::King {
            return Err(MoveRejection::OpponentKing(destination));
        }
    }

    generated
        .map(|spot| Move::new(source, spot))
        .ok_or(MoveRejection::NotAvailable {
            source,
            destination,
        })
}

#[cfg(test)]
mod tests {
    use super::{validate_move, MoveRejection};
    use crate::game_logic::chess_move::Move;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coordinate};
    use crate::moves::available_spot::AvailableSpot;

    fn at(row: i16, col: i16) -> Coordinate {
        Coordinate::new(row, col).expect("test coordinate on the board")
    }

    #[test]
    fn accepts_generated_moves() {
        let board = Board::new_game();
        let accepted = validate_move(&board, Color::White, &Move::between(at(6, 4), at(4, 4)));
        assert_eq!(accepted, Ok(Move::between(at(6, 4), at(4, 4))));
    }

    #[test]
    fn rejects_wrong_owner_and_empty_source() {
        let board = Board::new_game();
        assert_eq!(
            validate_move(&board, Color::White, &Move::between(at(1, 4), at(2, 4))),
            Err(MoveRejection::NotOwnPiece(at(1, 4)))
        );
        assert_eq!(
            validate_move(&board, Color::White, &Move::between(at(4, 4), at(3, 4))),
            Err(MoveRejection::EmptySource(at(4, 4)))
        );
    }

    #[test]
    fn rejects_friendly_fire_and_unreachable_cells() {
        let board = Board::new_game();
        assert_eq!(
            validate_move(&board, Color::White, &Move::between(at(7, 3), at(6, 3))),
            Err(MoveRejection::FriendlyFire(at(6, 3)))
        );
        assert_eq!(
            validate_move(&board, Color::White, &Move::between(at(6, 4), at(3, 4))),
            Err(MoveRejection::NotAvailable {
                source: at(6, 4),
                destination: at(3, 4),
            })
        );
    }

    #[test]
    fn opponent_king_is_never_a_capture_target() {
        // White rook can reach the black king along row 0.
        let board = Board::from_placement("R3k3/8/8/8/8/8/8/8").unwrap();
        assert_eq!(
            validate_move(&board, Color::White, &Move::between(at(0, 0), at(0, 4))),
            Err(MoveRejection::OpponentKing(at(0, 4)))
        );
    }

    #[test]
    fn castling_onto_own_king_uses_the_generated_spot() {
        let board = Board::from_placement("r3k3/8/8/8/8/8/8/8").unwrap();
        let accepted = validate_move(&board, Color::Black, &Move::between(at(0, 0), at(0, 4)))
            .expect("castling is available");
        assert!(accepted.destination.is_castling());
        assert_eq!(accepted.destination.target_cell(), Some(at(0, 4)));
    }

    #[test]
    fn forged_special_flags_are_replaced() {
        let board = Board::new_game();
        let forged = Move::new(at(6, 4), AvailableSpot::promotion(at(5, 4)));
        let accepted = validate_move(&board, Color::White, &forged).unwrap();
        assert_eq!(accepted.destination, AvailableSpot::regular(at(5, 4)));
    }
}
