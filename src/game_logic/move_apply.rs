//! Board mutation for validated moves, including the side effects of
//! en passant, castling and promotion.

use crate::chess_errors::ChessErrors;
use crate::game_logic::chess_move::Move;
use crate::game_logic::game_config::PromotionPolicy;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::moves::available_spot::SpotKind;

/// What executing a move did besides relocating the mover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub piece_kind: PieceKind,
    pub captured: Option<Piece>,
    pub promoted_to: Option<PieceKind>,
}

/// Executes `chess_move` on `board`. The move must come from
/// `validate_move`; eligibility of special moves is not re-checked.
///
/// Nothing is mutated when an error is returned.
pub fn apply_move(
    board: &mut Board,
    chess_move: &Move,
    promotion_policy: PromotionPolicy,
) -> Result<AppliedMove, ChessErrors> {
    let source = chess_move.source;
    let destination = chess_move.target();

    if board.piece_at(source).is_none() {
        return Err(ChessErrors::EmptySourceCell(source));
    }
    if chess_move.destination.is_promotion() && promotion_policy == PromotionPolicy::Unsupported {
        return Err(ChessErrors::PromotionNotSupported(destination));
    }
    if let SpotKind::Castling { target_cell, .. } = chess_move.destination.kind {
        if board.piece_at(target_cell).is_none() {
            return Err(ChessErrors::EmptySourceCell(target_cell));
        }
    }

    let Some(mut piece) = board.remove(source) else {
        return Err(ChessErrors::EmptySourceCell(source));
    };
    // Counters feed next turn's castling and en passant checks.
    piece.record_move();
    let piece_kind = piece.kind;

    let mut applied = AppliedMove {
        piece_kind,
        captured: None,
        promoted_to: None,
    };

    match chess_move.destination.kind {
        SpotKind::Regular => {
            applied.captured = board.remove(destination);
            board.place(piece, destination);
        }
        SpotKind::EnPassant { target_cell } => {
            applied.captured = board.remove(target_cell);
            board.place(piece, destination);
        }
        SpotKind::Castling {
            target_cell,
            details,
        } => {
            if let Some(mut king) = board.remove(target_cell) {
                king.record_move();
                board.place(king, details.king_destination);
            }
            board.place(piece, details.rook_destination);
        }
        SpotKind::Promotion => {
            applied.captured = board.remove(destination);
            piece.kind = PieceKind::Queen;
            piece.moves_count = None;
            applied.promoted_to = Some(PieceKind::Queen);
            board.place(piece, destination);
        }
    }

    let double_step = piece_kind == PieceKind::Pawn && source.row().abs_diff(destination.row()) == 2;
    board.set_last_double_step(double_step.then_some(destination));

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::{apply_move, AppliedMove};
    use crate::chess_errors::ChessErrors;
    use crate::game_logic::chess_move::Move;
    use crate::game_logic::game_config::PromotionPolicy;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Coordinate, PieceKind};
    use crate::moves::available_spot::AvailableSpot;

    fn at(row: i16, col: i16) -> Coordinate {
        Coordinate::new(row, col).expect("test coordinate on the board")
    }

    fn generated(board: &Board, from: Coordinate, to: Coordinate) -> Move {
        let piece = board.piece_at(from).unwrap();
        let spot = piece
            .find_available_spots(board, piece.color, None)
            .into_iter()
            .find(|s| s.coordinate == to)
            .expect("destination is generated");
        Move::new(from, spot)
    }

    #[test]
    fn double_push_sets_counter_and_last_double_step() {
        let mut board = Board::new_game();
        let mv = generated(&board, at(6, 4), at(4, 4));
        apply_move(&mut board, &mv, PromotionPolicy::AutoQueen).unwrap();

        let pawn = board.piece_at(at(4, 4)).unwrap();
        assert_eq!(pawn.moves_count, Some(1));
        assert_eq!(pawn.coordinate(), at(4, 4));
        assert!(board.piece_at(at(6, 4)).is_none());
        assert_eq!(board.last_double_step(), Some(at(4, 4)));

        let mv = generated(&board, at(1, 0), at(2, 0));
        apply_move(&mut board, &mv, PromotionPolicy::AutoQueen).unwrap();
        assert_eq!(board.last_double_step(), None);
    }

    #[test]
    fn regular_capture_returns_the_victim() {
        let mut board = Board::from_placement("8/8/8/3p4/4P3/8/8/8").unwrap();
        let mv = generated(&board, at(4, 4), at(3, 3));
        let applied = apply_move(&mut board, &mv, PromotionPolicy::AutoQueen).unwrap();

        let captured = applied.captured.expect("black pawn captured");
        assert_eq!(captured.kind, PieceKind::Pawn);
        assert_eq!(captured.coordinate(), at(3, 3));
        assert_eq!(board.get_filled_cells().len(), 1);
    }

    #[test]
    fn en_passant_removes_the_adjacent_pawn() {
        let mut board = Board::from_placement("8/8/8/3pP3/8/8/8/8").unwrap();
        board.record_move_at(at(3, 3));
        board.set_last_double_step(Some(at(3, 3)));

        let mv = Move::new(at(3, 4), AvailableSpot::en_passant(at(2, 3), at(3, 3)));
        let applied = apply_move(&mut board, &mv, PromotionPolicy::AutoQueen).unwrap();

        assert_eq!(applied.captured.map(|p| p.coordinate()), Some(at(3, 3)));
        assert!(board.piece_at(at(3, 3)).is_none());
        assert!(board.piece_at(at(3, 4)).is_none());
        assert_eq!(board.piece_at(at(2, 3)).map(|p| p.kind), Some(PieceKind::Pawn));
    }

    #[test]
    fn castling_moves_both_pieces() {
        let mut board = Board::from_placement("r3k3/8/8/8/8/8/8/8").unwrap();
        let mv = generated(&board, at(0, 0), at(0, 4));
        assert!(mv.destination.is_castling());
        let applied = apply_move(&mut board, &mv, PromotionPolicy::AutoQueen).unwrap();

        assert_eq!(applied.captured, None);
        let king = board.piece_at(at(0, 3)).expect("king moved");
        let rook = board.piece_at(at(0, 2)).expect("rook moved");
        assert_eq!((king.kind, king.moves_count), (PieceKind::King, Some(1)));
        assert_eq!((rook.kind, rook.moves_count), (PieceKind::Rook, Some(1)));
        assert!(board.piece_at(at(0, 0)).is_none());
        assert!(board.piece_at(at(0, 4)).is_none());
    }

    #[test]
    fn promotion_follows_the_policy() {
        let board = Board::from_placement("8/P7/8/8/8/8/8/8").unwrap();
        let mv = generated(&board, at(1, 0), at(0, 0));
        assert!(mv.destination.is_promotion());

        let mut strict = board.copy();
        assert_eq!(
            apply_move(&mut strict, &mv, PromotionPolicy::Unsupported),
            Err(ChessErrors::PromotionNotSupported(at(0, 0)))
        );
        assert_eq!(strict, board);

        let mut lenient = board.copy();
        let id = board.piece_at(at(1, 0)).unwrap().id;
        let applied = apply_move(&mut lenient, &mv, PromotionPolicy::AutoQueen).unwrap();
        assert_eq!(
            applied,
            AppliedMove {
                piece_kind: PieceKind::Pawn,
                captured: None,
                promoted_to: Some(PieceKind::Queen),
            }
        );
        let queen = lenient.piece_at(at(0, 0)).unwrap();
        assert_eq!((queen.kind, queen.id, queen.moves_count), (PieceKind::Queen, id, None));
    }

    #[test]
    fn empty_source_is_reported() {
        let mut board = Board::empty();
        assert_eq!(
            apply_move(&mut board, &Move::between(at(4, 4), at(3, 4)), PromotionPolicy::AutoQueen),
            Err(ChessErrors::EmptySourceCell(at(4, 4)))
        );
    }
}
