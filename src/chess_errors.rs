//! Errors used throughout the chess engine.
//!
//! This module defines the canonical error type returned by board lookups,
//! game construction and move execution. The enum `ChessErrors` is used as
//! the single error type across the crate to simplify propagation and
//! matching.
//!
//! Usage guidelines:
//! - Construction-time failures (`InvalidPlayerColor`, `DuplicatePlayerColor`,
//!   `MissingTargetCell`, `InvalidPlacement`, ...) are configuration
//!   mistakes and stop the program.
//! - `PromotionNotSupported` marks a feature gap under the strict promotion
//!   policy; callers can assert on it rather than guess at a default.
//! - A rejected move attempt is *not* an error. See
//!   [`MoveRejection`](crate::game_logic::move_validation::MoveRejection).

use thiserror::Error;

use crate::game_state::chess_types::{Color, Coordinate};

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A row or column outside `0..8` was used to address a cell.
    ///
    /// Payload: the offending (row, col) pair, kept signed so that results of
    /// offset arithmetic can be reported as-is.
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfBounds { row: i16, col: i16 },

    /// A player was configured with a color other than `white` or `black`.
    #[error("player color should be either 'white' or 'black', got '{0}'")]
    InvalidPlayerColor(String),

    /// Both players of a game were given the same color.
    #[error("both players are {0}")]
    DuplicatePlayerColor(Color),

    /// An en passant or castling spot was built without the cell it acts on.
    #[error("special spot at {0} was flagged without a target cell")]
    MissingTargetCell(Coordinate),

    /// A castling spot was built without rook/king destinations.
    #[error("castling spot at {0} was flagged without castling details")]
    MissingCastlingDetails(Coordinate),

    /// A board placement string could not be interpreted.
    ///
    /// Payload: a description of the problem including the offending text.
    #[error("invalid board placement: {0}")]
    InvalidPlacement(String),

    /// Execution found no piece on the source cell of a validated move.
    #[error("no piece to move on {0}")]
    EmptySourceCell(Coordinate),

    /// A promotion was attempted while the strict promotion policy is active.
    #[error("pawn promotion on {0} is not supported yet")]
    PromotionNotSupported(Coordinate),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = ChessErrors::InvalidPlayerColor("red".to_owned());
        assert!(err.to_string().contains("'red'"));

        let err = ChessErrors::OutOfBounds { row: 8, col: -1 };
        assert_eq!(err.to_string(), "coordinate (8, -1) is outside the board");
    }
}
