//! Proposed and committed moves.

use std::fmt;

use chrono::{DateTime, Local};

use crate::game_state::chess_types::{Coordinate, Piece, PieceKind};
use crate::moves::available_spot::{AvailableSpot, SpotKind};

/// A source cell plus one generated destination.
///
/// For castling the source is the rook's cell and the destination is the
/// king's cell; the spot carries where both pieces end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: Coordinate,
    pub destination: AvailableSpot,
}

impl Move {
    pub fn new(source: Coordinate, destination: AvailableSpot) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Plain move to `destination`, used by input sources before the
    /// destination is matched against generated spots.
    pub fn between(source: Coordinate, destination: Coordinate) -> Self {
        Self::new(source, AvailableSpot::regular(destination))
    }

    #[inline]
    pub fn target(&self) -> Coordinate {
        self.destination.coordinate
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination.coordinate)?;
        match self.destination.kind {
            SpotKind::Regular => Ok(()),
            SpotKind::EnPassant { target_cell } => write!(f, " (en passant x{target_cell})"),
            SpotKind::Castling { details, .. } => write!(
                f,
                " (castling, king {} rook {})",
                details.king_destination, details.rook_destination
            ),
            SpotKind::Promotion => f.write_str(" (promotion)"),
        }
    }
}

/// A move as it was played, kept in the mover's history.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRecord {
    pub chess_move: Move,
    pub piece_kind: PieceKind,
    pub captured: Option<Piece>,
    pub promoted_to: Option<PieceKind>,
    pub played_at: DateTime<Local>,
    /// 1-based count of moves played in the game, both sides included.
    pub ply: u32,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ply {} {} {}", self.ply, self.piece_kind.name(), self.chess_move)?;
        if let Some(captured) = &self.captured {
            write!(f, " takes {}", captured.kind.name())?;
        }
        if let Some(kind) = self.promoted_to {
            write!(f, " promotes to {}", kind.name())?;
        }
        Ok(())
    }
}
