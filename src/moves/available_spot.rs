//! Output unit of move generation: a destination plus the metadata needed
//! to execute special moves.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Coordinate;

/// Where the rook and king end up after castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingDetails {
    pub rook_destination: Coordinate,
    pub king_destination: Coordinate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpotKind {
    /// A quiet move or a regular capture.
    Regular,
    /// Diagonal move onto an empty cell; `target_cell` holds the pawn that
    /// gets captured (same row as the source, adjacent column).
    EnPassant { target_cell: Coordinate },
    /// Generated for a rook; `target_cell` is its own king's cell.
    Castling {
        target_cell: Coordinate,
        details: CastlingDetails,
    },
    /// A pawn reaching the last row of its direction.
    Promotion,
}

/// Raw special-move flags, for callers that describe spots flag by flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpotFlags {
    pub is_en_passant: bool,
    pub is_castling: bool,
    pub is_promotion: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AvailableSpot {
    pub coordinate: Coordinate,
    pub kind: SpotKind,
}

impl AvailableSpot {
    #[inline]
    pub fn regular(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            kind: SpotKind::Regular,
        }
    }

    #[inline]
    pub fn en_passant(coordinate: Coordinate, target_cell: Coordinate) -> Self {
        Self {
            coordinate,
            kind: SpotKind::EnPassant { target_cell },
        }
    }

    #[inline]
    pub fn castling(coordinate: Coordinate, target_cell: Coordinate, details: CastlingDetails) -> Self {
        Self {
            coordinate,
            kind: SpotKind::Castling {
                target_cell,
                details,
            },
        }
    }

    #[inline]
    pub fn promotion(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            kind: SpotKind::Promotion,
        }
    }

    /// Builds a spot from flag form.
    ///
    /// En passant and castling need a target cell, castling also needs its
    /// details; leaving them out is a configuration error. When several flags
    /// are set the first of en passant, castling, promotion wins.
    pub fn from_flags(
        coordinate: Coordinate,
        flags: SpotFlags,
        target_cell: Option<Coordinate>,
        castling_details: Option<CastlingDetails>,
    ) -> Result<Self, ChessErrors> {
        if flags.is_en_passant || flags.is_castling {
            let target_cell = target_cell.ok_or(ChessErrors::MissingTargetCell(coordinate))?;
            if flags.is_en_passant {
                return Ok(Self::en_passant(coordinate, target_cell));
            }
            let details =
                castling_details.ok_or(ChessErrors::MissingCastlingDetails(coordinate))?;
            return Ok(Self::castling(coordinate, target_cell, details));
        }
        if flags.is_promotion {
            return Ok(Self::promotion(coordinate));
        }
        Ok(Self::regular(coordinate))
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.kind, SpotKind::EnPassant { .. })
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        matches!(self.kind, SpotKind::Castling { .. })
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self.kind, SpotKind::Promotion)
    }

    pub fn flags(&self) -> SpotFlags {
        SpotFlags {
            is_en_passant: self.is_en_passant(),
            is_castling: self.is_castling(),
            is_promotion: self.is_promotion(),
        }
    }

    pub fn target_cell(&self) -> Option<Coordinate> {
        match self.kind {
            SpotKind::EnPassant { target_cell } | SpotKind::Castling { target_cell, .. } => {
                Some(target_cell)
            }
            SpotKind::Regular | SpotKind::Promotion => None,
        }
    }

    pub fn castling_details(&self) -> Option<CastlingDetails> {
        match self.kind {
            SpotKind::Castling { details, .. } => Some(details),
            _ => None,
        }
    }
}
