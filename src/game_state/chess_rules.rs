//! Canonical chess-rule constants.
//!
//! Rows are counted from the top of the board: row 0 holds Black's back
//! rank and row 7 holds White's.

/// Each chess board has 8 cells vertically and horizontally.
pub const BOARD_SIZE: usize = 8;

/// Standard starting position as a FEN piece-placement field, row 0 first.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Row a pawn advancing with the given forward step starts on; only from
/// here may it advance two squares.
#[inline]
pub const fn pawn_home_row(forward: i8) -> u8 {
    if forward < 0 {
        6
    } else {
        1
    }
}

/// Row a pawn must stand on to capture en passant: the row an opposing pawn
/// lands on after its double step.
#[inline]
pub const fn en_passant_row(forward: i8) -> u8 {
    if forward < 0 {
        3
    } else {
        4
    }
}

/// Last row reachable by a pawn advancing with the given forward step.
#[inline]
pub const fn promotion_row(forward: i8) -> u8 {
    if forward < 0 {
        0
    } else {
        (BOARD_SIZE - 1) as u8
    }
}
