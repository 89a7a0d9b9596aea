//! Memoized available-spot lookups.
//!
//! Entries are tagged with the board version they were computed against.
//! Any board mutation bumps the version, so an entry from an older board is
//! dropped on lookup and recomputed.

use std::collections::HashMap;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coordinate};
use crate::moves::available_spot::AvailableSpot;
use crate::moves::piece_moves::calculate_moves;

type SpotKey = (Coordinate, Color, bool);

#[derive(Debug, Default)]
pub struct SpotCache {
    entries: HashMap<SpotKey, (u64, Vec<AvailableSpot>)>,
    hits: u64,
    misses: u64,
}

impl SpotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spots for the piece standing on `coordinate`; empty when the cell is
    /// empty.
    pub fn spots_for(
        &mut self,
        board: &Board,
        coordinate: Coordinate,
        color: Color,
        opponent_perspective: bool,
    ) -> &[AvailableSpot] {
        let key = (coordinate, color, opponent_perspective);
        let version = board.version();

        let fresh = self
            .entries
            .get(&key)
            .is_some_and(|(cached_version, _)| *cached_version == version);
        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.entries.remove(&key);
            let spots = board
                .piece_at(coordinate)
                .map(|piece| calculate_moves(piece, board, color, coordinate, opponent_perspective))
                .unwrap_or_default();
            self.entries.insert(key, (version, spots));
        }

        self.entries
            .get(&key)
            .map(|(_, spots)| spots.as_slice())
            .unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
