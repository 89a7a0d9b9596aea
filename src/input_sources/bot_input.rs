//! Random-move bot with a minimum thinking time.
//!
//! Picks uniformly among every pseudo-legal move that passes validation.
//! The thinking delay is a monotonic-clock gate, so polling never blocks.

use std::time::{Duration, Instant};

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_logic::chess_move::Move;
use crate::game_logic::move_validation::validate_move;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::input_sources::input_events::InputEvent;
use crate::input_sources::input_source_trait::InputSource;

pub struct BotInput {
    thinking_time: Duration,
    thinking_since: Option<Instant>,
    rng: StdRng,
}

impl BotInput {
    pub fn new(thinking_time: Duration, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        Self {
            thinking_time,
            thinking_since: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Every move `color` could make right now.
    pub fn candidate_moves(board: &Board, color: Color) -> Vec<Move> {
        board
            .pieces()
            .filter(|piece| piece.is_my_piece(color))
            .flat_map(|piece| {
                piece
                    .find_available_spots(board, color, None)
                    .into_iter()
                    .map(move |spot| Move::new(piece.coordinate(), spot))
            })
            .filter_map(|proposed| validate_move(board, color, &proposed).ok())
            .collect()
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking_since.is_some()
    }
}

impl InputSource for BotInput {
    fn name(&self) -> &str {
        "random bot"
    }

    fn get_input(&mut self, color: Color, board: &Board, _events: &[InputEvent]) -> Option<Move> {
        let Some(since) = self.thinking_since else {
            self.thinking_since = Some(Instant::now());
            return None;
        };
        if since.elapsed() < self.thinking_time {
            return None;
        }
        self.thinking_since = None;

        let candidates = Self::candidate_moves(board, color);
        candidates.as_slice().choose(&mut self.rng).copied()
    }

    fn clear_selection(&mut self) {
        self.thinking_since = None;
    }
}
