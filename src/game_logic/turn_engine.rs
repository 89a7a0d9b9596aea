//! Turn state machine.
//!
//! One call to [`GameLogic::process_input`] per host tick: the active
//! player's input source is polled, a complete move is validated against
//! the generated spots, executed on the board, recorded, and the turn
//! passes to the other side. Incomplete or rejected input leaves the game
//! exactly as it was.
//!
//! Progress is reported through an engine log of `info string ...` lines
//! that the host drains with [`GameLogic::pop_next_string_to_log`]. The log
//! keeps at most [`MAX_LOG_LINES`] undrained lines; older ones are dropped
//! first when a host never drains it.

use std::collections::VecDeque;

use chrono::Local;

use crate::chess_errors::ChessErrors;
use crate::game_logic::chess_move::{Move, MoveRecord};
use crate::game_logic::game_config::GameConfig;
use crate::game_logic::move_apply::apply_move;
use crate::game_logic::move_validation::validate_move;
use crate::game_logic::player::Player;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coordinate};
use crate::input_sources::input_events::InputEvent;
use crate::moves::available_spot::AvailableSpot;
use crate::moves::spot_cache::SpotCache;

pub const MAX_LOG_LINES: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingInput(Color),
    Validating(Color),
    Executing(Color),
}

impl TurnState {
    pub fn color(self) -> Color {
        match self {
            TurnState::AwaitingInput(color)
            | TurnState::Validating(color)
            | TurnState::Executing(color) => color,
        }
    }
}

pub struct GameLogic {
    board: Board,
    /// Indexed by `Color::index`.
    players: [Player; 2],
    state: TurnState,
    config: GameConfig,
    spot_cache: SpotCache,
    ply: u32,
    last_move: Option<Move>,
    string_log: VecDeque<String>,
}

impl GameLogic {
    /// White moves first regardless of argument order.
    pub fn new(
        board: Board,
        player1: Player,
        player2: Player,
        config: GameConfig,
    ) -> Result<Self, ChessErrors> {
        if player1.color() == player2.color() {
            return Err(ChessErrors::DuplicatePlayerColor(player1.color()));
        }
        let players = if player1.color() == Color::White {
            [player1, player2]
        } else {
            [player2, player1]
        };

        let mut game = Self {
            board,
            players,
            state: TurnState::AwaitingInput(Color::White),
            config,
            spot_cache: SpotCache::new(),
            ply: 0,
            last_move: None,
            string_log: VecDeque::new(),
        };
        game.log(format!(
            "new game white={} ({}) black={} ({}) promotion={:?}",
            game.players[0].name(),
            game.players[0].input_source_name(),
            game.players[1].name(),
            game.players[1].input_source_name(),
            game.config.promotion_policy
        ));
        Ok(game)
    }

    /// Advances the game by at most one move.
    ///
    /// Returns `Ok(None)` while input is incomplete or was rejected, and the
    /// executed move otherwise. Errors leave the board and turn untouched.
    pub fn process_input(&mut self, events: &[InputEvent]) -> Result<Option<Move>, ChessErrors> {
        let color = self.state.color();
        let Some(proposed) = self.players[color.index()].get_input(&self.board, events) else {
            return Ok(None);
        };

        self.state = TurnState::Validating(color);
        let chess_move = match validate_move(&self.board, color, &proposed) {
            Ok(chess_move) => chess_move,
            Err(rejection) => {
                self.state = TurnState::AwaitingInput(color);
                if self.config.verbose {
                    self.log(format!("{color} move {proposed} rejected: {rejection}"));
                }
                return Ok(None);
            }
        };

        self.state = TurnState::Executing(color);
        let applied = match apply_move(&mut self.board, &chess_move, self.config.promotion_policy) {
            Ok(applied) => applied,
            Err(err) => {
                self.state = TurnState::AwaitingInput(color);
                self.log(format!("{color} move {chess_move} failed: {err}"));
                return Err(err);
            }
        };

        self.ply += 1;
        let record = MoveRecord {
            chess_move,
            piece_kind: applied.piece_kind,
            captured: applied.captured,
            promoted_to: applied.promoted_to,
            played_at: Local::now(),
            ply: self.ply,
        };
        self.log(format!("{color} {record}"));
        self.players[color.index()].record_move(record);
        self.last_move = Some(chess_move);

        // Highlights or half-made selections refer to the old position.
        for player in &mut self.players {
            player.clear_selection();
        }

        self.state = TurnState::AwaitingInput(color.opposite());
        Ok(Some(chess_move))
    }

    /// Spots of the piece on `coordinate` from its owner's side, for
    /// highlighting. Empty for an empty cell.
    pub fn available_spots_at(&mut self, coordinate: Coordinate) -> &[AvailableSpot] {
        let Some(color) = self.board.piece_at(coordinate).map(|piece| piece.color) else {
            return &[];
        };
        self.spot_cache.spots_for(&self.board, coordinate, color, false)
    }

    pub fn clear_selection(&mut self) {
        for player in &mut self.players {
            player.clear_selection();
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.state.color().index()]
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    /// White first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of moves executed so far.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn pop_next_string_to_log(&mut self) -> Option<String> {
        self.string_log.pop_front()
    }

    fn log(&mut self, message: String) {
        if self.string_log.len() == MAX_LOG_LINES {
            self.string_log.pop_front();
        }
        self.string_log.push_back(format!(
            "info string {} {}",
            Local::now().format("%H:%M:%S%.3f"),
            message
        ));
    }
}
