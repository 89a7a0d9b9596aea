//! A seat at the board: name, color, captured pieces, move history and the
//! input source that produces its moves.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_logic::chess_move::{Move, MoveRecord};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece};
use crate::input_sources::input_events::InputEvent;
use crate::input_sources::input_source_trait::InputSource;

pub struct Player {
    name: String,
    color: Color,
    captured: Vec<Piece>,
    moves: Vec<MoveRecord>,
    input_source: Box<dyn InputSource>,
}

impl Player {
    /// `color` must be exactly `"white"` or `"black"`.
    pub fn new(
        name: impl Into<String>,
        color: &str,
        input_source: Box<dyn InputSource>,
    ) -> Result<Self, ChessErrors> {
        Ok(Self {
            name: name.into(),
            color: color.parse()?,
            captured: Vec::new(),
            moves: Vec::new(),
            input_source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Opponent pieces this player has taken, in capture order.
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn input_source_name(&self) -> &str {
        self.input_source.name()
    }

    /// Polls the input source for a tentative move.
    pub fn get_input(&mut self, board: &Board, events: &[InputEvent]) -> Option<Move> {
        self.input_source.get_input(self.color, board, events)
    }

    pub fn clear_selection(&mut self) {
        self.input_source.clear_selection();
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        if let Some(piece) = &record.captured {
            self.captured.push(piece.clone());
        }
        self.moves.push(record);
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("color", &self.color)
            .field("captured", &self.captured.len())
            .field("moves", &self.moves.len())
            .field("input_source", &self.input_source.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Player;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Color;
    use crate::input_sources::bot_input::BotInput;
    use std::time::Duration;

    fn bot() -> Box<BotInput> {
        Box::new(BotInput::new(Duration::ZERO, Some(3)))
    }

    #[test]
    fn color_must_be_white_or_black() {
        let player = Player::new("Ann", "black", bot()).unwrap();
        assert_eq!(player.color(), Color::Black);
        assert_eq!(player.name(), "Ann");
        assert!(player.captured().is_empty());

        for bad in ["red", "White", ""] {
            assert_eq!(
                Player::new("Bo", bad, bot()).err(),
                Some(ChessErrors::InvalidPlayerColor(bad.to_owned()))
            );
        }
    }
}
