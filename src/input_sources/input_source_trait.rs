//! Seam between the turn engine and whatever produces moves.
//!
//! Sources are polled once per tick and must not block: `None` means "no
//! complete move yet", and the engine asks again next tick.

use crate::game_logic::chess_move::Move;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::input_sources::input_events::InputEvent;

pub trait InputSource {
    fn name(&self) -> &str;

    fn get_input(&mut self, color: Color, board: &Board, events: &[InputEvent]) -> Option<Move>;

    /// Discards partial input. Sources without state keep the default.
    fn clear_selection(&mut self) {}
}
