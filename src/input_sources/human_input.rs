//! Two-click move entry: the first press picks a piece, the second picks
//! one of that piece's generated destinations.

use crate::game_logic::chess_move::Move;
use crate::game_state::board::{Board, CellLayout};
use crate::game_state::chess_types::{Color, Coordinate};
use crate::input_sources::input_events::InputEvent;
use crate::input_sources::input_source_trait::InputSource;

pub struct HumanInput {
    layout: Box<dyn CellLayout>,
    selection: Option<Coordinate>,
}

impl HumanInput {
    pub fn new(layout: Box<dyn CellLayout>) -> Self {
        Self {
            layout,
            selection: None,
        }
    }

    /// Source cell picked by the first click, if any.
    pub fn selection(&self) -> Option<Coordinate> {
        self.selection
    }

    fn press(&mut self, color: Color, board: &Board, x: f32, y: f32) -> Option<Move> {
        let cell = board.get_cell_by_point(self.layout.as_ref(), x, y)?;

        let Some(source) = self.selection.take() else {
            if !cell.is_empty() {
                self.selection = Some(cell.coordinate());
            }
            return None;
        };

        // A second click on an unreachable cell drops the selection.
        let piece = board.piece_at(source)?;
        piece
            .find_available_spots(board, color, None)
            .into_iter()
            .find(|spot| spot.coordinate == cell.coordinate())
            .map(|spot| Move::new(source, spot))
    }
}

impl InputSource for HumanInput {
    fn name(&self) -> &str {
        "human"
    }

    fn get_input(&mut self, color: Color, board: &Board, events: &[InputEvent]) -> Option<Move> {
        for event in events {
            match *event {
                InputEvent::ClearSelection => self.selection = None,
                InputEvent::PointerPressed { x, y } => {
                    if let Some(chess_move) = self.press(color, board, x, y) {
                        return Some(chess_move);
                    }
                }
            }
        }
        None
    }

    fn clear_selection(&mut self) {
        self.selection = None;
    }
}
