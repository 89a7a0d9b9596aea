//! Crate root module declarations for the chess_duel engine.
//!
//! This file exposes the board model, per-piece move generation, the turn
//! engine, input sources and utility helpers so the self-play binary,
//! benches and external hosts can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod available_spot;
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod spot_cache;
}

pub mod game_logic {
    pub mod chess_move;
    pub mod game_config;
    pub mod move_apply;
    pub mod move_validation;
    pub mod player;
    pub mod turn_engine;
}

pub mod input_sources {
    pub mod bot_input;
    pub mod human_input;
    pub mod input_events;
    pub mod input_source_trait;
}

pub mod utils {
    pub mod fen_parser;
    pub mod render_game_state;
}
