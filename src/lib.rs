//! Crate root module declarations for the Quince Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! engines, and utility helpers) so tests, benches, and view layers can
//! import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod attacks;
    pub mod move_description;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_moves_bishop;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_queen;
    pub mod pseudo_moves_rook;
    pub mod pseudo_moves_shared;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
