//! Move-selection abstraction.
//!
//! Any strategy that can pick one legal move (or none, when the game is
//! over) sits behind this trait so callers never depend on how the choice
//! is made.

use crate::game_state::game_state::GameState;
use crate::moves::move_description::Move;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Return one legal move for the side to move, or `None` if no legal
    /// move exists.
    fn choose_move(&mut self, game_state: &GameState) -> Option<Move>;
}
