use crate::game_state::game_state::GameState;
use crate::moves::move_description::Move;

/// A legal move together with the position it produces. Keeping the applied
/// state lets perft and status recomputation reuse the legality filter's
/// work instead of re-applying the move.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub game_after_move: GameState,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove>;
}
