//! Uniform-random move engine.
//!
//! Selects uniformly from legal moves; primarily used for diagnostics and
//! integration testing, and as the default "best move" picker.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_description::Move;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "QuinceChess Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Option<Move> {
        let legal = self.move_generator.generate_legal_moves(game_state);
        let mut rng = rand::rng();
        legal.as_slice().choose(&mut rng).map(|generated| generated.mv)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::game_state::GameState;

    #[test]
    fn chooses_a_legal_move_from_the_starting_position() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::new();

        let chosen = engine.choose_move(&game).expect("startpos should have moves");
        assert!(game.legal_moves().contains(&chosen));
    }

    #[test]
    fn reports_its_name_through_the_trait() {
        let engine = RandomEngine::new();
        assert_eq!(engine.name(), "QuinceChess Random");
    }

    #[test]
    fn returns_none_when_no_legal_move_exists() {
        // Stalemate: the side to move has nothing.
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("position should parse");
        let mut engine = RandomEngine::new();
        assert!(engine.choose_move(&game).is_none());
    }
}
