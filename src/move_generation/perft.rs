//! Perft: exhaustive legal-move tree walking used to validate generation
//! against published reference node counts.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();

    for generated in LegalMoveGenerator.generate_legal_moves(game_state) {
        if depth == 1 {
            // Leaf tally: count the move's own special cases.
            total.nodes += 1;
            if generated.mv.is_capture {
                total.captures += 1;
            }
            if generated.mv.is_en_passant {
                total.en_passant += 1;
            }
            if generated.mv.is_castle {
                total.castles += 1;
            }
            if generated.mv.is_promotion {
                total.promotions += 1;
            }
        } else {
            total.merge(perft(&generated.game_after_move, depth - 1));
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::game_state::GameState;

    #[test]
    fn startpos_node_counts_match_reference() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);
        assert_eq!(perft(&game, 3).nodes, 8_902);
    }

    #[test]
    fn startpos_depth_three_capture_count_matches_reference() {
        let game = GameState::new_game();
        let counts = perft(&game, 3);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.en_passant, 0);
        assert_eq!(counts.castles, 0);
    }

    #[test]
    fn rook_endgame_node_counts_match_reference() {
        let game = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1")
            .expect("position should parse");
        assert_eq!(perft(&game, 1).nodes, 14);
        assert_eq!(perft(&game, 2).nodes, 191);
        assert_eq!(perft(&game, 3).nodes, 2_812);
    }
}
