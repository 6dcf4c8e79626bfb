//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, applies each candidate
//! to a scratch copy, and filters out moves that leave the mover's own king
//! attacked.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::move_generation::pseudo_moves_bishop::generate_bishop_moves;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_queen::generate_queen_moves;
use crate::move_generation::pseudo_moves_rook::generate_rook_moves;
use crate::moves::move_description::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        let mut pseudo = Vec::<Move>::with_capacity(64);

        generate_pawn_moves(game_state, &mut pseudo);
        generate_knight_moves(game_state, &mut pseudo);
        generate_bishop_moves(game_state, &mut pseudo);
        generate_rook_moves(game_state, &mut pseudo);
        generate_queen_moves(game_state, &mut pseudo);
        generate_king_moves(game_state, &mut pseudo);

        let side = game_state.side_to_move();
        let mut legal = Vec::<GeneratedMove>::with_capacity(pseudo.len());

        for mv in pseudo {
            // Guard against stale en-passant candidates derived from board
            // shape alone.
            if mv.is_en_passant && game_state.en_passant_square() != Some(mv.to) {
                continue;
            }

            let mut next = game_state.clone();
            next.make_move_unchecked(mv);

            // Illegal if own king is attacked after the move.
            if is_king_in_check(next.board(), side) {
                continue;
            }

            legal.push(GeneratedMove {
                mv,
                game_after_move: next,
            });
        }

        legal
    }
}
