use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_moves_shared::{pieces_of_kind, push_step_moves};
use crate::moves::attacks::KNIGHT_OFFSETS;
use crate::moves::move_description::Move;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<Move>) {
    for (from, piece) in pieces_of_kind(game_state, PieceKind::Knight) {
        push_step_moves(game_state, from, piece, &KNIGHT_OFFSETS, out);
    }
}
