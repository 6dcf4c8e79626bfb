use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_moves_shared::{pieces_of_kind, push_ray_moves};
use crate::moves::attacks::ROOK_DIRECTIONS;
use crate::moves::move_description::Move;

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<Move>) {
    for (from, piece) in pieces_of_kind(game_state, PieceKind::Rook) {
        push_ray_moves(game_state, from, piece, &ROOK_DIRECTIONS, out);
    }
}
