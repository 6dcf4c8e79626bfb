use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_moves_shared::{pieces_of_kind, push_ray_moves};
use crate::moves::attacks::BISHOP_DIRECTIONS;
use crate::moves::move_description::Move;

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<Move>) {
    for (from, piece) in pieces_of_kind(game_state, PieceKind::Bishop) {
        push_ray_moves(game_state, from, piece, &BISHOP_DIRECTIONS, out);
    }
}
