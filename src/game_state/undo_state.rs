use crate::game_state::chess_types::{CastlingRights, Square};
use crate::moves::move_description::Move;

/// Single undo record pushed on every make and popped on every undo.
/// Captures everything a move can clobber that the move itself cannot
/// reconstruct.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
}
