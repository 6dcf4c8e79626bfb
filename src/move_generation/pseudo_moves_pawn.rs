use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_moves_shared::pieces_of_kind;
use crate::moves::attacks::{offset_square, pawn_advance_rank_delta};
use crate::moves::move_description::Move;

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let forward = pawn_advance_rank_delta(side);
    let home_row = match side {
        Color::White => 6, // rank 2
        Color::Black => 1, // rank 7
    };

    for (from, piece) in pieces_of_kind(game_state, PieceKind::Pawn) {
        // Single push, and the double push stacked behind it.
        if let Some(one) = offset_square(from, 0, forward) {
            if game_state.board().piece_at(one).is_none() {
                out.push(Move::new(from, one, piece, None));

                if from / 8 == home_row {
                    if let Some(two) = offset_square(one, 0, forward) {
                        if game_state.board().piece_at(two).is_none() {
                            out.push(Move::new(from, two, piece, None));
                        }
                    }
                }
            }
        }

        // Diagonal captures, including the recorded en-passant target.
        for d_file in [-1i8, 1] {
            let Some(to) = offset_square(from, d_file, forward) else {
                continue;
            };

            match game_state.board().piece_at(to) {
                Some(occupant) if occupant.color != side => {
                    out.push(Move::new(from, to, piece, Some(occupant)));
                }
                None if game_state.en_passant_square() == Some(to) => {
                    // Destination is empty; the flag derivation marks this
                    // as an en-passant capture.
                    out.push(Move::new(from, to, piece, None));
                }
                _ => {}
            }
        }
    }
}
