use crate::game_state::chess_rules::{BLACK_KING_HOME, WHITE_KING_HOME};
use crate::game_state::chess_types::{
    Color, PieceKind, Square, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::pseudo_moves_shared::{pieces_of_kind, push_step_moves};
use crate::moves::attacks::KING_OFFSETS;
use crate::moves::move_description::Move;

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>) {
    for (from, piece) in pieces_of_kind(game_state, PieceKind::King) {
        push_step_moves(game_state, from, piece, &KING_OFFSETS, out);
        generate_castling_moves(game_state, from, out);
    }
}

/// Castling needs the right to still be held, the king on its home square,
/// the between-squares empty, and the king's current, transit, and landing
/// squares all unattacked.
fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let enemy = side.opposite();
    let board = game_state.board();
    let rights = game_state.castling_rights();

    // Cannot castle out of check.
    if is_square_attacked(board, king_from, enemy) {
        return;
    }

    let home = match side {
        Color::White => WHITE_KING_HOME,
        Color::Black => BLACK_KING_HOME,
    };
    if king_from != home {
        return;
    }

    let king = match board.piece_at(king_from) {
        Some(piece) => piece,
        None => return,
    };

    let (kingside_right, queenside_right) = match side {
        Color::White => (CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE),
        Color::Black => (CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE),
    };

    if (rights & kingside_right) != 0 {
        let transit = home + 1;
        let landing = home + 2;
        if board.piece_at(transit).is_none()
            && board.piece_at(landing).is_none()
            && !is_square_attacked(board, transit, enemy)
            && !is_square_attacked(board, landing, enemy)
        {
            out.push(Move::new(home, landing, king, None));
        }
    }

    if (rights & queenside_right) != 0 {
        let transit = home - 1;
        let landing = home - 2;
        let rook_neighbor = home - 3; // b-file square; must be empty, never crossed by the king
        if board.piece_at(transit).is_none()
            && board.piece_at(landing).is_none()
            && board.piece_at(rook_neighbor).is_none()
            && !is_square_attacked(board, transit, enemy)
            && !is_square_attacked(board, landing, enemy)
        {
            out.push(Move::new(home, landing, king, None));
        }
    }
}
