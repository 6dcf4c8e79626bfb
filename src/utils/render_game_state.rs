//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the mailbox board for debugging,
//! tests, and diagnostics in text environments.

use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output, rank 8 at the
/// top, exactly the snapshot traversal order.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank_char = char::from(b'1' + (7 - row));
        out.push(rank_char);
        out.push(' ');

        for file in 0..8u8 {
            match game_state.board().piece_at(row * 8 + file) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
