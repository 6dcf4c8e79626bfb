//! Immutable single-ply move record.
//!
//! A `Move` is an independent value: it references squares and pieces, never
//! the board itself. All special-case flags are derived once from the four
//! constructor inputs and are immutable afterwards.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    /// The piece sitting on the destination square, if any. En-passant
    /// captures record `None` here because the destination is empty; the
    /// victim pawn is implied by the flag.
    pub captured_piece: Option<Piece>,

    pub is_capture: bool,
    pub is_en_passant: bool,
    pub is_promotion: bool,
    pub is_castle: bool,
}

impl Move {
    /// Build a move and derive its flags.
    ///
    /// - en passant: a pawn changing file onto an empty destination
    /// - capture: a recorded destination piece, or en passant
    /// - promotion: a pawn reaching its last rank
    /// - castle: a king moving two files
    pub fn new(
        from: Square,
        to: Square,
        moved_piece: Piece,
        captured_piece: Option<Piece>,
    ) -> Self {
        let file_delta = (to as i8 % 8 - from as i8 % 8).abs();

        let is_en_passant = moved_piece.kind == PieceKind::Pawn
            && file_delta == 1
            && captured_piece.is_none();
        let is_capture = captured_piece.is_some() || is_en_passant;

        let last_row = match moved_piece.color {
            Color::White => 0,
            Color::Black => 7,
        };
        let is_promotion = moved_piece.kind == PieceKind::Pawn && to / 8 == last_row;

        let is_castle = moved_piece.kind == PieceKind::King && file_delta == 2;

        Self {
            from,
            to,
            moved_piece,
            captured_piece,
            is_capture,
            is_en_passant,
            is_promotion,
            is_castle,
        }
    }
}
