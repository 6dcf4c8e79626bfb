//! Canonical chess-rule constants.
//!
//! Static rule-related literals: the standard starting position FEN, the
//! home squares that govern castling rights, and the fifty-move threshold.

use crate::game_state::chess_types::Square;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// Square indices follow the a8 == 0, h1 == 63 layout.
pub const WHITE_KING_HOME: Square = 60; // e1
pub const BLACK_KING_HOME: Square = 4; // e8

pub const WHITE_KINGSIDE_ROOK_HOME: Square = 63; // h1
pub const WHITE_QUEENSIDE_ROOK_HOME: Square = 56; // a1
pub const BLACK_KINGSIDE_ROOK_HOME: Square = 7; // h8
pub const BLACK_QUEENSIDE_ROOK_HOME: Square = 0; // a8

/// Half-moves without a capture or pawn move before the game is drawn.
pub const FIFTY_MOVE_RULE_HALFMOVES: u16 = 100;
