//! Attack oracle.
//!
//! Answers "is this square attacked by that side" with an outward ray and
//! offset walk built on the same geometry tables the pseudo-legal
//! generators use, so the two can never disagree about piece reach.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::attacks::{
    offset_square, pawn_advance_rank_delta, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS,
    ROOK_DIRECTIONS,
};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

/// A side with no king on the board is never "in check" (permissive FEN
/// contract; the codec does not enforce king uniqueness).
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    // Orthogonal rays: rook or queen.
    for &(d_file, d_rank) in &ROOK_DIRECTIONS {
        if ray_hits_attacker(
            board,
            square,
            d_file,
            d_rank,
            attacker_color,
            &[PieceKind::Rook, PieceKind::Queen],
        ) {
            return true;
        }
    }

    // Diagonal rays: bishop or queen.
    for &(d_file, d_rank) in &BISHOP_DIRECTIONS {
        if ray_hits_attacker(
            board,
            square,
            d_file,
            d_rank,
            attacker_color,
            &[PieceKind::Bishop, PieceKind::Queen],
        ) {
            return true;
        }
    }

    for &(d_file, d_rank) in &KNIGHT_OFFSETS {
        if offset_holds(board, square, d_file, d_rank, attacker_color, PieceKind::Knight) {
            return true;
        }
    }

    for &(d_file, d_rank) in &KING_OFFSETS {
        if offset_holds(board, square, d_file, d_rank, attacker_color, PieceKind::King) {
            return true;
        }
    }

    // Pawns attack diagonally forward, so the attacking pawn sits one rank
    // on its own side of the target.
    let pawn_rank_delta = -pawn_advance_rank_delta(attacker_color);
    for d_file in [-1i8, 1] {
        if offset_holds(board, square, d_file, pawn_rank_delta, attacker_color, PieceKind::Pawn) {
            return true;
        }
    }

    false
}

/// Walk one ray; the first occupied square decides. Any piece blocks, but
/// only an attacker-colored, movement-compatible one attacks.
fn ray_hits_attacker(
    board: &Board,
    from: Square,
    d_file: i8,
    d_rank: i8,
    attacker_color: Color,
    kinds: &[PieceKind],
) -> bool {
    let mut current = from;
    while let Some(next) = offset_square(current, d_file, d_rank) {
        if let Some(piece) = board.piece_at(next) {
            return piece.color == attacker_color && kinds.contains(&piece.kind);
        }
        current = next;
    }
    false
}

#[inline]
fn offset_holds(
    board: &Board,
    from: Square,
    d_file: i8,
    d_rank: i8,
    attacker_color: Color,
    kind: PieceKind,
) -> bool {
    offset_square(from, d_file, d_rank)
        .and_then(|sq| board.piece_at(sq))
        .is_some_and(|piece| piece.color == attacker_color && piece.kind == kind)
}
