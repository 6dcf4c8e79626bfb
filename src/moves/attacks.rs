//! Shared movement geometry.
//!
//! Direction and offset tables plus the bounds-checked square stepper used
//! by BOTH pseudo-legal generation and the attack oracle, so the two can
//! never drift apart.

use crate::game_state::chess_types::{Color, Square};

/// Offsets are (file delta, rank delta) pairs; a positive rank delta moves
/// toward rank 8. Stepping is done in coordinates, not raw indices, so a
/// ray can never wrap from file h onto file a.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Step one offset from a square; `None` when the result leaves the board.
#[inline]
pub fn offset_square(square: Square, d_file: i8, d_rank: i8) -> Option<Square> {
    let file = (square % 8) as i8 + d_file;
    // Index rows run rank 8 down to rank 1, so moving toward rank 8 is a
    // negative row delta.
    let row = (square / 8) as i8 - d_rank;

    if !(0..8).contains(&file) || !(0..8).contains(&row) {
        return None;
    }

    Some((row * 8 + file) as Square)
}

/// Rank delta of a single pawn advance for the given color.
#[inline]
pub const fn pawn_advance_rank_delta(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

#[cfg(test)]
mod tests {
    use super::offset_square;

    #[test]
    fn stepping_respects_board_edges() {
        // h4 == 39; one file right leaves the board instead of wrapping to a5.
        assert_eq!(offset_square(39, 1, 0), None);
        // a4 == 32; one file left leaves the board.
        assert_eq!(offset_square(32, -1, 0), None);
        // a8 == 0; toward rank 8 leaves the board.
        assert_eq!(offset_square(0, 0, 1), None);
        // h1 == 63; toward rank 1 leaves the board.
        assert_eq!(offset_square(63, 0, -1), None);
    }

    #[test]
    fn stepping_moves_in_coordinate_space() {
        // e4 == 36; up one rank is e5 == 28.
        assert_eq!(offset_square(36, 0, 1), Some(28));
        // e4 right one file is f4 == 37.
        assert_eq!(offset_square(36, 1, 0), Some(37));
        // e4 knight jump (+1 file, +2 ranks) is f6 == 21.
        assert_eq!(offset_square(36, 1, 2), Some(21));
    }
}
