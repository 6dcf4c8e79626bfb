//! Square label conversions.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and the internal
//! a8-first square index reused by the FEN codec and the public move API.

use crate::errors::ChessError;
use crate::game_state::chess_types::Square;

/// Convert an algebraic label (for example "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file_index = file - b'a';
    let row = 7 - (rank - b'1');
    Ok(row * 8 + file_index)
}

/// Convert a square index (`0..=63`) to its algebraic label.
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessError> {
    if square > 63 {
        return Err(ChessError::InvalidSquare(format!("index {square}")));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + (7 - square / 8));

    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::errors::ChessError;

    #[test]
    fn corners_map_to_snapshot_order() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 7);
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 56);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 63);

        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "a8");
        assert_eq!(square_to_algebraic(63).expect("63 should convert"), "h1");
        assert_eq!(square_to_algebraic(36).expect("36 should convert"), "e4");
    }

    #[test]
    fn all_squares_round_trip() {
        for square in 0u8..64 {
            let label = square_to_algebraic(square).expect("in-domain index should convert");
            let back = algebraic_to_square(&label).expect("generated label should parse");
            assert_eq!(back, square);
        }
    }

    #[test]
    fn out_of_domain_labels_are_rejected() {
        for bad in ["", "e", "e44", "i4", "e9", "E4", "44"] {
            assert!(matches!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidSquare(_))
            ));
        }
        assert!(matches!(
            square_to_algebraic(64),
            Err(ChessError::InvalidSquare(_))
        ));
    }
}
