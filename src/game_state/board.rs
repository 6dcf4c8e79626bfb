//! Mailbox board representation.
//!
//! Sixty-four optional piece slots indexed in the FEN traversal order
//! (a8 == 0 through h1 == 63). The board knows nothing about turn order or
//! rights; it is the piece-occupancy model the rest of the engine queries.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; 64],
        }
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Piece) {
        self.squares[square as usize] = Some(piece);
    }

    /// Clear a square, returning whatever occupied it.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.squares[square as usize].take()
    }

    /// Read-only view of all 64 slots in rank8-to-rank1, a-to-h order.
    #[inline]
    pub fn squares(&self) -> &[Option<Piece>; 64] {
        &self.squares
    }

    /// Locate the king of the given color. Positions supplied by external
    /// FENs may lack one; callers must tolerate `None`.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.squares.iter().position(|slot| {
            matches!(slot, Some(piece) if piece.color == color && piece.kind == PieceKind::King)
        }).map(|index| index as Square)
    }
}
