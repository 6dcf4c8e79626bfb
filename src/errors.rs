//! Crate-wide error type.
//!
//! All fallible public operations surface one of these variants; none are
//! retried internally, and none leave the game state partially mutated.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The provided FEN string is missing a field or could not be parsed.
    #[error("malformed FEN: {0}")]
    MalformedFen(String),
    /// A square label outside a1-h8, or a square index outside 0-63.
    #[error("invalid square: {0}")]
    InvalidSquare(String),
    /// The proposed move is not a member of the current legal move set.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// Undo was requested with no move left to undo.
    #[error("no move to undo")]
    EmptyHistory,
}
