//! Core value types shared across the engine.
//!
//! Colors, piece kinds, boundary piece codes, castling-rights bitmask, and
//! the square index type used by every subsystem.

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is represented separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A colored piece occupying a board square. The absence of a piece is
/// always `Option::None`, never a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Map a FEN piece letter to a piece. Uppercase is White.
    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Self::new(color, kind))
    }

    pub fn to_fen_char(self) -> char {
        let base = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Two-character boundary code used by view layers, e.g. `wP` or `bK`.
    pub fn code(self) -> String {
        let color_ch = match self.color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let kind_ch = self.to_fen_char().to_ascii_uppercase();
        format!("{color_ch}{kind_ch}")
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let color = match chars.next()? {
            'w' => Color::White,
            'b' => Color::Black,
            _ => return None,
        };
        let kind_ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let piece = Piece::from_fen_char(kind_ch.to_ascii_uppercase())?;
        Some(Piece::new(color, piece.kind))
    }
}

/// Board square index (`0..=63`), row-major from a8 (0) to h1 (63), the
/// same rank8-to-rank1, file-a-to-h traversal order FEN uses.
pub type Square = u8;

/// Compact castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;

/// Terminal state of a game, recomputed after every applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The contained color delivered mate.
    Checkmate(Color),
    Draw(DrawReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// 100 half-moves without a capture or pawn move.
    FiftyMoveRule,
    /// The side to move has no legal moves and is not in check.
    Stalemate,
}

#[cfg(test)]
mod tests {
    use super::{Color, Piece, PieceKind};

    #[test]
    fn fen_chars_round_trip_with_standard_color_mapping() {
        let white_knight = Piece::from_fen_char('N').expect("N should map to a piece");
        assert_eq!(white_knight.color, Color::White);
        assert_eq!(white_knight.kind, PieceKind::Knight);
        assert_eq!(white_knight.to_fen_char(), 'N');

        let black_pawn = Piece::from_fen_char('p').expect("p should map to a piece");
        assert_eq!(black_pawn.color, Color::Black);
        assert_eq!(black_pawn.to_fen_char(), 'p');

        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('1'), None);
    }

    #[test]
    fn boundary_codes_round_trip() {
        let piece = Piece::new(Color::Black, PieceKind::Queen);
        assert_eq!(piece.code(), "bQ");
        assert_eq!(Piece::from_code("bQ"), Some(piece));
        assert_eq!(
            Piece::from_code("wK"),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(Piece::from_code("xQ"), None);
        assert_eq!(Piece::from_code("w"), None);
        assert_eq!(Piece::from_code("wQQ"), None);
    }
}
