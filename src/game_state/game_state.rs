//! Core board state and the make/undo state machine.
//!
//! `GameState` is the central model for the engine. It owns the mailbox
//! board, turn/rights/clock fields, and the undo stack, and it is the only
//! component allowed to mutate them. View layers talk exclusively to this
//! type: propose a move, read the snapshot, react to the returned status.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    BLACK_KINGSIDE_ROOK_HOME, BLACK_QUEENSIDE_ROOK_HOME, FIFTY_MOVE_RULE_HALFMOVES,
    STARTING_POSITION_FEN, WHITE_KINGSIDE_ROOK_HOME, WHITE_QUEENSIDE_ROOK_HOME,
};
use crate::game_state::chess_types::{
    CastlingRights, Color, DrawReason, GameStatus, Piece, PieceKind, Square,
    CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_description::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// One chess game: position, rights, clocks, status, and move history.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
    pub(crate) status: GameStatus,
    pub(crate) undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            status: GameStatus::InProgress,
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    // --- Read-only accessors for the view layer and the generators ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All 64 slots in rank8-to-rank1, file-a-to-h order, matching the FEN
    /// piece-placement traversal.
    #[inline]
    pub fn board_snapshot(&self) -> &[Option<Piece>; 64] {
        self.board.squares()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.undo_stack
    }

    // --- Move API ---

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        LegalMoveGenerator
            .generate_legal_moves(self)
            .into_iter()
            .map(|generated| generated.mv)
            .collect()
    }

    /// Look up the legal move matching an origin/destination pair, if any.
    /// This is the membership test a two-click view layer needs.
    pub fn find_legal_move(&self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
    }

    /// Validate and apply a candidate move.
    ///
    /// A candidate absent from the legal move set is rejected with
    /// [`ChessError::IllegalMove`] and the position is left untouched.
    /// On success the move is committed, history is pushed, the turn flips,
    /// and the freshly recomputed status is returned.
    pub fn apply_move(&mut self, mv: Move) -> Result<GameStatus, ChessError> {
        if !self.legal_moves().contains(&mv) {
            return Err(ChessError::IllegalMove(describe_move(&mv)));
        }

        self.make_move_unchecked(mv);
        self.status = self.compute_status();
        Ok(self.status)
    }

    /// Apply a move given as two algebraic square labels (the shape a view
    /// layer produces from clicks). Promotion is always to a queen.
    pub fn apply_move_squares(&mut self, from: &str, to: &str) -> Result<GameStatus, ChessError> {
        let from_square = algebraic_to_square(from)?;
        let to_square = algebraic_to_square(to)?;

        let mv = self
            .find_legal_move(from_square, to_square)
            .ok_or_else(|| ChessError::IllegalMove(format!("{from} -> {to}")))?;

        self.make_move_unchecked(mv);
        self.status = self.compute_status();
        Ok(self.status)
    }

    /// Undo the most recent move exactly.
    ///
    /// Terminal status is NOT re-evaluated here; callers that undo out of a
    /// checkmate or draw should follow up with [`GameState::refresh_status`].
    pub fn undo_move(&mut self) -> Result<(), ChessError> {
        let Some(undo) = self.undo_stack.pop() else {
            return Err(ChessError::EmptyHistory);
        };

        let mv = undo.mv;
        let mover = self.side_to_move.opposite();

        self.board.clear(mv.to);
        self.board.set(mv.from, mv.moved_piece);

        if mv.is_en_passant {
            let victim_square = en_passant_victim_square(mv.to, mover);
            self.board
                .set(victim_square, Piece::new(mover.opposite(), PieceKind::Pawn));
        } else if let Some(captured) = mv.captured_piece {
            self.board.set(mv.to, captured);
        }

        if mv.is_castle {
            let (rook_home, rook_transit) = castle_rook_squares(mover, mv.to);
            self.board.clear(rook_transit);
            self.board.set(rook_home, Piece::new(mover, PieceKind::Rook));
        }

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_square = undo.prev_en_passant_square;
        self.halfmove_clock = undo.prev_halfmove_clock;
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_sub(1);
        }
        self.side_to_move = mover;

        Ok(())
    }

    /// Recompute checkmate/draw status for the current side to move.
    pub fn refresh_status(&mut self) -> GameStatus {
        self.status = self.compute_status();
        self.status
    }

    // --- Internal mutation ---

    /// Commit a move without legality validation. Callers must pass a move
    /// produced by generation for this exact position.
    pub(crate) fn make_move_unchecked(&mut self, mv: Move) {
        let side = self.side_to_move;

        self.undo_stack.push(UndoState {
            mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant_square,
            prev_halfmove_clock: self.halfmove_clock,
        });

        self.board.clear(mv.from);

        if mv.is_en_passant {
            self.board.clear(en_passant_victim_square(mv.to, side));
        }

        let placed = if mv.is_promotion {
            Piece::new(side, PieceKind::Queen)
        } else {
            mv.moved_piece
        };
        self.board.set(mv.to, placed);

        if mv.is_castle {
            let (rook_home, rook_transit) = castle_rook_squares(side, mv.to);
            self.board.clear(rook_home);
            self.board
                .set(rook_transit, Piece::new(side, PieceKind::Rook));
        }

        if mv.moved_piece.kind == PieceKind::King {
            let both = match side {
                Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
                Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
            };
            self.castling_rights &= !both;
        }
        // A move leaving OR landing on a rook home square strips that right:
        // the origin case covers the rook itself moving away, the destination
        // case covers the rook being captured on its home square.
        clear_right_for_rook_home(&mut self.castling_rights, mv.from);
        clear_right_for_rook_home(&mut self.castling_rights, mv.to);

        let from_row = mv.from / 8;
        let to_row = mv.to / 8;
        self.en_passant_square = if mv.moved_piece.kind == PieceKind::Pawn
            && from_row.abs_diff(to_row) == 2
        {
            Some((mv.from + mv.to) / 2)
        } else {
            None
        };

        if mv.moved_piece.kind == PieceKind::Pawn || mv.is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if side == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = side.opposite();
    }

    fn compute_status(&self) -> GameStatus {
        let side = self.side_to_move;

        if self.legal_moves().is_empty() {
            if is_king_in_check(&self.board, side) {
                GameStatus::Checkmate(side.opposite())
            } else {
                GameStatus::Draw(DrawReason::Stalemate)
            }
        } else if self.halfmove_clock >= FIFTY_MOVE_RULE_HALFMOVES {
            GameStatus::Draw(DrawReason::FiftyMoveRule)
        } else {
            GameStatus::InProgress
        }
    }
}

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
fn en_passant_victim_square(to: Square, mover: Color) -> Square {
    match mover {
        // The victim sits one rank closer to its own side than the target.
        Color::White => to + 8,
        Color::Black => to - 8,
    }
}

/// (rook home, rook transit) squares for a castle landing the king on `to`.
fn castle_rook_squares(side: Color, king_to: Square) -> (Square, Square) {
    match (side, king_to) {
        (Color::White, 62) => (63, 61), // h1 -> f1
        (Color::White, 58) => (56, 59), // a1 -> d1
        (Color::Black, 6) => (7, 5),    // h8 -> f8
        (Color::Black, 2) => (0, 3),    // a8 -> d8
        // Unreachable for flag-derived castles; fall back to no-op squares.
        _ => (king_to, king_to),
    }
}

fn clear_right_for_rook_home(rights: &mut CastlingRights, square: Square) {
    match square {
        WHITE_KINGSIDE_ROOK_HOME => *rights &= !CASTLE_WHITE_KINGSIDE,
        WHITE_QUEENSIDE_ROOK_HOME => *rights &= !CASTLE_WHITE_QUEENSIDE,
        BLACK_KINGSIDE_ROOK_HOME => *rights &= !CASTLE_BLACK_KINGSIDE,
        BLACK_QUEENSIDE_ROOK_HOME => *rights &= !CASTLE_BLACK_QUEENSIDE,
        _ => {}
    }
}

fn describe_move(mv: &Move) -> String {
    let from = square_to_algebraic(mv.from).unwrap_or_else(|_| "??".to_owned());
    let to = square_to_algebraic(mv.to).unwrap_or_else(|_| "??".to_owned());
    format!("{from} -> {to}")
}
