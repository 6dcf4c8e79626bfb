//! FEN-to-GameState parser.
//!
//! Builds a fully-populated game state from a Forsyth-Edwards Notation
//! string: board occupancy, side to move, rights, en-passant target, and
//! clocks. Rank shape and field syntax are validated; piece counts and king
//! uniqueness deliberately are not.

use crate::errors::ChessError;
use crate::game_state::chess_types::{
    CastlingRights, Color, Piece, Square, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::MalformedFen("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessError::MalformedFen("missing side-to-move".to_owned()))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessError::MalformedFen("missing castling rights".to_owned()))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| ChessError::MalformedFen("missing en-passant square".to_owned()))?;
    let halfmove_part = parts
        .next()
        .ok_or_else(|| ChessError::MalformedFen("missing halfmove clock".to_owned()))?;
    let fullmove_part = parts
        .next()
        .ok_or_else(|| ChessError::MalformedFen("missing fullmove number".to_owned()))?;

    if parts.next().is_some() {
        return Err(ChessError::MalformedFen("extra trailing fields".to_owned()));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessError::MalformedFen(format!("invalid halfmove clock: {halfmove_part}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessError::MalformedFen(format!("invalid fullmove number: {fullmove_part}")))?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::MalformedFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    // FEN lists ranks 8 down to 1, which is exactly the board's index order.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::MalformedFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as u8;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                ChessError::MalformedFen(format!("invalid piece character '{ch}'"))
            })?;

            if file >= 8 {
                return Err(ChessError::MalformedFen(
                    "board rank has too many files".to_owned(),
                ));
            }

            game_state.board.set((row as u8) * 8 + file, piece);
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::MalformedFen(
                "board rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::MalformedFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => {
                return Err(ChessError::MalformedFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| {
            ChessError::MalformedFen(format!("invalid en-passant square: {en_passant_part}"))
        })
}
