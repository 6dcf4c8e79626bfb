use crate::game_state::chess_types::{
    CastlingRights, Color, Square, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights());
    let en_passant = generate_en_passant_field(game_state.en_passant_square());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock(),
        game_state.fullmove_number()
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    // Board indices already run rank 8 to rank 1, file a to h.
    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match game_state.board().piece_at(row * 8 + file) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_WHITE_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_WHITE_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_BLACK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_BLACK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    let Some(square) = square else {
        return "-".to_owned();
    };

    square_to_algebraic(square).unwrap_or_else(|_| "-".to_owned())
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{
        Color, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE,
        CASTLE_WHITE_QUEENSIDE,
    };
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, STARTING_POSITION_FEN);

        let reparsed = parse_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed.board(), parsed.board());
        assert_eq!(reparsed.side_to_move(), parsed.side_to_move());
        assert_eq!(reparsed.castling_rights(), parsed.castling_rights());
        assert_eq!(reparsed.en_passant_square(), parsed.en_passant_square());
        assert_eq!(reparsed.halfmove_clock(), parsed.halfmove_clock());
        assert_eq!(reparsed.fullmove_number(), parsed.fullmove_number());
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        let generated = generate_fen(&parsed);
        let reparsed = parse_fen(&generated).expect("generated FEN should parse");

        assert_eq!(generated, fen);
        assert_eq!(reparsed.board(), parsed.board());
        assert_eq!(reparsed.side_to_move(), Color::Black);
        assert_eq!(
            reparsed.castling_rights(),
            CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE
        );
        assert_eq!(reparsed.en_passant_square(), None);
        assert_eq!(reparsed.halfmove_clock(), 4);
        assert_eq!(reparsed.fullmove_number(), 6);

        let white_castle = CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE;
        assert_eq!(reparsed.castling_rights() & white_castle, 0);
    }

    #[test]
    fn round_trip_en_passant_position_fen() {
        let fen = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2";
        let parsed = parse_fen(fen).expect("FEN should parse");
        assert_eq!(generate_fen(&parsed), fen);
    }

    #[test]
    fn fen_round_trips_across_played_moves() {
        use crate::game_state::game_state::GameState;

        let mut game = GameState::new_game();
        for (from, to) in [("e2", "e4"), ("c7", "c5"), ("g1", "f3"), ("d7", "d6")] {
            game.apply_move_squares(from, to).expect("move should apply");
        }

        let fen = game.to_fen();
        let reparsed = parse_fen(&fen).expect("generated FEN should parse");
        assert_eq!(generate_fen(&reparsed), fen);
        assert_eq!(reparsed.board(), game.board());
    }
}
