use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::attacks::offset_square;
use crate::moves::move_description::Move;

/// Walk each direction one square at a time, pushing quiet moves until the
/// ray leaves the board or hits the first occupied square. An enemy occupant
/// is pushed as a capture; a friendly one ends the ray silently.
pub fn push_ray_moves(
    game_state: &GameState,
    from: Square,
    moved_piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_file, d_rank) in directions {
        let mut current = from;
        while let Some(next) = offset_square(current, d_file, d_rank) {
            match game_state.board().piece_at(next) {
                None => {
                    out.push(Move::new(from, next, moved_piece, None));
                    current = next;
                }
                Some(occupant) => {
                    if occupant.color != moved_piece.color {
                        out.push(Move::new(from, next, moved_piece, Some(occupant)));
                    }
                    break;
                }
            }
        }
    }
}

/// Push each single-offset candidate unless it is off-board or occupied by a
/// friendly piece.
pub fn push_step_moves(
    game_state: &GameState,
    from: Square,
    moved_piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_file, d_rank) in offsets {
        let Some(to) = offset_square(from, d_file, d_rank) else {
            continue;
        };

        match game_state.board().piece_at(to) {
            None => out.push(Move::new(from, to, moved_piece, None)),
            Some(occupant) if occupant.color != moved_piece.color => {
                out.push(Move::new(from, to, moved_piece, Some(occupant)));
            }
            Some(_) => {}
        }
    }
}

/// Iterate the side-to-move's pieces of one kind.
pub fn pieces_of_kind(
    game_state: &GameState,
    kind: PieceKind,
) -> impl Iterator<Item = (Square, Piece)> + '_ {
    let side = game_state.side_to_move();
    (0u8..64).filter_map(move |square| {
        let piece = game_state.board().piece_at(square)?;
        (piece.color == side && piece.kind == kind).then_some((square, piece))
    })
}
