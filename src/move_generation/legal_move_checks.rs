//! Check detection.
//!
//! A general is in check when any enemy piece's pseudo-legal destinations
//! include its square. This covers the flying-general rule for free, since
//! the enemy general's own move set contains the facing square.

use crate::game_state::xiangqi_types::{Board, Color, Piece, PieceKind, Square};
use crate::move_generation::move_generator::generate_piece_moves;

#[inline]
pub fn general_square(board: &Board, color: Color) -> Option<Square> {
    board.find_piece(PieceKind::General, color)
}

/// True when `color`'s general is attacked. A side without a general is
/// never in check.
pub fn is_check(board: &Board, color: Color) -> bool {
    let Some(general) = general_square(board, color) else {
        return false;
    };
    is_square_attacked(board, general, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let mut targets = Vec::with_capacity(17);
    for (from, piece) in board.pieces_of(attacker_color) {
        targets.clear();
        generate_piece_moves(board, piece, from, &mut targets);
        if targets.contains(&square) {
            return true;
        }
    }
    false
}

pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, Piece)> {
    let mut attackers = Vec::<(Square, Piece)>::new();
    let mut targets = Vec::with_capacity(17);

    for (from, piece) in board.pieces_of(attacker_color) {
        targets.clear();
        generate_piece_moves(board, piece, from, &mut targets);
        if targets.contains(&square) {
            attackers.push((from, piece));
        }
    }

    attackers
}
