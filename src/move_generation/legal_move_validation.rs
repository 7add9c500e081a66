//! Move validation for a given player.
//!
//! `is_valid_move` checks ownership and piece movement only. A move that
//! exposes the mover's own general is still valid here; `is_legal_move`
//! layers the self-check rule on top for callers that enforce it.

use tracing::trace;

use crate::game_state::xiangqi_types::{Board, Color, Move};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_check;
use crate::move_generation::move_generator::{get_valid_moves, pseudo_legal_moves};

pub fn is_valid_move(board: &Board, mv: Move, player: Color) -> bool {
    let Some(piece) = board.piece_at(mv.from) else {
        trace!(%mv, "rejected: no piece on source square");
        return false;
    };

    if piece.color != player {
        trace!(%mv, %player, owner = %piece.color, "rejected: piece belongs to the opponent");
        return false;
    }

    let valid = get_valid_moves(board, piece, mv.from).contains(&mv.to);
    if !valid {
        trace!(%mv, %piece, "rejected: destination not reachable");
    }
    valid
}

/// True when playing `mv` leaves `color`'s general attacked. Simulated on a
/// copy of the board.
pub fn leaves_general_in_check(board: &Board, mv: Move, color: Color) -> bool {
    is_check(&apply_move(board, mv), color)
}

pub fn is_legal_move(board: &Board, mv: Move, player: Color) -> bool {
    is_valid_move(board, mv, player) && !leaves_general_in_check(board, mv, player)
}

/// Moves of `color` that pass the self-check rule, in board scan order.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    pseudo_legal_moves(board, color)
        .into_iter()
        .filter(|&mv| !leaves_general_in_check(board, mv, color))
        .collect()
}
