//! Checkmate detection by exhaustive escape search.
//!
//! Each candidate move is played on its own deep copy of the board, which is
//! dropped after `is_check` has been asked about it. The caller's board is
//! never mutated.

use tracing::debug;

use crate::game_state::xiangqi_types::{Board, Color, Move};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_check;
use crate::move_generation::move_generator::generate_piece_moves;

/// First move (in board scan order) after which `color` is no longer in
/// check, or `None` if every move leaves the general attacked.
pub fn find_escape(board: &Board, color: Color) -> Option<Move> {
    let mut targets = Vec::with_capacity(17);

    for (from, piece) in board.pieces_of(color) {
        targets.clear();
        generate_piece_moves(board, piece, from, &mut targets);

        for &to in &targets {
            let mv = Move::new(from, to);
            let simulated = apply_move(board, mv);
            if !is_check(&simulated, color) {
                return Some(mv);
            }
        }
    }

    None
}

/// True when `color` is in check and no move gets it out. A side that is
/// not in check, including one with no general, is never checkmated.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_check(board, color) {
        return false;
    }

    match find_escape(board, color) {
        Some(escape) => {
            debug!(%color, %escape, "in check with an escape");
            false
        }
        None => {
            debug!(%color, "checkmate");
            true
        }
    }
}
