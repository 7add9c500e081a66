//! General (帅/将) movement.
//!
//! One orthogonal step inside the palace, plus the flying-general capture
//! along an open shared column.

use crate::game_state::xiangqi_types::{Board, Color, PieceKind, Square};
use crate::moves::move_shared::{push_if_open, ORTHOGONAL_STEPS};

pub fn generate_general_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let start = out.len();

    for (d_row, d_col) in ORTHOGONAL_STEPS {
        let to = from.offset(d_row, d_col);
        if board.is_in_palace(to.row, to.col, color) {
            push_if_open(board, color, to, out);
        }
    }

    if let Some(target) = facing_general(board, from, color) {
        if !out[start..].contains(&target) {
            out.push(target);
        }
    }
}

/// Square of the opposing general when it sits on the same column as `from`
/// with nothing in between.
pub fn facing_general(board: &Board, from: Square, color: Color) -> Option<Square> {
    let opponent = board.find_piece(PieceKind::General, color.opposite())?;
    if opponent.col != from.col || opponent.row == from.row {
        return None;
    }

    let low = from.row.min(opponent.row);
    let high = from.row.max(opponent.row);
    let blocked = (low + 1..high).any(|row| !board.is_empty(Square::new(row, from.col)));

    if blocked {
        None
    } else {
        Some(opponent)
    }
}
