use crate::game_state::xiangqi_types::{Board, Color, Square};
use crate::moves::move_shared::push_if_open;

/// `(d_row, d_col)` of every L-shaped leap.
pub const HORSE_LEAPS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

/// Orthogonal square the horse must pass through for a given leap.
#[inline]
pub const fn horse_leg(from: Square, d_row: i32, d_col: i32) -> Square {
    if d_row == 2 || d_row == -2 {
        from.offset(d_row / 2, 0)
    } else {
        from.offset(0, d_col / 2)
    }
}

pub fn generate_horse_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in HORSE_LEAPS {
        let to = from.offset(d_row, d_col);
        if !board.is_in_board(to.row, to.col) {
            continue;
        }
        // Hobbled leg.
        if !board.is_empty(horse_leg(from, d_row, d_col)) {
            continue;
        }
        push_if_open(board, color, to, out);
    }
}
