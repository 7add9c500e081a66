use crate::game_state::xiangqi_types::{Board, Color, Square};
use crate::moves::move_shared::{push_if_open, DIAGONAL_STEPS};

pub fn generate_advisor_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in DIAGONAL_STEPS {
        let to = from.offset(d_row, d_col);
        if board.is_in_palace(to.row, to.col, color) {
            push_if_open(board, color, to, out);
        }
    }
}
