use crate::game_state::xiangqi_types::{Board, Color, Square};
use crate::moves::move_shared::push_if_open;

/// One step forward; sideways steps unlock once across the river.
pub fn generate_soldier_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    push_if_open(board, color, from.offset(color.forward(), 0), out);

    if board.has_crossed_river(from.row, color) {
        push_if_open(board, color, from.offset(0, -1), out);
        push_if_open(board, color, from.offset(0, 1), out);
    }
}
