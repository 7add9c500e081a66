use crate::game_state::xiangqi_types::{Board, Color, Square};

pub const ORTHOGONAL_STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_STEPS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Pushes `to` when it is on the board and not held by a friendly piece.
#[inline]
pub fn push_if_open(board: &Board, color: Color, to: Square, out: &mut Vec<Square>) -> bool {
    if !board.is_in_board(to.row, to.col) {
        return false;
    }
    match board.piece_at(to) {
        Some(piece) if piece.color == color => false,
        _ => {
            out.push(to);
            true
        }
    }
}

/// Walks from `from` (exclusive) in one direction and yields every on-board
/// square until the edge.
pub fn ray(
    board: &Board,
    from: Square,
    d_row: i32,
    d_col: i32,
) -> impl Iterator<Item = Square> + '_ {
    let mut current = from;
    std::iter::from_fn(move || {
        current = current.offset(d_row, d_col);
        if board.is_in_board(current.row, current.col) {
            Some(current)
        } else {
            None
        }
    })
}
