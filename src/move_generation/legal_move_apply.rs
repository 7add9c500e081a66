use crate::game_state::xiangqi_types::{Board, Move, Piece};

/// Returns a copy of `board` with the piece on `mv.from` moved to `mv.to`,
/// overwriting whatever stood there. The input board is left untouched.
///
/// No legality checks are made; an empty source square just clears the
/// destination.
pub fn apply_move(board: &Board, mv: Move) -> Board {
    let mut next = board.clone();
    apply_move_in_place(&mut next, mv);
    next
}

/// Mutating form used on boards the caller owns outright. Returns the
/// captured piece, if any.
pub fn apply_move_in_place(board: &mut Board, mv: Move) -> Option<Piece> {
    let moving = board.set(mv.from, None);
    board.set(mv.to, moving)
}
