//! Elephant (相/象) movement.
//!
//! Two diagonal steps, blocked by a piece on the midpoint ("elephant eye"),
//! never crossing the river.

use crate::game_state::xiangqi_types::{Board, Color, Square};
use crate::moves::move_shared::{push_if_open, DIAGONAL_STEPS};

pub fn generate_elephant_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in DIAGONAL_STEPS {
        let to = from.offset(2 * d_row, 2 * d_col);
        if !board.is_in_board(to.row, to.col) || board.has_crossed_river(to.row, color) {
            continue;
        }

        let eye = from.offset(d_row, d_col);
        if !board.is_empty(eye) {
            continue;
        }

        push_if_open(board, color, to, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_elephant_moves;
    use crate::game_state::xiangqi_types::{Board, Color, PieceKind, Square};

    fn moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
        let mut out = Vec::new();
        generate_elephant_moves(board, from, color, &mut out);
        out
    }

    #[test]
    fn crippled_eye_blocks_that_diagonal_only() {
        let mut board = Board::new_empty();
        board
            .place(Square::new(0, 2), PieceKind::Elephant, Color::Red)
            .place(Square::new(1, 3), PieceKind::Soldier, Color::Black);

        let out = moves(&board, Square::new(0, 2), Color::Red);
        assert!(!out.contains(&Square::new(2, 4)));
        assert_eq!(out, vec![Square::new(2, 0)]);
    }

    #[test]
    fn elephant_cannot_cross_river() {
        let mut board = Board::new_empty();
        board.place(Square::new(4, 2), PieceKind::Elephant, Color::Red);
        let red = moves(&board, Square::new(4, 2), Color::Red);
        assert_eq!(red.len(), 2);
        assert!(red.iter().all(|sq| sq.row == 2));

        let mut board = Board::new_empty();
        board.place(Square::new(5, 6), PieceKind::Elephant, Color::Black);
        let black = moves(&board, Square::new(5, 6), Color::Black);
        assert_eq!(black.len(), 2);
        assert!(black.iter().all(|sq| sq.row == 7));
    }

    #[test]
    fn elephant_captures_enemy_but_not_friend() {
        let mut board = Board::new_empty();
        board
            .place(Square::new(2, 4), PieceKind::Elephant, Color::Red)
            .place(Square::new(0, 2), PieceKind::Horse, Color::Black)
            .place(Square::new(0, 6), PieceKind::Horse, Color::Red);

        let out = moves(&board, Square::new(2, 4), Color::Red);
        assert!(out.contains(&Square::new(0, 2)));
        assert!(!out.contains(&Square::new(0, 6)));
        assert!(out.contains(&Square::new(4, 2)));
        assert!(out.contains(&Square::new(4, 6)));
    }
}
