//! Cannon (炮) movement.
//!
//! Quiet moves slide like a chariot up to the first obstruction. That first
//! piece is the screen; the next piece beyond it ends the ray and is a
//! capture when it belongs to the enemy.

use crate::game_state::xiangqi_types::{Board, Color, Square};
use crate::moves::move_shared::{ray, ORTHOGONAL_STEPS};

pub fn generate_cannon_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in ORTHOGONAL_STEPS {
        let mut screened = false;

        for to in ray(board, from, d_row, d_col) {
            match (board.piece_at(to), screened) {
                (None, false) => out.push(to),
                (None, true) => {}
                (Some(_), false) => screened = true,
                (Some(target), true) => {
                    if target.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_cannon_moves;
    use crate::game_state::xiangqi_types::{Board, Color, PieceKind, Square};

    fn moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
        let mut out = Vec::new();
        generate_cannon_moves(board, from, color, &mut out);
        out
    }

    #[test]
    fn open_board_cannon_moves_like_chariot_without_captures() {
        let mut board = Board::new_empty();
        board.place(Square::new(2, 1), PieceKind::Cannon, Color::Red);
        let out = moves(&board, Square::new(2, 1), Color::Red);

        assert_eq!(out.len(), 17);
        assert!(out.iter().all(|sq| board.is_empty(*sq)));
    }

    #[test]
    fn capture_needs_exactly_one_screen() {
        // No screen: adjacent enemy on the same row is not capturable.
        let mut board = Board::new_empty();
        board
            .place(Square::new(4, 0), PieceKind::Cannon, Color::Red)
            .place(Square::new(4, 3), PieceKind::Chariot, Color::Black);
        let out = moves(&board, Square::new(4, 0), Color::Red);
        assert!(!out.contains(&Square::new(4, 3)));
        assert!(out.contains(&Square::new(4, 2)));

        // One screen: capture allowed.
        board.place(Square::new(4, 1), PieceKind::Soldier, Color::Red);
        let out = moves(&board, Square::new(4, 0), Color::Red);
        assert!(out.contains(&Square::new(4, 3)));
        assert!(!out.contains(&Square::new(4, 2)));

        // Two pieces between: no capture.
        board.place(Square::new(4, 2), PieceKind::Soldier, Color::Red);
        let out = moves(&board, Square::new(4, 0), Color::Red);
        assert!(!out.contains(&Square::new(4, 3)));
        assert!(!out.contains(&Square::new(4, 2)));
    }

    #[test]
    fn capture_only_hits_first_piece_beyond_screen() {
        let mut board = Board::new_empty();
        board
            .place(Square::new(0, 4), PieceKind::Cannon, Color::Black)
            .place(Square::new(2, 4), PieceKind::Horse, Color::Black)
            .place(Square::new(5, 4), PieceKind::Soldier, Color::Red)
            .place(Square::new(8, 4), PieceKind::Chariot, Color::Red);

        let out = moves(&board, Square::new(0, 4), Color::Black);
        assert!(out.contains(&Square::new(1, 4)));
        assert!(!out.contains(&Square::new(3, 4)));
        assert!(out.contains(&Square::new(5, 4)));
        assert!(!out.contains(&Square::new(8, 4)));
    }

    #[test]
    fn friendly_piece_beyond_screen_ends_ray() {
        let mut board = Board::new_empty();
        board
            .place(Square::new(0, 0), PieceKind::Cannon, Color::Red)
            .place(Square::new(0, 2), PieceKind::Horse, Color::Black)
            .place(Square::new(0, 4), PieceKind::General, Color::Red)
            .place(Square::new(0, 6), PieceKind::Chariot, Color::Black);

        let out = moves(&board, Square::new(0, 0), Color::Red);
        assert!(!out.contains(&Square::new(0, 4)));
        assert!(!out.contains(&Square::new(0, 6)));
        assert!(out.contains(&Square::new(0, 1)));
    }
}
