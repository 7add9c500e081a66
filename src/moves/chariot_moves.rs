use crate::game_state::xiangqi_types::{Board, Color, Square};
use crate::moves::move_shared::{ray, ORTHOGONAL_STEPS};

pub fn generate_chariot_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in ORTHOGONAL_STEPS {
        for to in ray(board, from, d_row, d_col) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(target) => {
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
    use super::generate_chariot_moves;
    use crate::game_state::xiangqi_types::{Board, Color, PieceKind, Square};

    fn moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
        let mut out = Vec::new();
        generate_chariot_moves(board, from, color, &mut out);
        out
    }

    #[test]
    fn open_board_chariot_sees_full_row_and_column() {
        let mut board = Board::new_empty();
        board.place(Square::new(4, 4), PieceKind::Chariot, Color::Red);
        let out = moves(&board, Square::new(4, 4), Color::Red);

        // 8 other columns + 9 other rows.
        assert_eq!(out.len(), 17);
        assert!(out.iter().all(|sq| sq.row == 4 || sq.col == 4));
    }

    #[test]
    fn chariot_stops_before_friend_and_on_enemy() {
        let mut board = Board::new_empty();
        board
            .place(Square::new(0, 0), PieceKind::Chariot, Color::Red)
            .place(Square::new(0, 3), PieceKind::Advisor, Color::Red)
            .place(Square::new(4, 0), PieceKind::Soldier, Color::Black);

        let out = moves(&board, Square::new(0, 0), Color::Red);
        assert!(out.contains(&Square::new(0, 2)));
        assert!(!out.contains(&Square::new(0, 3)));
        assert!(out.contains(&Square::new(4, 0)));
        assert!(!out.contains(&Square::new(5, 0)));
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn opening_chariot_moves_along_file_only() {
        let board = Board::new_game();
        let out = moves(&board, Square::new(0, 0), Color::Red);
        assert_eq!(out, vec![Square::new(1, 0), Square::new(2, 0)]);
    }
}
