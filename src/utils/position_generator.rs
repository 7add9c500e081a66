use crate::game_state::xiangqi_types::{Board, Color, Piece, PieceKind, Square};

/// Writes `board` and `side_to_move` in the text form read by
/// `parse_position`.
pub fn generate_position(board: &Board, side_to_move: Color) -> String {
    let side = match side_to_move {
        Color::Red => "w",
        Color::Black => "b",
    };
    format!("{} {}", generate_board_field(board), side)
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in (0..board.rows()).rev() {
        let mut empty_count = 0u32;

        for col in 0..board.cols() {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    out.push(piece_to_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push_str(&empty_count.to_string());
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::General => 'k',
        PieceKind::Advisor => 'a',
        PieceKind::Elephant => 'b',
        PieceKind::Horse => 'n',
        PieceKind::Chariot => 'r',
        PieceKind::Cannon => 'c',
        PieceKind::Soldier => 'p',
    };
    match piece.color {
        Color::Red => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}
