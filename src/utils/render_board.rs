//! Terminal-oriented board renderer.
//!
//! Draws the board with Chinese piece glyphs for debugging, tests and the
//! text front-end. Row 9 (Black's home) is printed at the top.

use crate::game_state::xiangqi_types::{Board, Color, Piece, PieceKind, Square};

/// Render the board to a string. Empty cells are `·`; the river is a blank
/// separator line between rows 5 and 4.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    let header = column_header(board.cols());

    out.push_str(&header);
    out.push('\n');

    for row in (0..board.rows()).rev() {
        out.push_str(&format!("{row} "));

        for col in 0..board.cols() {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece_glyph(piece)),
                None => out.push('·'),
            }
            if col + 1 < board.cols() {
                out.push(' ');
            }
        }

        out.push_str(&format!(" {row}\n"));

        if row == board.config().river.black_first_row {
            out.push_str("  ~~~~~~~~~~~~~~~~~\n");
        }
    }

    out.push_str(&header);
    out
}

fn column_header(cols: i32) -> String {
    let labels: Vec<String> = (0..cols).map(|col| col.to_string()).collect();
    format!("  {}", labels.join(" "))
}

pub fn piece_glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Red, PieceKind::General) => '帅',
        (Color::Red, PieceKind::Advisor) => '仕',
        (Color::Red, PieceKind::Elephant) => '相',
        (Color::Red, PieceKind::Horse) => '马',
        (Color::Red, PieceKind::Chariot) => '车',
        (Color::Red, PieceKind::Cannon) => '炮',
        (Color::Red, PieceKind::Soldier) => '兵',
        (Color::Black, PieceKind::General) => '将',
        (Color::Black, PieceKind::Advisor) => '士',
        (Color::Black, PieceKind::Elephant) => '象',
        (Color::Black, PieceKind::Horse) => '马',
        (Color::Black, PieceKind::Chariot) => '车',
        (Color::Black, PieceKind::Cannon) => '炮',
        (Color::Black, PieceKind::Soldier) => '卒',
    }
}
