//! Canonical Xiangqi rule constants.
//!
//! Holds the standard opening both as position text and as a placement
//! table, using the row-0-is-Red orientation of `BoardConfig::STANDARD`.

use crate::game_state::xiangqi_types::{Color, PieceKind};

pub use crate::game_state::board_config::{BOARD_COLS, BOARD_ROWS};

/// Standard opening, Red to move. Ranks are listed from row 9 down to row 0.
pub const STARTING_POSITION: &str =
    "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w";

const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::General,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

/// `(row, col, kind, color)` for each of the 32 opening pieces.
pub const STARTING_LAYOUT: [(i32, i32, PieceKind, Color); 32] = build_starting_layout();

const fn build_starting_layout() -> [(i32, i32, PieceKind, Color); 32] {
    let mut layout = [(0, 0, PieceKind::General, Color::Red); 32];
    let mut n = 0usize;
    let mut side = 0usize;

    while side < 2 {
        let (color, back_row, cannon_row, soldier_row) = if side == 0 {
            (Color::Red, 0, 2, 3)
        } else {
            (Color::Black, 9, 7, 6)
        };

        let mut col = 0usize;
        while col < 9 {
            layout[n] = (back_row, col as i32, BACK_RANK[col], color);
            n += 1;
            col += 1;
        }

        layout[n] = (cannon_row, 1, PieceKind::Cannon, color);
        layout[n + 1] = (cannon_row, 7, PieceKind::Cannon, color);
        n += 2;

        let mut col = 0i32;
        while col < 9 {
            layout[n] = (soldier_row, col, PieceKind::Soldier, color);
            n += 1;
            col += 2;
        }

        side += 1;
    }

    layout
}
