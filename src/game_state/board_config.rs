//! Board geometry as an immutable configuration value.
//!
//! Dimensions, palace rectangles and the river line are carried by every
//! `Board`, so rule code never reaches for module-level literals. Row 0 is
//! Red's home rank; Red advances toward higher rows.

use crate::game_state::xiangqi_types::Color;

pub const BOARD_ROWS: i32 = 10;
pub const BOARD_COLS: i32 = 9;

/// Inclusive rectangle confining a general and its advisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PalaceBounds {
    pub row_min: i32,
    pub row_max: i32,
    pub col_min: i32,
    pub col_max: i32,
}

impl PalaceBounds {
    #[inline]
    pub const fn contains(&self, row: i32, col: i32) -> bool {
        row >= self.row_min && row <= self.row_max && col >= self.col_min && col <= self.col_max
    }
}

/// Split between the two halves. Red's half is `0..=red_last_row`, Black's
/// half is `black_first_row..rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiverBounds {
    pub red_last_row: i32,
    pub black_first_row: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: i32,
    pub cols: i32,
    pub red_palace: PalaceBounds,
    pub black_palace: PalaceBounds,
    pub river: RiverBounds,
}

impl BoardConfig {
    pub const STANDARD: BoardConfig = BoardConfig {
        rows: BOARD_ROWS,
        cols: BOARD_COLS,
        red_palace: PalaceBounds {
            row_min: 0,
            row_max: 2,
            col_min: 3,
            col_max: 5,
        },
        black_palace: PalaceBounds {
            row_min: 7,
            row_max: 9,
            col_min: 3,
            col_max: 5,
        },
        river: RiverBounds {
            red_last_row: 4,
            black_first_row: 5,
        },
    };

    #[inline]
    pub const fn cell_count(&self) -> usize {
        (self.rows * self.cols) as usize
    }

    #[inline]
    pub const fn is_in_board(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    #[inline]
    pub const fn palace(&self, color: Color) -> PalaceBounds {
        match color {
            Color::Red => self.red_palace,
            Color::Black => self.black_palace,
        }
    }

    #[inline]
    pub const fn is_in_palace(&self, row: i32, col: i32, color: Color) -> bool {
        self.palace(color).contains(row, col)
    }

    /// True once a piece of `color` standing on `row` is in the opponent's half.
    #[inline]
    pub const fn has_crossed_river(&self, row: i32, color: Color) -> bool {
        match color {
            Color::Red => row >= self.river.black_first_row,
            Color::Black => row <= self.river.red_last_row,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Gameplay options layered on top of the movement rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RulesConfig {
    /// Reject moves that leave the mover's own general attacked.
    pub forbid_self_check: bool,
}

impl RulesConfig {
    pub const FORBID_SELF_CHECK_ENV: &'static str = "PLUM_XIANGQI_FORBID_SELF_CHECK";

    pub fn from_env() -> Self {
        let forbid_self_check = match std::env::var(Self::FORBID_SELF_CHECK_ENV) {
            Ok(value) => parse_flag(&value),
            Err(_) => false,
        };
        Self { forbid_self_check }
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    ["1", "true", "yes", "on"]
        .iter()
        .any(|accepted| value.eq_ignore_ascii_case(accepted))
}
