//! Error types for the fallible edges of the crate.
//!
//! The rules core (`get_valid_moves`, `is_valid_move`, `is_check`,
//! `is_checkmate`) is total and never returns these. They are produced by
//! position-text parsing, JSON board conversion and the game layer.

use thiserror::Error;

use crate::game_state::xiangqi_types::{Color, Move, Square};

/// Malformed position text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("position text is empty")]
    Empty,

    #[error("expected {expected} ranks, found {found}")]
    RankCount { expected: usize, found: usize },

    #[error("rank {rank} spans {width} columns, expected {expected}")]
    RankWidth {
        rank: usize,
        width: usize,
        expected: usize,
    },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("invalid empty-run digit '{0}'")]
    InvalidEmptyRun(char),

    #[error("invalid side-to-move field: {0}")]
    InvalidSide(String),
}

/// Failure converting a board from its JSON cell grid.
#[derive(Debug, Error)]
pub enum BoardJsonError {
    #[error("board JSON could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("board has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A move rejected by the game layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,

    #[error("not {0}'s turn")]
    NotYourTurn(Color),

    #[error("no piece on {0}")]
    NoPieceAt(Square),

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("move {0} leaves the general in check")]
    LeavesGeneralInCheck(Move),
}
