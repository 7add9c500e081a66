//! JSON cell-grid form of a board.
//!
//! A board is an array of rows, each an array of cells that are `null` or
//! `{"type": .., "color": .., "row": .., "col": ..}`. The coordinates inside
//! a cell are redundant: they are written out but the grid position wins on
//! input.

use serde::{Deserialize, Serialize};

use crate::errors::BoardJsonError;
use crate::game_state::xiangqi_types::{Board, Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonCell {
    #[serde(rename = "type")]
    kind: PieceKind,
    color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    row: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    col: Option<i32>,
}

type JsonGrid = Vec<Vec<Option<JsonCell>>>;

fn board_to_grid(board: &Board) -> JsonGrid {
    (0..board.rows())
        .map(|row| {
            (0..board.cols())
                .map(|col| {
                    board.piece_at(Square::new(row, col)).map(|piece| JsonCell {
                        kind: piece.kind,
                        color: piece.color,
                        row: Some(row),
                        col: Some(col),
                    })
                })
                .collect()
        })
        .collect()
}

fn grid_to_board(grid: JsonGrid) -> Result<Board, BoardJsonError> {
    let mut board = Board::new_empty();
    let rows = board.rows() as usize;
    let cols = board.cols() as usize;

    if grid.len() != rows {
        return Err(BoardJsonError::RowCount {
            expected: rows,
            found: grid.len(),
        });
    }

    for (row, cells) in grid.into_iter().enumerate() {
        if cells.len() != cols {
            return Err(BoardJsonError::ColumnCount {
                row,
                expected: cols,
                found: cells.len(),
            });
        }
        for (col, cell) in cells.into_iter().enumerate() {
            if let Some(cell) = cell {
                board.set(
                    Square::new(row as i32, col as i32),
                    Some(Piece::new(cell.kind, cell.color)),
                );
            }
        }
    }

    Ok(board)
}

pub fn board_to_json(board: &Board) -> Result<String, BoardJsonError> {
    Ok(serde_json::to_string(&board_to_grid(board))?)
}

pub fn board_to_value(board: &Board) -> Result<serde_json::Value, BoardJsonError> {
    Ok(serde_json::to_value(board_to_grid(board))?)
}

pub fn board_from_json(text: &str) -> Result<Board, BoardJsonError> {
    let grid: JsonGrid = serde_json::from_str(text)?;
    grid_to_board(grid)
}

pub fn board_from_value(value: serde_json::Value) -> Result<Board, BoardJsonError> {
    let grid: JsonGrid = serde_json::from_value(value)?;
    grid_to_board(grid)
}
