//! Mailbox board representation.
//!
//! `Board` stores one optional piece per cell in row-major order together
//! with the `BoardConfig` describing its geometry. It is plain owned data:
//! cloning it produces a fully independent copy, which is what the checkmate
//! search relies on when simulating candidate moves.

use crate::game_state::board_config::BoardConfig;
use crate::game_state::xiangqi_rules::STARTING_LAYOUT;
use crate::game_state::xiangqi_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    cells: Vec<Option<Piece>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::with_config(BoardConfig::STANDARD)
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            config,
            cells: vec![None; config.cell_count()],
        }
    }

    /// Standard opening setup.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for &(row, col, kind, color) in STARTING_LAYOUT.iter() {
            board.set(Square::new(row, col), Some(Piece::new(kind, color)));
        }
        board
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.config.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.config.cols
    }

    #[inline]
    pub fn is_in_board(&self, row: i32, col: i32) -> bool {
        self.config.is_in_board(row, col)
    }

    #[inline]
    pub fn is_in_palace(&self, row: i32, col: i32, color: Color) -> bool {
        self.config.is_in_palace(row, col, color)
    }

    #[inline]
    pub fn has_crossed_river(&self, row: i32, color: Color) -> bool {
        self.config.has_crossed_river(row, color)
    }

    #[inline]
    fn cell_index(&self, square: Square) -> Option<usize> {
        if self.config.is_in_board(square.row, square.col) {
            Some((square.row * self.config.cols + square.col) as usize)
        } else {
            None
        }
    }

    /// Piece on `square`, or `None` when the cell is empty or off-board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cell_index(square).and_then(|idx| self.cells[idx])
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Overwrites a cell and returns its previous content. Off-board writes
    /// are ignored.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        match self.cell_index(square) {
            Some(idx) => std::mem::replace(&mut self.cells[idx], piece),
            None => None,
        }
    }

    #[inline]
    pub fn place(&mut self, square: Square, kind: PieceKind, color: Color) -> &mut Self {
        self.set(square, Some(Piece::new(kind, color)));
        self
    }

    /// All occupied cells in row-major scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let cols = self.config.cols;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|piece| {
                let idx = idx as i32;
                (Square::new(idx / cols, idx % cols), piece)
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn find_piece(&self, kind: PieceKind, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == kind && piece.color == color)
            .map(|(square, _)| square)
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
