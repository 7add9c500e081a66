//! Piece-kind dispatch and whole-side move generation.
//!
//! `get_valid_moves` routes a piece to its movement rule and returns the
//! pseudo-legal destinations. The `MoveGenerator` trait lets perft and the
//! engines choose between pseudo-legal and fully legal generation.

use crate::game_state::xiangqi_types::{Board, Color, Move, Piece, PieceKind, Square};
use crate::move_generation::legal_move_validation::legal_moves;
use crate::moves::advisor_moves::generate_advisor_moves;
use crate::moves::cannon_moves::generate_cannon_moves;
use crate::moves::chariot_moves::generate_chariot_moves;
use crate::moves::elephant_moves::generate_elephant_moves;
use crate::moves::general_moves::generate_general_moves;
use crate::moves::horse_moves::generate_horse_moves;
use crate::moves::soldier_moves::generate_soldier_moves;

/// Appends the pseudo-legal destinations of `piece` standing on `from`.
/// An off-board `from` yields nothing.
pub fn generate_piece_moves(board: &Board, piece: Piece, from: Square, out: &mut Vec<Square>) {
    if !board.is_in_board(from.row, from.col) {
        return;
    }
    let color = piece.color;
    match piece.kind {
        PieceKind::General => generate_general_moves(board, from, color, out),
        PieceKind::Advisor => generate_advisor_moves(board, from, color, out),
        PieceKind::Elephant => generate_elephant_moves(board, from, color, out),
        PieceKind::Horse => generate_horse_moves(board, from, color, out),
        PieceKind::Chariot => generate_chariot_moves(board, from, color, out),
        PieceKind::Cannon => generate_cannon_moves(board, from, color, out),
        PieceKind::Soldier => generate_soldier_moves(board, from, color, out),
    }
}

/// Pseudo-legal destinations for `piece` on `from`. Moves that would leave
/// the mover's own general attacked are included.
pub fn get_valid_moves(board: &Board, piece: Piece, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(17);
    generate_piece_moves(board, piece, from, &mut out);
    out
}

/// Destinations of whatever stands on `from`; empty for an empty or
/// off-board square.
pub fn valid_moves_from(board: &Board, from: Square) -> Vec<Square> {
    match board.piece_at(from) {
        Some(piece) => get_valid_moves(board, piece, from),
        None => Vec::new(),
    }
}

/// Every pseudo-legal move of `color`, in board scan order.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    let mut targets = Vec::with_capacity(17);

    for (from, piece) in board.pieces_of(color) {
        targets.clear();
        generate_piece_moves(board, piece, from, &mut targets);
        moves.extend(targets.iter().map(|&to| Move::new(from, to)));
    }

    moves
}

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, board: &Board, side: Color) -> Vec<Move>;
}

/// Movement rules only.
pub struct PseudoLegalMoveGenerator;

/// Movement rules plus "may not leave own general attacked".
pub struct LegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, board: &Board, side: Color) -> Vec<Move> {
        pseudo_legal_moves(board, side)
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, board: &Board, side: Color) -> Vec<Move> {
        legal_moves(board, side)
    }
}
