//! Perft node counting.
//!
//! Walks the move tree to a fixed depth and counts leaves, giving a cheap
//! end-to-end check of generation, application and check detection against
//! published reference numbers.

use crate::game_state::xiangqi_types::{Board, Color, Move, Piece, PieceKind};
use crate::move_generation::checkmate::is_checkmate;
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_checks::is_check;
use crate::move_generation::move_generator::{LegalMoveGenerator, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count using fully legal moves.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    perft_with(&LegalMoveGenerator, board, side, depth)
}

pub fn perft_with<G: MoveGenerator>(generator: &G, board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generator.generate_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut next = board.clone();
        let captured = apply_move_in_place(&mut next, mv);
        if is_general(captured) {
            // Game over; no leaves below this node.
            continue;
        }
        nodes += perft_with(generator, &next, side.opposite(), depth - 1);
    }
    nodes
}

/// Leaf count plus per-leaf statistics.
pub fn perft_detailed(board: &Board, side: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in LegalMoveGenerator.generate_moves(board, side) {
        perft_recurse(board, side, mv, depth, &mut total);
    }
    total
}

fn perft_recurse(board: &Board, side: Color, mv: Move, depth: u8, counts: &mut PerftCounts) {
    let mut next = board.clone();
    let captured = apply_move_in_place(&mut next, mv);

    if depth == 1 {
        let mut leaf = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        if captured.is_some() {
            leaf.captures = 1;
        }
        let opponent = side.opposite();
        if is_check(&next, opponent) {
            leaf.checks = 1;
            if is_checkmate(&next, opponent) {
                leaf.checkmates = 1;
            }
        }
        counts.merge(leaf);
        return;
    }

    if is_general(captured) {
        return;
    }

    for child in LegalMoveGenerator.generate_moves(&next, side.opposite()) {
        perft_recurse(&next, side.opposite(), child, depth - 1, counts);
    }
}

#[inline]
fn is_general(captured: Option<Piece>) -> bool {
    captured.is_some_and(|piece| piece.kind == PieceKind::General)
}
