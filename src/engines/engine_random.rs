//! Random-move engine.
//!
//! Picks uniformly among the moves that keep the mover's general safe. Used
//! for diagnostics, self-play smoke tests and as the front-end's default
//! opponent.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::xiangqi_types::{Board, Color};
use crate::move_generation::move_generator::{LegalMoveGenerator, MoveGenerator};

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: Option<StdRng>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: None,
        }
    }

    /// Deterministic variant for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumXiangqi Random"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> Result<EngineOutput, String> {
        let legal_moves = self.move_generator.generate_moves(board, side);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let picked = match self.rng.as_mut() {
            Some(rng) => legal_moves.choose(rng),
            None => legal_moves.choose(&mut rand::rng()),
        }
        .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}
