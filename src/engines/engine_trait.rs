//! Engine abstraction used by the text front-end.
//!
//! Any move-picking strategy sits behind `Engine` so the protocol loop can
//! ask for a move without knowing how it is chosen.

use crate::game_state::xiangqi_types::{Board, Color, Move};

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board, side: Color) -> Result<EngineOutput, String>;
}
