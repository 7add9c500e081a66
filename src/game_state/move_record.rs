use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game_state::xiangqi_types::{Color, Move, Piece};

/// One played ply, with enough information to take it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub gives_check: bool,
    pub played_at: DateTime<Utc>,
}

impl MoveRecord {
    #[inline]
    pub fn mover(&self) -> Color {
        self.piece.color
    }
}
