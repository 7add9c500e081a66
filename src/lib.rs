//! Crate root module declarations for the Plum Xiangqi rules engine.
//!
//! This file exposes the board model, per-piece move generation, the
//! check/checkmate rules core, the game wrapper, engines, the text front-end
//! and utility helpers so binaries, benches and external tooling can import
//! stable module paths.

pub mod game_state {
    pub mod board;
    pub mod board_config;
    pub mod game_state;
    pub mod move_record;
    pub mod xiangqi_rules;
    pub mod xiangqi_types;
}

pub mod moves {
    pub mod advisor_moves;
    pub mod cannon_moves;
    pub mod chariot_moves;
    pub mod elephant_moves;
    pub mod general_moves;
    pub mod horse_moves;
    pub mod move_shared;
    pub mod soldier_moves;
}

pub mod move_generation {
    pub mod checkmate;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_validation;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod protocol {
    pub mod text_protocol;
}

pub mod utils {
    pub mod board_json;
    pub mod position_generator;
    pub mod position_parser;
    pub mod render_board;
}

pub mod errors;

pub use game_state::xiangqi_rules::{BOARD_COLS, BOARD_ROWS};
pub use move_generation::checkmate::is_checkmate;
pub use move_generation::legal_move_checks::is_check;
pub use move_generation::legal_move_validation::is_valid_move;
pub use move_generation::move_generator::get_valid_moves;
