//! Turn-taking game wrapper around the rules core.
//!
//! `XiangqiGame` owns the authoritative board for one game: it enforces
//! turn order, validates and applies moves, records history and detects the
//! end of the game (general captured, checkmate or resignation). Everything
//! rule-related is delegated to the pure functions in `move_generation`.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::GameError;
use crate::game_state::board_config::RulesConfig;
use crate::game_state::move_record::MoveRecord;
use crate::game_state::xiangqi_types::{Board, Color, Move, Piece, PieceKind};
use crate::move_generation::checkmate::is_checkmate;
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_checks::is_check;
use crate::move_generation::legal_move_validation::{
    is_valid_move, leaves_general_in_check, legal_moves,
};
use crate::move_generation::move_generator::pseudo_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    GeneralCaptured,
    Checkmate,
    Resignation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing,
    Won { winner: Color, reason: WinReason },
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub captured: Option<Piece>,
    pub gives_check: bool,
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct XiangqiGame {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
    history: Vec<MoveRecord>,
    rules: RulesConfig,
}

impl Default for XiangqiGame {
    fn default() -> Self {
        Self::new_game()
    }
}

impl XiangqiGame {
    /// Opening position, Red to move.
    pub fn new_game() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    pub fn with_rules(rules: RulesConfig) -> Self {
        Self::from_position(Board::new_game(), Color::Red, rules)
    }

    pub fn from_position(board: Board, side_to_move: Color, rules: RulesConfig) -> Self {
        Self {
            board,
            side_to_move,
            status: GameStatus::Ongoing,
            history: Vec::new(),
            rules,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Ongoing
    }

    /// Whether the side to move is currently in check.
    pub fn in_check(&self) -> bool {
        is_check(&self.board, self.side_to_move)
    }

    /// Moves the side to move may play under the configured rules.
    pub fn available_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        if self.rules.forbid_self_check {
            legal_moves(&self.board, self.side_to_move)
        } else {
            pseudo_legal_moves(&self.board, self.side_to_move)
        }
    }

    pub fn play(&mut self, player: Color, mv: Move) -> Result<MoveReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if player != self.side_to_move {
            return Err(GameError::NotYourTurn(player));
        }

        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(GameError::NoPieceAt(mv.from))?;

        if !is_valid_move(&self.board, mv, player) {
            return Err(GameError::IllegalMove(mv));
        }
        if self.rules.forbid_self_check && leaves_general_in_check(&self.board, mv, player) {
            return Err(GameError::LeavesGeneralInCheck(mv));
        }

        let captured = apply_move_in_place(&mut self.board, mv);
        let opponent = player.opposite();
        let gives_check = is_check(&self.board, opponent);

        self.status = if captured.is_some_and(|p| p.kind == PieceKind::General) {
            GameStatus::Won {
                winner: player,
                reason: WinReason::GeneralCaptured,
            }
        } else if gives_check && is_checkmate(&self.board, opponent) {
            GameStatus::Won {
                winner: player,
                reason: WinReason::Checkmate,
            }
        } else {
            GameStatus::Ongoing
        };

        self.history.push(MoveRecord {
            mv,
            piece,
            captured,
            gives_check,
            played_at: Utc::now(),
        });
        self.side_to_move = opponent;

        debug!(%player, %mv, %piece, ?captured, gives_check, "move applied");
        if let GameStatus::Won { winner, reason } = self.status {
            info!(%winner, ?reason, plies = self.history.len(), "game over");
        }

        Ok(MoveReport {
            captured,
            gives_check,
            status: self.status,
        })
    }

    pub fn resign(&mut self, player: Color) -> Result<GameStatus, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.status = GameStatus::Won {
            winner: player.opposite(),
            reason: WinReason::Resignation,
        };
        info!(%player, "resigned");
        Ok(self.status)
    }

    /// Takes back the last ply. Any recorded result, including a
    /// resignation, is cleared even when there is no ply to take back.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        self.status = GameStatus::Ongoing;
        let record = self.history.pop()?;
        self.board.set(record.mv.from, Some(record.piece));
        self.board.set(record.mv.to, record.captured);
        self.side_to_move = record.mover();
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::{GameStatus, WinReason, XiangqiGame};
    use crate::errors::GameError;
    use crate::game_state::board_config::RulesConfig;
    use crate::game_state::xiangqi_types::{Board, Color, Move, PieceKind, Square};

    #[test]
    fn turns_alternate_starting_with_red() {
        let mut game = XiangqiGame::new_game();
        assert_eq!(game.side_to_move(), Color::Red);

        assert_eq!(
            game.play(Color::Black, Move::from_coords(6, 4, 5, 4)),
            Err(GameError::NotYourTurn(Color::Black))
        );

        let report = game
            .play(Color::Red, Move::from_coords(3, 4, 4, 4))
            .expect("soldier advance should be accepted");
        assert_eq!(report.captured, None);
        assert!(!report.gives_check);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn invalid_moves_are_rejected_without_side_effects() {
        let mut game = XiangqiGame::new_game();
        let before = game.board().clone();

        assert_eq!(
            game.play(Color::Red, Move::from_coords(4, 4, 5, 4)),
            Err(GameError::NoPieceAt(Square::new(4, 4)))
        );
        assert_eq!(
            game.play(Color::Red, Move::from_coords(0, 0, 0, 2)),
            Err(GameError::IllegalMove(Move::from_coords(0, 0, 0, 2)))
        );
        assert_eq!(
            game.play(Color::Red, Move::from_coords(9, 0, 8, 0)),
            Err(GameError::IllegalMove(Move::from_coords(9, 0, 8, 0)))
        );
        assert_eq!(game.board(), &before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn capturing_the_general_ends_the_game() {
        let mut board = Board::new_empty();
        board
            .place(Square::new(0, 4), PieceKind::General, Color::Red)
            .place(Square::new(9, 3), PieceKind::General, Color::Black)
            .place(Square::new(5, 3), PieceKind::Chariot, Color::Red);
        let mut game = XiangqiGame::from_position(board, Color::Red, RulesConfig::default());

        let report = game
            .play(Color::Red, Move::from_coords(5, 3, 9, 3))
            .expect("chariot takes the general");
        assert_eq!(
            report.status,
            GameStatus::Won {
                winner: Color::Red,
                reason: WinReason::GeneralCaptured
            }
        );
        assert_eq!(
            game.play(Color::Black, Move::from_coords(0, 4, 1, 4)),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn delivering_mate_ends_the_game() {
        let mut board = Board::new_empty();
        board
            .place(Square::new(0, 4), PieceKind::General, Color::Red)
            .place(Square::new(5, 0), PieceKind::Chariot, Color::Black)
            .place(Square::new(1, 8), PieceKind::Chariot, Color::Black)
            .place(Square::new(9, 3), PieceKind::General, Color::Black);
        let mut game = XiangqiGame::from_position(board, Color::Black, RulesConfig::default());

        let report = game
            .play(Color::Black, Move::from_coords(5, 0, 0, 0))
            .expect("chariot drops to the back rank");
        assert!(report.gives_check);
        assert_eq!(
            report.status,
            GameStatus::Won {
                winner: Color::Black,
                reason: WinReason::Checkmate
            }
        );
        assert!(game.available_moves().is_empty());
    }

    #[test]
    fn self_check_is_only_rejected_when_configured() {
        let mut board = Board::new_empty();
        board
            .place(Square::new(0, 4), PieceKind::General, Color::Red)
            .place(Square::new(2, 4), PieceKind::Horse, Color::Red)
            .place(Square::new(7, 4), PieceKind::Chariot, Color::Black)
            .place(Square::new(9, 3), PieceKind::General, Color::Black);
        let exposing = Move::from_coords(2, 4, 4, 5);

        let mut lenient =
            XiangqiGame::from_position(board.clone(), Color::Red, RulesConfig::default());
        assert!(lenient.play(Color::Red, exposing).is_ok());

        let strict_rules = RulesConfig {
            forbid_self_check: true,
        };
        let mut strict = XiangqiGame::from_position(board, Color::Red, strict_rules);
        assert_eq!(
            strict.play(Color::Red, exposing),
            Err(GameError::LeavesGeneralInCheck(exposing))
        );
        assert!(!strict.available_moves().contains(&exposing));
    }

    #[test]
    fn undo_restores_captured_piece_and_turn() {
        let mut game = XiangqiGame::new_game();
        let start = game.board().clone();

        game.play(Color::Red, Move::from_coords(2, 1, 9, 1))
            .expect("cannon capture should be accepted");
        let record = game.undo().expect("one ply to take back");

        assert_eq!(record.captured.map(|p| p.kind), Some(PieceKind::Horse));
        assert_eq!(game.board(), &start);
        assert_eq!(game.side_to_move(), Color::Red);
        assert!(game.undo().is_none());
    }

    #[test]
    fn resignation_awards_the_opponent() {
        let mut game = XiangqiGame::new_game();
        assert_eq!(
            game.resign(Color::Red),
            Ok(GameStatus::Won {
                winner: Color::Black,
                reason: WinReason::Resignation
            })
        );
        assert!(game.is_over());
        assert_eq!(game.resign(Color::Black), Err(GameError::GameOver));
    }

    #[test]
    fn undo_clears_resignation_before_any_move() {
        let mut game = XiangqiGame::new_game();
        game.resign(Color::Red).expect("game is still running");

        assert!(game.undo().is_none());
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.side_to_move(), Color::Red);
        assert!(game
            .play(Color::Red, Move::from_coords(3, 4, 4, 4))
            .is_ok());
    }
}
