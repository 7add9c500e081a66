//! Line-oriented text front-end and command loop.
//!
//! Holds one game, parses commands from stdin, routes `go` to the configured
//! engine and writes plain-text replies. Commands:
//! `new`, `position <text>`, `board`, `moves <row> <col>`,
//! `move <fr> <fc> <tr> <tc>`, `go`, `undo`, `resign`, `status`, `json`,
//! `quit`.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::board_config::RulesConfig;
use crate::game_state::game_state::{GameStatus, WinReason, XiangqiGame};
use crate::game_state::xiangqi_types::{Move, Square};
use crate::move_generation::move_generator::valid_moves_from;
use crate::utils::board_json::board_to_json;
use crate::utils::position_generator::generate_position;
use crate::utils::position_parser::parse_position;
use crate::utils::render_board::render_board;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut state = ProtocolState::new(RulesConfig::from_env());

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = state.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct ProtocolState {
    game: XiangqiGame,
    rules: RulesConfig,
    engine: Box<dyn Engine>,
}

impl ProtocolState {
    fn new(rules: RulesConfig) -> Self {
        Self::with_engine(rules, Box::new(RandomEngine::new()))
    }

    fn with_engine(rules: RulesConfig, engine: Box<dyn Engine>) -> Self {
        debug!(engine = engine.name(), ?rules, "text front-end ready");
        Self {
            game: XiangqiGame::with_rules(rules),
            rules,
            engine,
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match cmd {
            "new" => {
                self.game = XiangqiGame::with_rules(self.rules);
                self.engine.new_game();
                writeln!(out, "ok")?;
            }
            "position" => {
                let text = trimmed["position".len()..].trim();
                match parse_position(text) {
                    Ok(parsed) => {
                        self.game = XiangqiGame::from_position(
                            parsed.board,
                            parsed.side_to_move,
                            self.rules,
                        );
                        self.engine.new_game();
                        writeln!(out, "ok")?;
                    }
                    Err(err) => writeln!(out, "error: {}", err)?,
                }
            }
            "board" => {
                writeln!(out, "{}", render_board(self.game.board()))?;
            }
            "moves" => match parse_numbers::<2>(&args) {
                Ok([row, col]) => {
                    let targets = valid_moves_from(self.game.board(), Square::new(row, col));
                    let listed: Vec<String> = targets.iter().map(ToString::to_string).collect();
                    writeln!(out, "moves {}", listed.join(" "))?;
                }
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            "move" => match parse_numbers::<4>(&args) {
                Ok([fr, fc, tr, tc]) => {
                    self.play_and_report(Move::from_coords(fr, fc, tr, tc), out)?;
                }
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            "go" => {
                if let Err(err) = self.handle_go(out) {
                    writeln!(out, "error: {}", err)?;
                    writeln!(out, "bestmove none")?;
                }
            }
            "undo" => match self.game.undo() {
                Some(record) => writeln!(out, "undone {}", record.mv)?,
                None => writeln!(out, "error: nothing to undo")?,
            },
            "resign" => {
                let side = self.game.side_to_move();
                match self.game.resign(side) {
                    Ok(status) => writeln!(out, "status {}", describe_status(status))?,
                    Err(err) => writeln!(out, "error: {}", err)?,
                }
            }
            "status" => {
                writeln!(out, "side {}", self.game.side_to_move())?;
                writeln!(out, "in_check {}", self.game.in_check())?;
                writeln!(out, "status {}", describe_status(self.game.status()))?;
                writeln!(
                    out,
                    "position {}",
                    generate_position(self.game.board(), self.game.side_to_move())
                )?;
            }
            "json" => match board_to_json(self.game.board()) {
                Ok(text) => writeln!(out, "{}", text)?,
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            "quit" => {
                return Ok(true);
            }
            _ => {
                warn!(command = cmd, "unknown command");
                writeln!(out, "error: unknown command '{}'", cmd)?;
            }
        }

        Ok(false)
    }

    fn handle_go(&mut self, out: &mut impl Write) -> io::Result<()> {
        let side = self.game.side_to_move();
        let output = self
            .engine
            .choose_move(self.game.board(), side)
            .map_err(io::Error::other)?;

        for line in &output.info_lines {
            writeln!(out, "{}", line)?;
        }

        match output.best_move {
            Some(mv) => {
                writeln!(out, "bestmove {}", mv)?;
                self.play_and_report(mv, out)
            }
            None => writeln!(out, "bestmove none"),
        }
    }

    fn play_and_report(&mut self, mv: Move, out: &mut impl Write) -> io::Result<()> {
        let side = self.game.side_to_move();
        match self.game.play(side, mv) {
            Ok(report) => {
                let mut line = format!("played {}", mv);
                if let Some(captured) = report.captured {
                    line.push_str(&format!(" captures {}", captured));
                }
                if report.gives_check {
                    line.push_str(" check");
                }
                writeln!(out, "{}", line)?;
                if report.status != GameStatus::Ongoing {
                    writeln!(out, "status {}", describe_status(report.status))?;
                }
                Ok(())
            }
            Err(err) => writeln!(out, "error: {}", err),
        }
    }
}

fn parse_numbers<const N: usize>(args: &[&str]) -> Result<[i32; N], String> {
    if args.len() != N {
        return Err(format!("expected {} numbers, found {}", N, args.len()));
    }
    let mut values = [0i32; N];
    for (slot, arg) in values.iter_mut().zip(args) {
        *slot = arg
            .parse::<i32>()
            .map_err(|_| format!("invalid number '{}'", arg))?;
    }
    Ok(values)
}

fn describe_status(status: GameStatus) -> String {
    match status {
        GameStatus::Ongoing => "ongoing".to_owned(),
        GameStatus::Won { winner, reason } => {
            let reason = match reason {
                WinReason::GeneralCaptured => "general_captured",
                WinReason::Checkmate => "checkmate",
                WinReason::Resignation => "resignation",
            };
            format!("{} wins by {}", winner, reason)
        }
    }
}
