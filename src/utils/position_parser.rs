//! Position-text parser.
//!
//! Reads FEN-style Xiangqi text: ranks from row 9 (Black's home) down to
//! row 0 (Red's home) separated by `/`, digits for runs of empty cells,
//! uppercase for Red and lowercase for Black, then an optional side-to-move
//! field. Trailing move counters are accepted and ignored.

use crate::errors::PositionError;
use crate::game_state::xiangqi_types::{Board, Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPosition {
    pub board: Board,
    pub side_to_move: Color,
}

pub fn parse_position(text: &str) -> Result<ParsedPosition, PositionError> {
    let mut parts = text.split_whitespace();
    let board_part = parts.next().ok_or(PositionError::Empty)?;

    let mut board = Board::new_empty();
    parse_board(board_part, &mut board)?;

    let side_to_move = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => Color::Red,
    };

    Ok(ParsedPosition {
        board,
        side_to_move,
    })
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), PositionError> {
    let rows = board.rows() as usize;
    let cols = board.cols() as usize;

    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != rows {
        return Err(PositionError::RankCount {
            expected: rows,
            found: ranks.len(),
        });
    }

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = (rows - 1 - rank_idx) as i32;
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(run) = ch.to_digit(10) {
                if run == 0 {
                    return Err(PositionError::InvalidEmptyRun(ch));
                }
                col += run as usize;
                continue;
            }

            let piece = piece_from_char(ch).ok_or(PositionError::InvalidPiece(ch))?;
            if col >= cols {
                return Err(PositionError::RankWidth {
                    rank: rank_idx,
                    width: col + 1,
                    expected: cols,
                });
            }

            board.set(Square::new(row, col as i32), Some(piece));
            col += 1;
        }

        if col != cols {
            return Err(PositionError::RankWidth {
                rank: rank_idx,
                width: col,
                expected: cols,
            });
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, PositionError> {
    match side_part {
        "w" | "r" => Ok(Color::Red),
        "b" => Ok(Color::Black),
        _ => Err(PositionError::InvalidSide(side_part.to_owned())),
    }
}

pub fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Red
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'k' => PieceKind::General,
        'a' => PieceKind::Advisor,
        'b' | 'e' => PieceKind::Elephant,
        'n' | 'h' => PieceKind::Horse,
        'r' => PieceKind::Chariot,
        'c' => PieceKind::Cannon,
        'p' => PieceKind::Soldier,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}

#[cfg(test)]
mod tests {
    use super::parse_position;
    use crate::errors::PositionError;
    use crate::game_state::xiangqi_rules::STARTING_POSITION;
    use crate::game_state::xiangqi_types::{Board, Color, Piece, PieceKind, Square};
    use crate::utils::render_board::render_board;

    #[test]
    fn starting_text_matches_built_opening() {
        let parsed = parse_position(STARTING_POSITION).expect("starting position should parse");

        println!("\n{}", render_board(&parsed.board));

        assert_eq!(parsed.board, Board::new_game());
        assert_eq!(parsed.side_to_move, Color::Red);
    }

    #[test]
    fn aliases_and_trailing_counters_are_accepted() {
        let parsed = parse_position("4k4/9/9/9/9/9/9/9/9/3HE4 b - - 0 1")
            .expect("alias letters should parse");

        assert_eq!(parsed.side_to_move, Color::Black);
        assert_eq!(
            parsed.board.piece_at(Square::new(0, 3)),
            Some(Piece::new(PieceKind::Horse, Color::Red))
        );
        assert_eq!(
            parsed.board.piece_at(Square::new(0, 4)),
            Some(Piece::new(PieceKind::Elephant, Color::Red))
        );
        assert_eq!(
            parsed.board.piece_at(Square::new(9, 4)),
            Some(Piece::new(PieceKind::General, Color::Black))
        );
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert_eq!(parse_position("   "), Err(PositionError::Empty));
        assert_eq!(
            parse_position("9/9/9"),
            Err(PositionError::RankCount {
                expected: 10,
                found: 3
            })
        );
        assert_eq!(
            parse_position("4k3/9/9/9/9/9/9/9/9/4K4"),
            Err(PositionError::RankWidth {
                rank: 0,
                width: 8,
                expected: 9
            })
        );
        assert_eq!(
            parse_position("4x4/9/9/9/9/9/9/9/9/4K4"),
            Err(PositionError::InvalidPiece('x'))
        );
        assert_eq!(
            parse_position("4k4/9/9/9/9/9/9/9/9/4K4 x"),
            Err(PositionError::InvalidSide("x".to_owned()))
        );
    }
}
