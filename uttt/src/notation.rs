use std::{fmt::Display, str::FromStr};

use crate::{lines::settle, Game, LocalBoard, Outcome, ParseError, Player};

fn mark_char(mark: Option<Player>) -> char {
    match mark {
        Some(Player::X) => 'x',
        Some(Player::O) => 'o',
        None => '.',
    }
}

fn parse_board(index: usize, s: &str) -> Result<LocalBoard, ParseError> {
    let marks = s
        .chars()
        .map(|c| match c {
            'x' | 'X' => Ok(Some(Player::X)),
            'o' | 'O' => Ok(Some(Player::O)),
            '.' => Ok(None),
            _ => Err(ParseError::UnknownMark(c)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    let len = marks.len();
    let cells: [Option<Player>; 9] = marks
        .try_into()
        .map_err(|_| ParseError::CellCount { board: index, cells: len })?;
    Ok(LocalBoard::from_cells(cells))
}

/// Positions are written as nine boards of nine cells separated by `/`,
/// then the side to move and the forced board (`-` for a free move):
///
/// `xx.oo..../........./........./........./........./........./........./........./......... x 0`
impl FromStr for Game {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();

        let boards = parts
            .next()
            .ok_or(ParseError::Missing("boards"))?
            .split('/')
            .enumerate()
            .map(|(i, board)| parse_board(i, board))
            .collect::<Result<Vec<_>, _>>()?;
        let count = boards.len();
        let boards: [LocalBoard; 9] = boards.try_into().map_err(|_| ParseError::BoardCount(count))?;

        let to_move = match parts.next().ok_or(ParseError::Missing("side to move"))? {
            "x" | "X" => Player::X,
            "o" | "O" => Player::O,
            other => return Err(ParseError::UnknownPlayer(other.to_string())),
        };

        let forced = match parts.next().ok_or(ParseError::Missing("forced board"))? {
            "-" => None,
            other => match other.parse::<usize>() {
                Ok(board) if board < 9 => Some(board),
                _ => return Err(ParseError::UnknownBoard(other.to_string())),
            },
        };

        if let Some(rest) = parts.next() {
            return Err(ParseError::Trailing(rest.to_string()));
        }

        let outcomes = boards.map(|board| board.outcome());
        let result = settle(&outcomes);
        if let Some(board) = forced {
            if outcomes[board].is_settled() && !result.is_settled() {
                return Err(ParseError::ForcedSettled(board));
            }
        }
        let ply = boards
            .iter()
            .flat_map(|board| board.cells().iter())
            .filter(|cell| cell.is_some())
            .count() as u8;

        Ok(Game {
            boards,
            outcomes,
            to_move,
            forced,
            result,
            ply,
        })
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, board) in self.boards.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for &cell in board.cells() {
                write!(f, "{}", mark_char(cell))?;
            }
        }
        write!(f, " {}", mark_char(Some(self.to_move)))?;
        match self.forced {
            Some(board) => write!(f, " {board}"),
            None => write!(f, " -"),
        }
    }
}

impl Game {
    /// Human readable 9x9 grid followed by the meta board and the game status.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        for big_row in 0..3 {
            if big_row > 0 {
                out.push_str("------+-------+------\n");
            }
            for row in 0..3 {
                let line = (0..3)
                    .map(|big_col| {
                        let board = &self.boards[big_row * 3 + big_col];
                        (0..3)
                            .map(|col| mark_char(board[(row, col)]).to_string())
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect::<Vec<_>>()
                    .join(" | ");
                out.push_str(&line);
                out.push('\n');
            }
        }

        out.push_str("\nmeta: ");
        for (i, outcome) in self.outcomes.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                out.push_str(" / ");
            }
            out.push(match outcome {
                Outcome::Won(Player::X) => 'X',
                Outcome::Won(Player::O) => 'O',
                Outcome::Drawn => '#',
                Outcome::InProgress => '.',
            });
        }
        out.push('\n');

        match self.result {
            Outcome::Won(player) => out.push_str(&format!("{player} won\n")),
            Outcome::Drawn => out.push_str("draw\n"),
            Outcome::InProgress => match self.forced_board() {
                Some(board) => out.push_str(&format!("{} to move on board {board}\n", self.to_move)),
                None => out.push_str(&format!("{} to move anywhere\n", self.to_move)),
            },
        }
        out
    }
}
