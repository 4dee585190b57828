use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    GameOver,
    OutOfBounds,
    WrongBoard { forced: usize },
    BoardSettled,
    AlreadyOccupied,
}

impl Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::GameOver => write!(f, "the game is already over"),
            PlayError::OutOfBounds => write!(f, "given cell is not on the board"),
            PlayError::WrongBoard { forced } => write!(f, "the move has to be played on board {forced}"),
            PlayError::BoardSettled => write!(f, "cannot play on a local board that is already decided"),
            PlayError::AlreadyOccupied => {
                write!(f, "cannot place a mark in that cell because it is already occupied")
            }
        }
    }
}

impl Error for PlayError {}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseError {
    Missing(&'static str),
    BoardCount(usize),
    CellCount { board: usize, cells: usize },
    UnknownMark(char),
    UnknownPlayer(String),
    UnknownBoard(String),
    ForcedSettled(usize),
    Trailing(String),
    BadMove(String),
    UnknownTimeControl(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Missing(part) => write!(f, "position is missing the {part}"),
            ParseError::BoardCount(count) => write!(f, "expected 9 local boards, found {count}"),
            ParseError::CellCount { board, cells } => {
                write!(f, "expected 9 cells on board {board}, found {cells}")
            }
            ParseError::UnknownMark(c) => write!(f, "unknown mark {c:?}, expected 'x', 'o' or '.'"),
            ParseError::UnknownPlayer(s) => write!(f, "unknown player {s:?}, expected 'x' or 'o'"),
            ParseError::UnknownBoard(s) => write!(f, "unknown forced board {s:?}, expected 0-8 or '-'"),
            ParseError::ForcedSettled(board) => write!(f, "forced board {board} is already decided"),
            ParseError::Trailing(s) => write!(f, "unexpected trailing input {s:?}"),
            ParseError::BadMove(s) => write!(f, "couldn't parse move {s:?}, expected board:rowcol"),
            ParseError::UnknownTimeControl(s) => {
                write!(f, "unknown time control {s:?}, expected 3m, 5m or 10m")
            }
        }
    }
}

impl Error for ParseError {}
