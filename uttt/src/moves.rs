use std::{fmt::Display, str::FromStr};

use crate::ParseError;

/// A mark placed on cell `(row, col)` of local board `board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub board: usize,
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(board: usize, row: usize, col: usize) -> Self {
        Move { board, row, col }
    }

    /// Row-major index of the cell inside its local board.
    /// This is also the local board the opponent is sent to.
    pub const fn cell(self) -> usize {
        self.row * 3 + self.col
    }

    pub const fn in_bounds(self) -> bool {
        self.board < 9 && self.row < 3 && self.col < 3
    }

    pub const fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }

    pub const fn is_corner(self) -> bool {
        self.row != 1 && self.col != 1
    }
}

/// `board:rowcol`, so `4:11` is the center of the center board.
impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}{}", self.board, self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseError::BadMove(s.to_string());
        let (board, cell) = s.trim().split_once(':').ok_or_else(bad)?;
        let digit = |c: char| c.to_digit(10).map(|d| d as usize).ok_or_else(bad);

        let mut board_chars = board.chars();
        let board = digit(board_chars.next().ok_or_else(bad)?)?;
        let mut cell_chars = cell.chars();
        let row = digit(cell_chars.next().ok_or_else(bad)?)?;
        let col = digit(cell_chars.next().ok_or_else(bad)?)?;
        if board_chars.next().is_some() || cell_chars.next().is_some() {
            return Err(bad());
        }

        let mov = Move::new(board, row, col);
        if mov.in_bounds() {
            Ok(mov)
        } else {
            Err(bad())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation() {
        let mov: Move = "4:11".parse().unwrap();
        assert_eq!(mov, Move::new(4, 1, 1));
        assert!(mov.is_center());
        assert_eq!(mov.to_string(), "4:11");
        assert_eq!(" 0:22\n".parse::<Move>(), Ok(Move::new(0, 2, 2)));
    }

    #[test]
    fn bad_notation() {
        for s in ["", "4", "4:1", "9:00", "0:30", "0:03", "10:00", "0:000", "a:bc", "4-11"] {
            assert!(s.parse::<Move>().is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn corners() {
        let corners: Vec<_> = (0..9)
            .map(|cell| Move::new(0, cell / 3, cell % 3))
            .filter(|mov| mov.is_corner())
            .map(Move::cell)
            .collect();
        assert_eq!(corners, vec![0, 2, 6, 8]);
    }
}
