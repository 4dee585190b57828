use std::ops::{Index, IndexMut};

use crate::{lines::settle, Outcome, Player};

/// One of the nine ordinary tic-tac-toe boards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocalBoard {
    cells: [Option<Player>; 9],
}

impl Index<(usize, usize)> for LocalBoard {
    type Output = Option<Player>;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.cells.index(row * 3 + col)
    }
}

impl IndexMut<(usize, usize)> for LocalBoard {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        self.cells.index_mut(row * 3 + col)
    }
}

impl LocalBoard {
    pub const fn from_cells(cells: [Option<Player>; 9]) -> Self {
        LocalBoard { cells }
    }

    pub const fn cells(&self) -> &[Option<Player>; 9] {
        &self.cells
    }

    /// Get a cell, or `None` if the coordinates are off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Option<Player>> {
        (row < 3 && col < 3).then(|| self[(row, col)])
    }

    pub fn outcome(&self) -> Outcome {
        settle(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Empty cells as `(row, col)`, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| (i / 3, i % 3))
    }

    /// A copy of this board with one more mark on it.
    #[must_use]
    pub fn with(mut self, row: usize, col: usize, player: Player) -> Self {
        self[(row, col)] = Some(player);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_are_row_major() {
        let board = LocalBoard::default().with(0, 1, Player::X).with(2, 2, Player::O);
        let empty: Vec<_> = board.empty_cells().collect();
        assert_eq!(empty, vec![(0, 0), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1)]);
    }

    #[test]
    fn with_does_not_touch_the_original() {
        let board = LocalBoard::default().with(0, 0, Player::X).with(0, 1, Player::X);
        let won = board.with(0, 2, Player::X);
        assert_eq!(board.outcome(), Outcome::InProgress);
        assert_eq!(won.outcome(), Outcome::Won(Player::X));
    }

    #[test]
    fn full_only_when_every_cell_is_taken() {
        let (x, o) = (Some(Player::X), Some(Player::O));
        let cells = [x, o, x, x, o, o, o, x, None];
        let board = LocalBoard::from_cells(cells);
        assert!(!board.is_full());
        let board = board.with(2, 2, Player::X);
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Drawn);
    }

    #[test]
    fn get_out_of_range() {
        let board = LocalBoard::default();
        assert_eq!(board.get(1, 1), Some(None));
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 7), None);
    }
}
