use crate::{Outcome, Player};

/// Every way to get three in a row on a 3x3 grid, indexed row-major.
/// Rows come first, then columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Something that can sit in one of the nine cells of a 3x3 grid.
///
/// Local boards hold marks, the meta board holds the outcomes of the local boards.
/// A drawn local board is a meta cell that belongs to nobody and can never be taken.
pub trait Claim: Copy {
    fn owner(self) -> Option<Player>;
    fn is_open(self) -> bool;
}

impl Claim for Option<Player> {
    fn owner(self) -> Option<Player> {
        self
    }

    fn is_open(self) -> bool {
        self.is_none()
    }
}

impl Claim for Outcome {
    fn owner(self) -> Option<Player> {
        self.winner()
    }

    fn is_open(self) -> bool {
        !self.is_settled()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineCount {
    pub x: u8,
    pub o: u8,
    pub open: u8,
}

impl LineCount {
    pub const fn of(&self, player: Player) -> u8 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

/// Tally every line of the grid, in [`LINES`] order.
pub fn line_counts<C: Claim>(cells: &[C; 9]) -> impl Iterator<Item = LineCount> + '_ {
    LINES.iter().map(|line| {
        line.iter().fold(LineCount::default(), |mut count, &i| {
            match cells[i].owner() {
                Some(Player::X) => count.x += 1,
                Some(Player::O) => count.o += 1,
                None if cells[i].is_open() => count.open += 1,
                None => {}
            }
            count
        })
    })
}

/// The owner of the first complete line, if any.
pub fn three_in_a_row<C: Claim>(cells: &[C; 9]) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let owner = cells[a].owner()?;
        (cells[b].owner() == Some(owner) && cells[c].owner() == Some(owner)).then_some(owner)
    })
}

/// Decide a 3x3 grid. A line beats a full grid.
pub fn settle<C: Claim>(cells: &[C; 9]) -> Outcome {
    if let Some(player) = three_in_a_row(cells) {
        Outcome::Won(player)
    } else if cells.iter().all(|cell| !cell.is_open()) {
        Outcome::Drawn
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Player> = Some(Player::X);
    const O: Option<Player> = Some(Player::O);
    const E: Option<Player> = None;

    #[test]
    fn empty_grid_is_in_progress() {
        assert_eq!(settle(&[E; 9]), Outcome::InProgress);
        assert!(line_counts(&[E; 9]).all(|count| count == LineCount { x: 0, o: 0, open: 3 }));
    }

    #[test]
    fn every_line_wins() {
        for line in LINES {
            let mut cells = [E; 9];
            for i in line {
                cells[i] = O;
            }
            assert_eq!(settle(&cells), Outcome::Won(Player::O), "line {line:?}");
        }
    }

    #[test]
    fn full_grid_without_line_is_drawn() {
        let cells = [X, O, X, X, O, O, O, X, X];
        assert_eq!(three_in_a_row(&cells), None);
        assert_eq!(settle(&cells), Outcome::Drawn);
    }

    #[test]
    fn line_on_last_cell_beats_full_grid() {
        let cells = [X, O, X, O, X, O, O, X, X];
        assert_eq!(settle(&cells), Outcome::Won(Player::X));
    }

    #[test]
    fn drawn_meta_cell_is_neither_owned_nor_open() {
        let meta = [
            Outcome::Won(Player::X),
            Outcome::Drawn,
            Outcome::InProgress,
            Outcome::InProgress,
            Outcome::InProgress,
            Outcome::InProgress,
            Outcome::InProgress,
            Outcome::InProgress,
            Outcome::InProgress,
        ];
        let top_row = line_counts(&meta).next().unwrap();
        assert_eq!(top_row, LineCount { x: 1, o: 0, open: 1 });
        assert_eq!(settle(&meta), Outcome::InProgress);
    }

    #[test]
    fn meta_board_draws_when_everything_is_settled() {
        use Outcome::*;
        let meta = [
            Won(Player::X),
            Won(Player::O),
            Won(Player::X),
            Won(Player::X),
            Won(Player::O),
            Won(Player::O),
            Won(Player::O),
            Won(Player::X),
            Drawn,
        ];
        assert_eq!(settle(&meta), Drawn);
    }
}
