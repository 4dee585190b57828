use arrayvec::ArrayVec;

use crate::{Game, Move};

/// There are never more than 81 moves available.
pub type Moves = ArrayVec<Move, 81>;

impl Game {
    /// Local boards the side to move may play on.
    pub fn playable_boards(&self) -> impl Iterator<Item = usize> + '_ {
        let forced = self.forced_board();
        (0..9).filter(move |&board| {
            !self.is_over()
                && !self.outcomes[board].is_settled()
                && forced.map_or(true, |forced| forced == board)
        })
    }

    /// Every legal move, board-major then row-major.
    pub fn legal_moves(&self) -> Moves {
        let mut moves = Moves::new();
        for board in self.playable_boards() {
            for (row, col) in self.boards[board].empty_cells() {
                moves.push(Move::new(board, row, col));
            }
        }
        moves
    }
}
