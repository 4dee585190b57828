use crate::{lines::settle, LocalBoard, Move, Outcome, PlayError, Player};

/// A complete Ultimate Tic-Tac-Toe position.
///
/// Everything is stored in fixed-size arrays so copying a position is cheap.
/// Search and rollouts explore by copying, only `play` ever writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    pub boards: [LocalBoard; 9],
    /// Settled status of each local board, kept in sync by `play`.
    pub outcomes: [Outcome; 9],
    pub to_move: Player,
    /// The local board the next move has to be on, `None` for a free move.
    pub forced: Option<usize>,
    pub result: Outcome,
    /// Number of marks on the board.
    pub ply: u8,
}

impl Default for Game {
    fn default() -> Self {
        Game {
            boards: [LocalBoard::default(); 9],
            outcomes: [Outcome::InProgress; 9],
            to_move: Player::X,
            forced: None,
            result: Outcome::InProgress,
            ply: 0,
        }
    }
}

impl Game {
    pub fn is_over(&self) -> bool {
        self.result.is_settled()
    }

    /// The board the next move is restricted to.
    /// A forced board that is already decided counts as a free move.
    pub fn forced_board(&self) -> Option<usize> {
        self.forced
            .filter(|&board| self.outcomes.get(board).map_or(false, |outcome| !outcome.is_settled()))
    }

    pub fn local_outcome(&self, board: usize) -> Option<Outcome> {
        self.boards.get(board).map(LocalBoard::outcome)
    }

    pub fn meta_outcome(&self) -> Outcome {
        settle(&self.outcomes)
    }

    fn check(&self, mov: Move) -> Result<(), PlayError> {
        if self.is_over() {
            Err(PlayError::GameOver)
        } else if !mov.in_bounds() {
            Err(PlayError::OutOfBounds)
        } else if let Some(forced) = self.forced_board().filter(|&forced| forced != mov.board) {
            Err(PlayError::WrongBoard { forced })
        } else if self.outcomes[mov.board].is_settled() {
            Err(PlayError::BoardSettled)
        } else if self.boards[mov.board][(mov.row, mov.col)].is_some() {
            Err(PlayError::AlreadyOccupied)
        } else {
            Ok(())
        }
    }

    pub fn play(&mut self, mov: Move) -> Result<(), PlayError> {
        self.check(mov)?;

        let board = &mut self.boards[mov.board];
        board[(mov.row, mov.col)] = Some(self.to_move);
        self.outcomes[mov.board] = board.outcome();
        self.ply += 1;

        self.result = self.meta_outcome();
        if !self.is_over() {
            self.to_move = self.to_move.next();
            let target = mov.cell();
            self.forced = (!self.outcomes[target].is_settled()).then_some(target);
        }
        Ok(())
    }

    /// Play a move given as coordinates. Returns whether it was legal.
    pub fn apply_move(&mut self, board: usize, row: usize, col: usize) -> bool {
        self.play(Move::new(board, row, col)).is_ok()
    }

    /// The position after `mov`, leaving `self` untouched.
    pub fn after(&self, mov: Move) -> Result<Game, PlayError> {
        let mut next = *self;
        next.play(mov)?;
        Ok(next)
    }
}
