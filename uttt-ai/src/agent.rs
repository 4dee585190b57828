use rand::Rng;
use uttt::{Game, Move};

use crate::{Minimax, Rollouts};

/// Anything that can choose a move in a position.
pub trait Agent {
    /// A legal move for the side to move, or `None` when the game is over.
    fn select_move(&mut self, game: &Game) -> Option<Move>;
}

impl<R: Rng> Agent for Minimax<R> {
    fn select_move(&mut self, game: &Game) -> Option<Move> {
        let depth = self.depth;
        self.best_move(game, depth)
    }
}

/// Plays a single heuristically weighted random move, like one step of a rollout.
impl<R: Rng> Agent for Rollouts<R> {
    fn select_move(&mut self, game: &Game) -> Option<Move> {
        self.pick_move(game)
    }
}
