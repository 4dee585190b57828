use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use uttt::{Game, Move, Player};

use super::eval::{evaluate, terminal_score};
use crate::config::DEFAULT_DEPTH;

/// Depth limited minimax with alpha-beta pruning.
///
/// Moves are shuffled before they are searched so that equally good moves
/// are not always resolved the same way. Seed the random source for
/// reproducible play.
#[derive(Clone, Debug)]
pub struct Minimax<R: Rng = StdRng> {
    pub depth: u32,
    rng: R,
    nodes: u64,
}

impl Minimax<StdRng> {
    pub fn from_entropy(depth: u32) -> Self {
        Minimax::new(depth, StdRng::from_entropy())
    }

    pub fn seeded(depth: u32, seed: u64) -> Self {
        Minimax::new(depth, StdRng::seed_from_u64(seed))
    }
}

impl Default for Minimax<StdRng> {
    fn default() -> Self {
        Minimax::from_entropy(DEFAULT_DEPTH)
    }
}

impl<R: Rng> Minimax<R> {
    pub fn new(depth: u32, rng: R) -> Self {
        Minimax { depth, rng, nodes: 0 }
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick the best move for the side to move, searching `depth` plies.
    /// Returns `None` only if there is nothing to play.
    pub fn best_move(&mut self, game: &Game, depth: u32) -> Option<Move> {
        self.nodes = 0;
        let player = game.to_move;
        let mut moves = game.legal_moves();
        moves.shuffle(&mut self.rng);

        let mut alpha = i32::MIN;
        let mut best: Option<(i32, Move)> = None;
        for mov in moves {
            let Ok(next) = game.after(mov) else { continue };
            let score = self.minimax(&next, depth.saturating_sub(1), alpha, i32::MAX, player);
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, mov));
            }
            alpha = alpha.max(score);
        }

        if let Some((score, mov)) = best {
            debug!("selected {mov} for {player} with score {score} after {} nodes", self.nodes);
        }
        best.map(|(_, mov)| mov)
    }

    fn minimax(&mut self, game: &Game, depth: u32, mut alpha: i32, mut beta: i32, player: Player) -> i32 {
        self.nodes += 1;

        if game.is_over() {
            return terminal_score(game.result, player, depth);
        }
        if depth == 0 {
            return evaluate(game, player);
        }

        let maximizing = game.to_move == player;
        let mut moves = game.legal_moves();
        moves.shuffle(&mut self.rng);

        let mut value = if maximizing { i32::MIN } else { i32::MAX };
        for mov in moves {
            let Ok(next) = game.after(mov) else { continue };
            let score = self.minimax(&next, depth - 1, alpha, beta, player);
            if maximizing {
                value = value.max(score);
                alpha = alpha.max(score);
            } else {
                value = value.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        value
    }
}
