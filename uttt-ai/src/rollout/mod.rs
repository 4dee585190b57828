mod weights;

use std::{panic, thread};

use arrayvec::ArrayVec;
use log::{debug, warn};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use rand_distr::{Distribution, WeightedIndex};
use uttt::{Game, Move, Outcome, Player};

pub use weights::{creates_meta_threat, move_weight};

use crate::{config::MAX_ROLLOUT_PLIES, Tally};

/// Estimated chances for the side to move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Probabilities {
    pub win: f64,
    pub lose: f64,
    pub draw: f64,
}

impl Probabilities {
    /// The distribution of a game that is already decided.
    pub fn certain(result: Outcome, player: Player) -> Self {
        match result {
            Outcome::Won(winner) if winner == player => Probabilities {
                win: 1.0,
                ..Default::default()
            },
            Outcome::Drawn => Probabilities {
                draw: 1.0,
                ..Default::default()
            },
            _ => Probabilities {
                lose: 1.0,
                ..Default::default()
            },
        }
    }

    pub fn from_tally(tally: Tally) -> Self {
        let total = tally.total() as f64;
        if total == 0.0 {
            return Probabilities::default();
        }
        Probabilities {
            win: tally.wins as f64 / total,
            lose: tally.losses as f64 / total,
            draw: tally.draws as f64 / total,
        }
    }

    pub fn as_tuple(self) -> (f64, f64, f64) {
        (self.win, self.lose, self.draw)
    }
}

/// Monte Carlo estimator that plays heuristically weighted random games to the end.
#[derive(Clone, Debug)]
pub struct Rollouts<R: Rng = StdRng> {
    rng: R,
}

impl Rollouts<StdRng> {
    pub fn from_entropy() -> Self {
        Rollouts::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Rollouts::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for Rollouts<StdRng> {
    fn default() -> Self {
        Rollouts::from_entropy()
    }
}

impl<R: Rng> Rollouts<R> {
    pub fn new(rng: R) -> Self {
        Rollouts { rng }
    }

    /// Win, lose and draw chances for the side to move, from `simulations` playouts.
    /// A decided game is reported as certain without playing anything.
    pub fn evaluate(&mut self, game: &Game, simulations: usize) -> Probabilities {
        if game.is_over() {
            return Probabilities::certain(game.result, game.to_move);
        }
        if simulations == 0 {
            warn!("asked to evaluate an ongoing game with no simulations");
            return Probabilities::default();
        }
        let tally = self.tally(game, simulations);
        debug!("{simulations} rollouts for {}: {tally:?}", game.to_move);
        Probabilities::from_tally(tally)
    }

    /// Play `simulations` games and count them for the side to move in `game`.
    pub fn tally(&mut self, game: &Game, simulations: usize) -> Tally {
        let player = game.to_move;
        (0..simulations).fold(Tally::default(), |mut tally, _| {
            tally.update(self.simulate(game), player);
            tally
        })
    }

    /// Play one game to the end on a copy of `game`.
    /// A game that somehow outlives the move cap is a draw.
    pub fn simulate(&mut self, game: &Game) -> Outcome {
        let mut game = *game;
        for _ in 0..MAX_ROLLOUT_PLIES {
            if game.is_over() {
                break;
            }
            let Some(mov) = self.pick_move(&game) else { break };
            if game.play(mov).is_err() {
                break;
            }
        }
        match game.result {
            Outcome::InProgress => Outcome::Drawn,
            result => result,
        }
    }

    /// Draw one legal move, weighted by [`move_weight`].
    pub fn pick_move(&mut self, game: &Game) -> Option<Move> {
        let moves = game.legal_moves();
        let weights: ArrayVec<f64, 81> = moves.iter().map(|&mov| move_weight(game, mov)).collect();
        match WeightedIndex::new(&weights) {
            Ok(distribution) => Some(moves[distribution.sample(&mut self.rng)]),
            Err(_) => moves.choose(&mut self.rng).copied(),
        }
    }
}

/// [`Rollouts::evaluate`] split over `threads` workers.
/// Worker `i` is seeded with `seed + i`, so the result only depends on the arguments.
pub fn evaluate_parallel(game: &Game, simulations: usize, threads: usize, seed: u64) -> Probabilities {
    if game.is_over() {
        return Probabilities::certain(game.result, game.to_move);
    }
    let threads = threads.clamp(1, simulations.max(1));
    let tally = thread::scope(|scope| {
        let workers: Vec<_> = (0..threads)
            .map(|i| {
                let share = simulations / threads + usize::from(i < simulations % threads);
                scope.spawn(move || Rollouts::seeded(seed.wrapping_add(i as u64)).tally(game, share))
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().unwrap_or_else(|err| panic::resume_unwind(err)))
            .fold(Tally::default(), Tally::merge)
    });
    debug!("{simulations} rollouts on {threads} threads for {}: {tally:?}", game.to_move);
    Probabilities::from_tally(tally)
}
