use log::{debug, info};
use uttt::{Game, Outcome, Player};

use crate::{Agent, Tally};

/// Play one game from the start with `x` moving first.
pub fn play_game<X: Agent, O: Agent>(x: &mut X, o: &mut O) -> Outcome {
    let mut game = Game::default();
    while !game.is_over() {
        let mov = match game.to_move {
            Player::X => x.select_move(&game),
            Player::O => o.select_move(&game),
        };
        let Some(mov) = mov else { break };
        if let Err(err) = game.play(mov) {
            debug!("{} tried illegal move {mov}: {err}", game.to_move);
            return Outcome::Won(game.to_move.next());
        }
    }
    game.result
}

/// Pits two agents against each other, swapping sides every game.
/// Returns wins, draws, and losses from the point of view of `first`.
pub fn pit<A: Agent, B: Agent>(first: &mut A, second: &mut B, games: u32) -> Tally {
    let tally = (0..games).fold(Tally::default(), |mut tally, i| {
        if i % 2 == 0 {
            tally.update(play_game(first, second), Player::X);
        } else {
            tally.update(play_game(second, first), Player::O);
        }
        tally
    });
    info!(
        "pit over {games} games: {} wins, {} draws, {} losses ({:.1}%)",
        tally.wins,
        tally.draws,
        tally.losses,
        tally.win_rate() * 100.
    );
    tally
}

#[cfg(test)]
mod tests {
    use uttt::{Game, Move, Outcome, Player};

    use super::{pit, play_game};
    use crate::{Agent, Minimax, Rollouts};

    /// Always plays the first legal move.
    struct FirstMove;

    impl Agent for FirstMove {
        fn select_move(&mut self, game: &Game) -> Option<Move> {
            game.legal_moves().first().copied()
        }
    }

    /// Insists on the top left cell of the top left board.
    struct Stubborn;

    impl Agent for Stubborn {
        fn select_move(&mut self, _game: &Game) -> Option<Move> {
            Some(Move::new(0, 0, 0))
        }
    }

    #[test]
    fn games_finish() {
        for seed in 0..10 {
            let result = play_game(&mut Rollouts::seeded(seed), &mut Rollouts::seeded(seed + 100));
            assert!(result.is_settled());
        }
    }

    #[test]
    fn deterministic_agents_repeat() {
        let a = play_game(&mut FirstMove, &mut FirstMove);
        let b = play_game(&mut FirstMove, &mut FirstMove);
        assert_eq!(a, b);
        assert!(a.is_settled());
    }

    #[test]
    fn illegal_move_forfeits() {
        // X opens on 0:00, then O repeats it.
        assert_eq!(play_game(&mut Stubborn, &mut Stubborn), Outcome::Won(Player::X));
    }

    #[test]
    fn pit_counts_every_game() {
        let tally = pit(&mut Rollouts::seeded(1), &mut Rollouts::seeded(2), 6);
        assert_eq!(tally.total(), 6);
    }

    #[test]
    fn search_beats_random() {
        let tally = pit(&mut Minimax::seeded(2, 0), &mut Rollouts::seeded(0), 6);
        assert_eq!(tally.total(), 6);
        assert!(tally.wins > tally.losses, "{tally:?}");
    }
}
