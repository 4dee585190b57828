use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use uttt::*;

/// Play a whole seeded random game and check the rules hold after every move.
fn play_out(seed: u64) -> Game {
    let mut game = Game::default();
    let mut settled = [None; 9];
    let mut rng = StdRng::seed_from_u64(seed);

    while !game.is_over() {
        let moves = game.legal_moves();
        assert!(!moves.is_empty(), "ongoing game without moves: {game}");
        if let Some(forced) = game.forced_board() {
            assert!(moves.iter().all(|mov| mov.board == forced));
        }
        assert!(moves.iter().all(|mov| game.outcomes[mov.board] == Outcome::InProgress));

        let &mov = moves.choose(&mut rng).unwrap();
        game.play(mov).unwrap();

        // The same move never succeeds twice.
        let mut again = game;
        assert!(again.play(mov).is_err());
        assert_eq!(again, game);

        // A decided board stays decided.
        for (board, outcome) in game.outcomes.iter().enumerate() {
            if let Some(previous) = settled[board] {
                assert_eq!(*outcome, previous, "board {board} changed after settling");
            } else if outcome.is_settled() {
                settled[board] = Some(*outcome);
            }
            assert_eq!(game.local_outcome(board), Some(*outcome));
            if *outcome == Outcome::Drawn {
                assert!(game.boards[board].is_full(), "board {board} drawn with empty cells");
            }
        }

        if !game.is_over() {
            assert_eq!(game.forced.is_none(), game.outcomes[mov.cell()].is_settled());
        }

        let marks = game
            .boards
            .iter()
            .flat_map(|board| board.cells().iter())
            .filter(|cell| cell.is_some())
            .count();
        assert_eq!(marks, game.ply as usize);

        // Notation round trip.
        let parsed: Game = game.to_string().parse().unwrap();
        assert_eq!(parsed, game);
    }
    assert!(game.ply <= 81);
    assert_eq!(game.result, game.meta_outcome());
    game
}

#[test]
fn random_games_follow_the_rules() {
    for seed in 0..50 {
        play_out(seed);
    }
}

#[test]
fn games_end_in_every_way() {
    let results: Vec<_> = (0..200).map(|seed| play_out(seed).result).collect();
    assert!(results.contains(&Outcome::Won(Player::X)));
    assert!(results.contains(&Outcome::Won(Player::O)));
}
