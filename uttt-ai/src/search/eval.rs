use uttt::{line_counts, Claim, Game, Outcome, Player};

use crate::config::{META_WEIGHT, ONE_IN_A_ROW, THREE_IN_A_ROW, TWO_IN_A_ROW, WIN_SCORE};

/// Potential of a 3x3 grid from `player`'s point of view.
///
/// Every line is scored on its own: lines holding marks of both players are dead,
/// otherwise one, two or three marks with the rest open are worth 1, 10 or 100.
pub fn line_score<C: Claim>(cells: &[C; 9], player: Player) -> i32 {
    let side = |mine: u8, open: u8| match (mine, open) {
        (3, _) => THREE_IN_A_ROW,
        (2, 1) => TWO_IN_A_ROW,
        (1, 2) => ONE_IN_A_ROW,
        _ => 0,
    };
    line_counts(cells)
        .map(|count| side(count.of(player), count.open) - side(count.of(player.next()), count.open))
        .sum()
}

/// Score of a finished game, `depth` being the plies left to search when it was reached.
/// Quicker wins and slower losses score further from zero.
pub fn terminal_score(outcome: Outcome, player: Player, depth: u32) -> i32 {
    match outcome {
        Outcome::Won(winner) if winner == player => WIN_SCORE + depth as i32,
        Outcome::Won(_) => -WIN_SCORE - depth as i32,
        Outcome::Drawn | Outcome::InProgress => 0,
    }
}

/// Static evaluation of an unfinished game for `player`.
pub fn evaluate(game: &Game, player: Player) -> i32 {
    let meta = line_score(&game.outcomes, player) * META_WEIGHT;
    let local: i32 = game
        .boards
        .iter()
        .zip(game.outcomes)
        .filter(|(_, outcome)| !outcome.is_settled())
        .map(|(board, _)| line_score(board.cells(), player))
        .sum();
    meta + local
}
