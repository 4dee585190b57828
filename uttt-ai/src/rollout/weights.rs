use uttt::{line_counts, Game, Move, Outcome, Player, LINES};

use crate::config::{CAPTURE_WEIGHT, CENTER_WEIGHT, CORNER_WEIGHT, FREE_CHOICE_WEIGHT, THREAT_WEIGHT};

/// How likely a rollout is to pick `mov` relative to the other legal moves.
///
/// Every move starts at 1 and is multiplied up for capturing its local board,
/// for turning that board into a two-in-a-row on the meta board, for taking a
/// center or corner, and for sending the opponent to a decided board.
pub fn move_weight(game: &Game, mov: Move) -> f64 {
    let player = game.to_move;
    let placed = game.boards[mov.board].with(mov.row, mov.col, player).outcome();

    let mut weight = 1.0;
    if placed == Outcome::Won(player) {
        weight *= CAPTURE_WEIGHT;
    }
    if creates_meta_threat(game, mov.board, player) {
        weight *= THREAT_WEIGHT;
    }
    if mov.is_center() {
        weight *= CENTER_WEIGHT;
    } else if mov.is_corner() {
        weight *= CORNER_WEIGHT;
    }

    let target = mov.cell();
    let target_settled = if target == mov.board {
        placed.is_settled()
    } else {
        game.outcomes[target].is_settled()
    };
    if target_settled {
        weight *= FREE_CHOICE_WEIGHT;
    }
    weight
}

/// Whether owning `board` would give `player` two of a meta line with the third still open.
pub fn creates_meta_threat(game: &Game, board: usize, player: Player) -> bool {
    let mut meta = game.outcomes;
    meta[board] = Outcome::Won(player);
    let threat = LINES
        .iter()
        .zip(line_counts(&meta))
        .any(|(line, count)| line.contains(&board) && count.of(player) == 2 && count.open == 1);
    threat
}
