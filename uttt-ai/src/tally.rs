use uttt::{Outcome, Player};

/// Results of a batch of games from one player's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Tally {
    pub fn total(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    pub fn win_rate(&self) -> f64 {
        // Draws count as half a win.
        if self.total() == 0 {
            0.0
        } else {
            (self.wins as f64 + self.draws as f64 / 2.) / self.total() as f64
        }
    }

    /// Count a finished game. An unfinished one counts as a draw.
    pub fn update(&mut self, result: Outcome, player: Player) {
        match result {
            Outcome::Won(winner) if winner == player => self.wins += 1,
            Outcome::Won(_) => self.losses += 1,
            Outcome::Drawn | Outcome::InProgress => self.draws += 1,
        }
    }

    #[must_use]
    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            wins: self.wins + other.wins,
            draws: self.draws + other.draws,
            losses: self.losses + other.losses,
        }
    }
}
