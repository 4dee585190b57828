use crate::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Drawn,
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::InProgress
    }
}

impl Outcome {
    /// Whether the board this outcome belongs to is finished.
    pub const fn is_settled(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}
