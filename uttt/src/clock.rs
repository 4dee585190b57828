use std::{fmt::Display, str::FromStr, time::Duration};

use crate::{ParseError, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeControl {
    Three,
    Five,
    Ten,
}

impl Default for TimeControl {
    fn default() -> Self {
        TimeControl::Ten
    }
}

impl TimeControl {
    /// Time each player starts with.
    pub const fn budget(self) -> Duration {
        let minutes = match self {
            TimeControl::Three => 3,
            TimeControl::Five => 5,
            TimeControl::Ten => 10,
        };
        Duration::from_secs(minutes * 60)
    }
}

impl FromStr for TimeControl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3m" => Ok(TimeControl::Three),
            "5m" => Ok(TimeControl::Five),
            "10m" => Ok(TimeControl::Ten),
            other => Err(ParseError::UnknownTimeControl(other.to_string())),
        }
    }
}

impl Display for TimeControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}m", self.budget().as_secs() / 60)
    }
}

/// Chess clock for two players.
///
/// The clock does not measure time itself, the host feeds it elapsed time with `tick`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameClock {
    remaining: [Duration; 2],
    active: Option<Player>,
    running: bool,
    control: Option<TimeControl>,
}

impl GameClock {
    /// Give both players the full budget and start X's time.
    pub fn start(control: TimeControl) -> Self {
        GameClock {
            remaining: [control.budget(); 2],
            active: Some(Player::X),
            running: true,
            control: Some(control),
        }
    }

    pub fn control(&self) -> Option<TimeControl> {
        self.control
    }

    pub fn active(&self) -> Option<Player> {
        self.active
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Count `elapsed` against the active player.
    pub fn tick(&mut self, elapsed: Duration) {
        if !self.running {
            return;
        }
        if let Some(player) = self.active {
            let remaining = &mut self.remaining[player.index()];
            *remaining = remaining.saturating_sub(elapsed);
        }
    }

    pub fn switch_turn(&mut self) {
        self.active = self.active.map(Player::next);
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = self.control.is_some();
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        *self = GameClock::default();
    }

    pub fn remaining(&self, player: Player) -> Duration {
        self.remaining[player.index()]
    }

    /// The first player found out of time, X before O.
    pub fn flagged(&self) -> Option<Player> {
        self.control?;
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| self.remaining(player).is_zero())
    }

    /// Remaining time as `MM:SS`, rounded down to whole seconds.
    pub fn format_remaining(&self, player: Player) -> String {
        let seconds = self.remaining(player).as_secs();
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn budgets() {
        assert_eq!("3m".parse(), Ok(TimeControl::Three));
        assert_eq!("5m".parse(), Ok(TimeControl::Five));
        assert_eq!("10m".parse(), Ok(TimeControl::Ten));
        assert!("7m".parse::<TimeControl>().is_err());
        assert_eq!(TimeControl::default().budget(), Duration::from_secs(600));
        assert_eq!(TimeControl::Five.to_string(), "5m");
    }

    #[test]
    fn only_active_player_runs() {
        let mut clock = GameClock::start(TimeControl::Three);
        clock.tick(Duration::from_millis(1500));
        assert_eq!(clock.remaining(Player::X), Duration::from_millis(178_500));
        assert_eq!(clock.remaining(Player::O), Duration::from_secs(180));

        clock.switch_turn();
        clock.tick(Duration::from_secs(10));
        assert_eq!(clock.active(), Some(Player::O));
        assert_eq!(clock.format_remaining(Player::X), "02:58");
        assert_eq!(clock.format_remaining(Player::O), "02:50");
    }

    #[test]
    fn paused_clock_does_not_run() {
        let mut clock = GameClock::start(TimeControl::Five);
        clock.pause();
        clock.tick(Duration::from_secs(60));
        assert_eq!(clock.remaining(Player::X), Duration::from_secs(300));
        clock.resume();
        clock.tick(Duration::from_secs(60));
        assert_eq!(clock.format_remaining(Player::X), "04:00");
    }

    #[test]
    fn flag_falls_at_zero() {
        let mut clock = GameClock::start(TimeControl::Three);
        assert_eq!(clock.flagged(), None);
        clock.switch_turn();
        clock.tick(Duration::from_secs(1000));
        assert_eq!(clock.remaining(Player::O), Duration::ZERO);
        assert_eq!(clock.flagged(), Some(Player::O));
        assert_eq!(clock.format_remaining(Player::O), "00:00");
    }

    #[test]
    fn reset_clock_is_idle() {
        let mut clock = GameClock::start(TimeControl::Ten);
        clock.reset();
        assert!(!clock.is_running());
        assert_eq!(clock.flagged(), None);
        clock.resume();
        assert!(!clock.is_running());
        assert_eq!(clock.format_remaining(Player::X), "00:00");
    }
}
